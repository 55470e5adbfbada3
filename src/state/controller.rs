//! Timer controller: owns the timer state and its tick registration

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tokio::{runtime::Handle, sync::watch};
use tracing::{debug, info, warn};

use super::{Rejection, StatusReport, TimerSnapshot, TimerState, Transition};
use crate::tasks::TickRegistration;

/// Default interval between ticks
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Mutable part of the controller, guarded by a single lock so that an intent
/// and its registration reconciliation are atomic with respect to ticks
#[derive(Debug)]
struct Inner {
    state: TimerState,
    /// Live only while the state says it should tick
    registration: Option<TickRegistration>,
    next_generation: u64,
    last_action: Option<String>,
    last_action_time: Option<DateTime<Utc>>,
}

/// State shared between the controller and its tick task
#[derive(Debug)]
pub(crate) struct Shared {
    inner: Mutex<Inner>,
    /// Handed to tick tasks so they never keep the timer alive
    weak_self: Weak<Shared>,
    /// Runtime tick tasks are spawned on; `None` when mounted outside one
    runtime: Option<Handle>,
    tick_period: Duration,
    mounted_at: Instant,
    updates_tx: watch::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    _updates_rx: watch::Receiver<TimerSnapshot>,
}

impl Shared {
    fn lock(&self) -> Result<MutexGuard<'_, Inner>, String> {
        self.inner
            .lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Register or release the tick so that it is live iff the state ticks
    fn reconcile(&self, inner: &mut Inner) -> Result<(), String> {
        match (inner.state.should_tick(), inner.registration.is_some()) {
            (true, false) => {
                let runtime = self
                    .runtime
                    .as_ref()
                    .ok_or_else(|| "No tokio runtime available to drive the countdown".to_string())?;
                let generation = inner.next_generation;
                inner.next_generation += 1;
                debug!("Registering tick generation {}", generation);
                inner.registration = Some(TickRegistration::spawn(
                    runtime,
                    self.weak_self.clone(),
                    generation,
                    self.tick_period,
                ));
            }
            (false, true) => {
                debug!("Releasing tick registration");
                inner.registration = None;
            }
            _ => {}
        }
        Ok(())
    }

    fn publish(&self, snapshot: TimerSnapshot) {
        if let Err(e) = self.updates_tx.send(snapshot) {
            warn!("Failed to send timer update: {}", e);
        }
    }

    /// Handle one tick from the registration with the given generation.
    ///
    /// Returns whether that registration is still live afterwards. Ticks from
    /// a released registration are discarded without touching the state.
    pub(crate) fn fire_tick(&self, generation: u64) -> Result<bool, String> {
        let mut inner = self.lock()?;

        let live = inner.registration.as_ref().map(TickRegistration::generation);
        if live != Some(generation) {
            debug!("Discarding stale tick from generation {}", generation);
            return Ok(false);
        }

        inner.state.tick();
        debug!("Tick: {} remaining", inner.state.display());

        let still_live = inner.state.should_tick();
        if !still_live {
            info!("Countdown finished");
            self.reconcile(&mut inner)?;
        }

        let snapshot = TimerSnapshot::from(&inner.state);
        drop(inner);

        self.publish(snapshot);
        Ok(still_live)
    }
}

/// Single owner of a countdown timer.
///
/// Intents are applied synchronously. Dropping the controller releases any
/// live tick registration.
#[derive(Debug)]
pub struct TimerController {
    shared: Arc<Shared>,
}

impl TimerController {
    /// Mount a controller whose countdown advances once per `tick_period`.
    ///
    /// Tick tasks run on the tokio runtime current at mount time. Without one,
    /// `start` returns an error and leaves the timer stopped.
    pub fn new(tick_period: Duration) -> Self {
        Self::mount(tick_period, Handle::try_current().ok())
    }

    /// Mount a controller whose ticks run on the given runtime
    pub fn with_runtime(tick_period: Duration, runtime: Handle) -> Self {
        Self::mount(tick_period, Some(runtime))
    }

    fn mount(tick_period: Duration, runtime: Option<Handle>) -> Self {
        if runtime.is_none() {
            warn!("Timer controller mounted outside a tokio runtime, countdowns cannot start");
        }
        let (updates_tx, updates_rx) = watch::channel(TimerSnapshot::default());

        let shared = Arc::new_cyclic(|weak_self| Shared {
            inner: Mutex::new(Inner {
                state: TimerState::new(),
                registration: None,
                next_generation: 0,
                last_action: None,
                last_action_time: None,
            }),
            weak_self: weak_self.clone(),
            runtime,
            tick_period,
            mounted_at: Instant::now(),
            updates_tx,
            _updates_rx: updates_rx,
        });

        info!("Timer controller mounted with {:?} tick period", tick_period);
        Self { shared }
    }

    /// Apply a raw duration; cancels any countdown in progress
    pub fn set_duration(&self, raw: &str) -> Result<Transition, String> {
        self.apply("set-duration", |state| state.set_duration(raw))
    }

    pub fn start(&self) -> Result<Transition, String> {
        self.apply("start", TimerState::start)
    }

    pub fn pause(&self) -> Result<Transition, String> {
        self.apply("pause", TimerState::pause)
    }

    pub fn reset(&self) -> Result<Transition, String> {
        self.apply("reset", |state| {
            state.reset();
            Ok(())
        })
    }

    /// Run an intent against the state, then reconcile and publish
    fn apply<F>(&self, action: &str, intent: F) -> Result<Transition, String>
    where
        F: FnOnce(&mut TimerState) -> Result<(), Rejection>,
    {
        let mut inner = self.shared.lock()?;
        let previous = inner.state.clone();

        if let Err(rejection) = intent(&mut inner.state) {
            debug!("Ignoring {}: {:?}", action, rejection);
            return Ok(Transition::Ignored(rejection));
        }

        if let Err(e) = self.shared.reconcile(&mut inner) {
            inner.state = previous;
            return Err(e);
        }
        inner.last_action = Some(action.to_string());
        inner.last_action_time = Some(Utc::now());
        let snapshot = TimerSnapshot::from(&inner.state);
        drop(inner); // Release the lock early

        info!(
            "Applied {}: {} remaining, running={}, paused={}",
            action, snapshot.display, snapshot.running, snapshot.paused
        );
        self.shared.publish(snapshot.clone());

        Ok(Transition::Applied(snapshot))
    }

    /// Get the current timer snapshot
    pub fn snapshot(&self) -> Result<TimerSnapshot, String> {
        self.shared
            .lock()
            .map(|inner| TimerSnapshot::from(&inner.state))
    }

    /// Whether a tick registration is currently live
    pub fn is_ticking(&self) -> Result<bool, String> {
        self.shared.lock().map(|inner| inner.registration.is_some())
    }

    /// Receive a snapshot after every applied intent and every tick
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.shared.updates_tx.subscribe()
    }

    /// Snapshot plus last action and uptime
    pub fn status(&self) -> Result<StatusReport, String> {
        let inner = self.shared.lock()?;
        Ok(StatusReport {
            timer: TimerSnapshot::from(&inner.state),
            last_action: inner.last_action.clone(),
            last_action_time: inner.last_action_time,
            uptime: self.uptime(),
        })
    }

    /// Time since mount as a formatted string
    pub fn uptime(&self) -> String {
        format_uptime(self.shared.mounted_at.elapsed())
    }
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD)
    }
}

impl Drop for TimerController {
    fn drop(&mut self) {
        // A poisoned lock must not keep a tick task alive after unmount
        let mut inner = self
            .shared
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if inner.registration.take().is_some() {
            info!("Released live tick registration on unmount");
        }
        info!("Timer controller unmounted");
    }
}

fn format_uptime(duration: Duration) -> String {
    let hours = duration.as_secs() / 3600;
    let minutes = (duration.as_secs() % 3600) / 60;
    let seconds = duration.as_secs() % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
