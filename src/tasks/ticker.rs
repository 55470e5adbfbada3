//! Periodic tick task driving the countdown

use std::{sync::Weak, time::Duration};
use tokio::{
    runtime::Handle,
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error};

use crate::state::controller::Shared;

/// A live periodic tick. Dropping it aborts the task.
#[derive(Debug)]
pub struct TickRegistration {
    generation: u64,
    handle: JoinHandle<()>,
}

impl TickRegistration {
    /// Spawn a tick task on `runtime`, first firing one period from now
    pub(crate) fn spawn(
        runtime: &Handle,
        shared: Weak<Shared>,
        generation: u64,
        period: Duration,
    ) -> Self {
        let handle = runtime.spawn(ticker_task(shared, generation, period));
        Self { generation, handle }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for TickRegistration {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Background task that ticks the timer until its registration is released
async fn ticker_task(shared: Weak<Shared>, generation: u64, period: Duration) {
    debug!("Starting tick task generation {}", generation);

    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        // The timer was unmounted
        let Some(shared) = shared.upgrade() else {
            break;
        };

        match shared.fire_tick(generation) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                error!("Failed to apply tick: {}", e);
                break;
            }
        }
    }

    debug!("Tick task generation {} stopped", generation);
}
