//! Rendering of timer snapshots and status reports

use crate::state::{StatusReport, TimerSnapshot};

/// Short label for the timer's run state
pub fn state_label(snapshot: &TimerSnapshot) -> &'static str {
    if snapshot.running {
        "running"
    } else if snapshot.paused {
        "paused"
    } else if snapshot.can_start {
        "ready"
    } else {
        "idle"
    }
}

/// Render a snapshot as a single display line
pub fn render_snapshot(snapshot: &TimerSnapshot, json: bool) -> String {
    if json {
        serde_json::to_string(snapshot)
            .unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
    } else {
        format!("{}  {}", snapshot.display, state_label(snapshot))
    }
}

/// Render the full status report
pub fn render_status(report: &StatusReport, json: bool) -> String {
    if json {
        return serde_json::to_string(report)
            .unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e));
    }

    let duration = report
        .timer
        .configured_duration
        .map(|secs| format!("{}s", secs))
        .unwrap_or_else(|| "unset".to_string());
    let last_action = match (&report.last_action, report.last_action_time) {
        (Some(action), Some(time)) => format!("{} at {}", action, time.format("%H:%M:%S")),
        (Some(action), None) => action.clone(),
        _ => "none".to_string(),
    };

    format!(
        "{}  {}\n  duration: {}\n  last action: {}\n  uptime: {}",
        report.timer.display,
        state_label(&report.timer),
        duration,
        last_action,
        report.uptime
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TimerState;

    #[test]
    fn labels_follow_state() {
        let mut state = TimerState::new();
        assert_eq!(state_label(&TimerSnapshot::from(&state)), "idle");
        state.set_duration("65").unwrap();
        assert_eq!(state_label(&TimerSnapshot::from(&state)), "ready");
        state.start().unwrap();
        assert_eq!(state_label(&TimerSnapshot::from(&state)), "running");
        state.pause().unwrap();
        assert_eq!(state_label(&TimerSnapshot::from(&state)), "paused");
    }

    #[test]
    fn renders_text_line() {
        let mut state = TimerState::new();
        state.set_duration("65").unwrap();
        assert_eq!(render_snapshot(&TimerSnapshot::from(&state), false), "01:05  ready");
    }

    #[test]
    fn renders_json_line() {
        let mut state = TimerState::new();
        state.set_duration("3661").unwrap();
        let line = render_snapshot(&TimerSnapshot::from(&state), true);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["display"], "61:01");
        assert_eq!(value["remaining_seconds"], 3661);
        assert_eq!(value["running"], false);
    }

    #[test]
    fn renders_status_without_actions() {
        let report = StatusReport {
            timer: TimerSnapshot::default(),
            last_action: None,
            last_action_time: None,
            uptime: "3s".to_string(),
        };
        let text = render_status(&report, false);
        assert!(text.starts_with("00:00  idle"));
        assert!(text.contains("duration: unset"));
        assert!(text.contains("last action: none"));
    }
}
