//! Console input reader

use std::{
    io::{self, BufRead},
    thread,
};
use tokio::sync::mpsc;
use tracing::debug;

/// Read stdin lines on a dedicated thread and forward them over a channel.
///
/// The thread is detached, so a read blocked on an interactive terminal never
/// holds up runtime shutdown. The channel closes at EOF or after a read error.
pub fn spawn_stdin_reader() -> mpsc::Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel(16);

    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let failed = line.is_err();
            if tx.blocking_send(line).is_err() || failed {
                break;
            }
        }
        debug!("Console input reader stopped");
    });

    rx
}
