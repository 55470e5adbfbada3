//! Console presentation layer
//!
//! Reads one command per stdin line, forwards intents to the timer controller
//! and re-renders whenever the controller publishes a new snapshot.

pub mod commands;
pub mod input;
pub mod render;

use anyhow::Context;
use tracing::{error, info};

use crate::state::{parse_duration, TimerController};
use commands::{parse_command, Command, HELP};
use input::spawn_stdin_reader;
use render::{render_snapshot, render_status};

/// What the console loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print; applied intents are rendered from the update channel
    Silent,
    Print(String),
    Quit,
}

/// Console session state: the controller plus the duration input draft
pub struct Console<'a> {
    timer: &'a TimerController,
    draft: String,
    json: bool,
}

impl<'a> Console<'a> {
    pub fn new(timer: &'a TimerController, json: bool) -> Self {
        Self {
            timer,
            draft: String::new(),
            json,
        }
    }

    /// Current draft duration, empty when unset or invalid
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Execute one command. Rejected intents are silently ignored.
    pub fn handle(&mut self, command: Command) -> Result<Reply, String> {
        match command {
            Command::Set(raw) => {
                let raw = raw.unwrap_or_else(|| self.draft.clone());
                self.timer.set_duration(&raw)?;
            }
            Command::Edit(raw) => {
                // Like a numeric input field: anything but a positive number clears it
                self.draft = parse_duration(&raw)
                    .map(|seconds| seconds.to_string())
                    .unwrap_or_default();
                let shown: &str = if self.draft.is_empty() { "empty" } else { &self.draft };
                return Ok(Reply::Print(format!("draft: {}", shown)));
            }
            Command::Start => {
                self.timer.start()?;
            }
            Command::Pause => {
                self.timer.pause()?;
            }
            Command::Reset => {
                self.timer.reset()?;
            }
            Command::Status => {
                let report = self.timer.status()?;
                return Ok(Reply::Print(render_status(&report, self.json)));
            }
            Command::Help => return Ok(Reply::Print(HELP.to_string())),
            Command::Quit => return Ok(Reply::Quit),
            Command::Noop => {}
        }
        Ok(Reply::Silent)
    }
}

/// Drive the console until `quit`, EOF on stdin, or a closed update channel
pub async fn run_console(timer: &TimerController, json: bool) -> anyhow::Result<()> {
    let mut console = Console::new(timer, json);
    let mut lines = spawn_stdin_reader();
    let mut updates = timer.subscribe();

    println!("{}", render_snapshot(&updates.borrow_and_update(), json));

    loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line else {
                    info!("Console input closed");
                    break;
                };
                let line = line.context("Failed to read console input")?;

                let command = match parse_command(&line) {
                    Ok(command) => command,
                    Err(hint) => {
                        println!("{}", hint);
                        continue;
                    }
                };

                match console.handle(command) {
                    Ok(Reply::Silent) => {}
                    Ok(Reply::Print(text)) => println!("{}", text),
                    Ok(Reply::Quit) => break,
                    Err(e) => error!("Failed to handle command: {}", e),
                }
            }

            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                println!("{}", render_snapshot(&updates.borrow_and_update(), json));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(line: &str) -> Command {
        parse_command(line).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn set_without_argument_applies_draft() {
        let timer = TimerController::default();
        let mut console = Console::new(&timer, false);

        assert_eq!(
            console.handle(command("edit 90")).unwrap(),
            Reply::Print("draft: 90".to_string())
        );
        assert_eq!(timer.snapshot().unwrap().remaining_seconds, 0);

        assert_eq!(console.handle(command("set")).unwrap(), Reply::Silent);
        assert_eq!(timer.snapshot().unwrap().remaining_seconds, 90);
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_draft_clears_and_is_ignored() {
        let timer = TimerController::default();
        let mut console = Console::new(&timer, false);
        console.handle(command("set 30")).unwrap();

        console.handle(command("edit abc")).unwrap();
        assert_eq!(console.draft(), "");
        assert_eq!(console.handle(command("set")).unwrap(), Reply::Silent);
        assert_eq!(timer.snapshot().unwrap().remaining_seconds, 30);
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_intents_are_silent() {
        let timer = TimerController::default();
        let mut console = Console::new(&timer, false);

        assert_eq!(console.handle(Command::Start).unwrap(), Reply::Silent);
        assert_eq!(console.handle(Command::Pause).unwrap(), Reply::Silent);
        assert!(!timer.snapshot().unwrap().running);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_ignores_draft() {
        let timer = TimerController::default();
        let mut console = Console::new(&timer, false);
        console.handle(command("set 20")).unwrap();
        console.handle(command("edit 45")).unwrap();
        console.handle(Command::Reset).unwrap();

        assert_eq!(timer.snapshot().unwrap().remaining_seconds, 20);
    }

    #[tokio::test(start_paused = true)]
    async fn status_and_quit() {
        let timer = TimerController::default();
        let mut console = Console::new(&timer, false);
        console.handle(command("set 65")).unwrap();

        match console.handle(Command::Status).unwrap() {
            Reply::Print(text) => assert!(text.starts_with("01:05  ready")),
            other => panic!("unexpected reply: {:?}", other),
        }
        assert_eq!(console.handle(Command::Quit).unwrap(), Reply::Quit);
    }
}
