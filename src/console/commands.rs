//! Console command parsing

/// One line of console input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply a duration; `None` applies the current draft
    Set(Option<String>),
    /// Replace the draft duration without applying it
    Edit(String),
    Start,
    Pause,
    Reset,
    Status,
    Help,
    Quit,
    /// Blank line
    Noop,
}

/// Parse a console line into a command
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Noop);
    };
    let argument = words.next().map(str::to_string);

    let command = match verb.to_lowercase().as_str() {
        "set" => Command::Set(argument),
        "edit" => Command::Edit(argument.unwrap_or_default()),
        "start" => Command::Start,
        "pause" => Command::Pause,
        "reset" => Command::Reset,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command '{}', try 'help'", other)),
    };
    Ok(command)
}

pub const HELP: &str = "\
Commands:
  set [SECS]  - Apply a duration (or the edited draft) and stop the countdown
  edit SECS   - Edit the draft duration without applying it
  start       - Start or resume the countdown
  pause       - Pause a running countdown
  reset       - Stop and restore the configured duration
  status      - Show the full timer status
  help        - Show this help
  quit        - Exit";
