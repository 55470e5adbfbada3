//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-timer")]
#[command(about = "An interactive terminal countdown timer")]
#[command(version)]
pub struct Config {
    /// Duration in seconds to load at startup
    #[arg(short, long, value_name = "SECS")]
    pub duration: Option<String>,

    /// Interval between ticks in milliseconds
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Render timer updates as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the tick period as a `Duration`
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_second_ticks() {
        let config = Config::try_parse_from(["countdown-timer"]).unwrap();
        assert_eq!(config.tick_period(), Duration::from_secs(1));
        assert_eq!(config.duration, None);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn rejects_zero_tick_period() {
        assert!(Config::try_parse_from(["countdown-timer", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn keeps_raw_duration() {
        let config = Config::try_parse_from(["countdown-timer", "-d", "90", "-v", "--json"]).unwrap();
        assert_eq!(config.duration.as_deref(), Some("90"));
        assert!(config.json);
        assert_eq!(config.log_level(), "debug");
    }
}
