//! Countdown Timer - an interactive countdown with start, pause and reset
//! 
//! This is the main entry point for the countdown-timer application.

use tracing::{error, info};

use countdown_timer::{
    config::Config,
    console::run_console,
    state::TimerController,
    utils::shutdown_signal,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout only carries the timer display
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting countdown-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: tick={}ms, json={}", config.tick_ms, config.json);

    let timer = TimerController::new(config.tick_period());

    if let Some(raw) = &config.duration {
        if let Err(e) = timer.set_duration(raw) {
            error!("Failed to apply initial duration: {}", e);
        }
    }

    tokio::select! {
        result = run_console(&timer, config.json) => {
            if let Err(e) = result {
                error!("Console error: {:#}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    drop(timer);
    info!("Countdown timer shutdown complete");
    Ok(())
}
