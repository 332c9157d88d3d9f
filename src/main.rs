use std::{fs::OpenOptions, process::ExitCode};

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

use mazewalk::{app::App, config::Config};

/// Route log output to the configured file; the terminal belongs to the game.
fn init_tracing(config: &Config) -> std::io::Result<WorkerGuard> {
    if let Some(parent) = config.log_file.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(config.log_level)
        .init();
    Ok(guard)
}

fn main() -> ExitCode {
    let config = Config::parse();

    let _guard = match init_tracing(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!(
                "Failed to open log file {}: {}",
                config.log_file.display(),
                e
            );
            return ExitCode::FAILURE;
        }
    };

    let app = App::new(config);
    let mut stdout = std::io::stdout();
    if let Err(e) = App::setup_terminal(&mut stdout) {
        eprintln!("Failed to set up terminal: {}", e);
        return ExitCode::FAILURE;
    }
    let result = app.run(&mut stdout);
    if let Err(e) = App::restore_terminal(&mut stdout) {
        eprintln!("Failed to restore terminal: {}", e);
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("[app] {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
