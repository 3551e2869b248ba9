use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use coffee_machine::Machine;
use coffee_machine::config::{Config, ConfigError, USAGE};
use coffee_machine::console::{Console, ConsoleError};
use coffee_machine::csv::{CsvError, read_script, write_inventory};
use thiserror::Error;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Error)]
enum AppError {
    #[error("{0}\n{usage}", usage = USAGE)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error("console task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_args(env::args().skip(1))?;

    match config.script {
        Some(path) => run_script(path).await,
        None => run_console(config.show_collected).await,
    }
}

/// Batch mode: stream script rows into the machine, then print the inventory.
async fn run_script(path: PathBuf) -> Result<(), AppError> {
    if path.extension().is_none_or(|ext| ext != "csv") {
        warn!(path = %path.display(), "input file seems to not be a csv file");
    }

    let requests = read_script(path)?;
    let mut machine = Machine::new();
    let (request_sender, request_receiver) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
        for result in requests {
            match result {
                Ok(request) => {
                    // the machine hung up after `exit`
                    if request_sender.send(request).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
    });

    machine.run(ReceiverStream::new(request_receiver)).await;

    write_inventory(io::stdout().lock(), machine.inventory())?;
    Ok(())
}

/// Interactive mode on stdin/stdout.
async fn run_console(show_collected: bool) -> Result<(), AppError> {
    tokio::task::spawn_blocking(move || {
        let mut machine = Machine::new();
        Console::new(io::stdin().lock(), io::stdout().lock())
            .show_collected(show_collected)
            .run(&mut machine)
    })
    .await??;
    Ok(())
}
