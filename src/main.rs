use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};

use queuerestore::app::cli::{Args, Mode};
use queuerestore::app::config::{AppConfig, UserConfig};
use queuerestore::app::lock::RunLock;
use queuerestore::app::logging;
use queuerestore::player::OwnToneClient;
use queuerestore::workflow;

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let args = Args::parse();

    if args.generate_config {
        return match AppConfig::default_toml() {
            Ok(content) => {
                println!("{content}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("FATAL: {e:#}");
                ExitCode::FAILURE
            }
        };
    }

    // Nothing is logged before the config names the log file.
    let config = match AppConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            // No log file yet, so stderr is the only place this can go
            eprintln!("FATAL: {e:#}. Aborting...");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match logging::init(config.log_file.as_deref(), args.quiet) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("FATAL: {e:#}. Aborting...");
            return ExitCode::FAILURE;
        }
    };

    // clap enforces --mode unless --generate-config was given
    let Some(mode) = args.mode else {
        return ExitCode::from(2);
    };

    match run(mode, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Crate errors already carry their cause in the message
            error!("FATAL: {e}. Aborting...");
            ExitCode::FAILURE
        }
    }
}

fn run(mode: Mode, config: &UserConfig) -> Result<()> {
    let _lock = RunLock::acquire(&config.lock_path)?;
    let server = OwnToneClient::new(&config.api_url)?;

    let warnings = match mode {
        Mode::Store => workflow::store(&server, config)?.warnings,
        Mode::Restore => workflow::restore(&server, config)?.warnings,
    };
    if !warnings.is_empty() {
        info!("Finished with {} warning(s)", warnings.len());
    }

    Ok(())
}
