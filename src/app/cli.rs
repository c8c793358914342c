use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use super::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Save the current queue and playback position
    Store,
    /// Reload the saved queue and jump back to the saved track
    Restore,
}

/// queuerestore - keep the OwnTone play queue across restarts
#[derive(Parser, Debug)]
#[command(name = "queuerestore", version, about)]
pub struct Args {
    /// What to do with the queue
    #[arg(long, short = 'm', value_enum, required_unless_present = "generate_config")]
    pub mode: Option<Mode>,

    /// No output to stdout (the log file still gets everything)
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Config file
    #[arg(long, short = 'c', default_value_os_t = AppConfig::get_config_path())]
    pub config: PathBuf,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}
