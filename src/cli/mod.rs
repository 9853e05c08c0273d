//! CLI module for summit
//!
//! - Argument parsing (`args`)
//! - Logging and configuration setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands, InputArgs, OutputFormat, RenderOptions, ThresholdPreset};
pub use setup::{formatting_for, init_logging, level_for_verbosity, resolve_config};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
