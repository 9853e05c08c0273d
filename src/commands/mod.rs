//! CLI command implementations for summit.
//!
//! Available commands:
//! - **calc**: Calculate the LTV/CAC ratio for one set of inputs
//! - **session**: Edit inputs line by line and watch the ratio update
//! - **gauge**: Render only the gauge SVG
//! - **init**: Initialize a new summit configuration file

pub mod calc;
pub mod gauge;
pub mod init;
pub mod session;

pub use calc::{handle_calc, inputs_from_args, resolve_format, CalcConfig};
pub use gauge::{gauge_with_overrides, handle_gauge, render_gauge, GaugeCommandConfig};
pub use init::{init_config, write_default_config};
pub use session::{handle_session, run_session};
