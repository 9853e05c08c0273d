// Export modules for library usage
pub mod calculator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod gauge;
pub mod input;
pub mod io;
pub mod output;
pub mod session;

// Re-export commonly used types
pub use crate::calculator::{compute, compute_with, RatioCalculator};
pub use crate::config::{RatioThresholds, SummitConfig};
pub use crate::core::{Field, InputSet, RatioReport};
pub use crate::errors::{Result, SummitError};
pub use crate::output::{create_writer, CalculationView, OutputFormat, OutputWriter};
pub use crate::session::{CalculatorSession, FieldEdit};
