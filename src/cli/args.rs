use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThresholdPreset {
    /// Healthy only at 4x or better
    Strict,
    /// Conventional 3x target (default)
    Balanced,
    /// Healthy from 2x, for early-stage businesses
    Lenient,
}

#[derive(Parser, Debug)]
#[command(name = "summit")]
#[command(about = "LTV/CAC unit economics calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that renders a report.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderOptions {
    /// Configuration file (defaults to the nearest .summit.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Healthy-ratio preset (strict, balanced, lenient)
    #[arg(long = "threshold-preset", value_enum)]
    pub threshold_preset: Option<ThresholdPreset>,

    /// Disable colors and emoji
    #[arg(long)]
    pub plain: bool,
}

/// The six monthly inputs as raw text. Omitted or non-numeric values are missing.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Marketing spend per month
    #[arg(long = "marketing-spend", visible_alias = "marketing", allow_hyphen_values = true)]
    pub marketing_spend: Option<String>,

    /// Sales spend per month
    #[arg(long = "sales-spend", visible_alias = "sales", allow_hyphen_values = true)]
    pub sales_spend: Option<String>,

    /// New customers acquired per month
    #[arg(long = "new-customers", visible_alias = "customers", allow_hyphen_values = true)]
    pub new_customers: Option<String>,

    /// Average monthly revenue per account
    #[arg(long, allow_hyphen_values = true)]
    pub arpa: Option<String>,

    /// Gross margin, as a whole percent (70) or a fraction (0.7)
    #[arg(long = "gross-margin", visible_alias = "margin", allow_hyphen_values = true)]
    pub gross_margin: Option<String>,

    /// Monthly churn, as a whole percent (2) or a fraction (0.02)
    #[arg(long, allow_hyphen_values = true)]
    pub churn: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate the LTV/CAC ratio for one set of monthly inputs
    Calc {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output format (defaults to output.default_format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderOptions,
    },

    /// Edit inputs interactively with field=value lines on stdin
    Session {
        #[command(flatten)]
        render: RenderOptions,
    },

    /// Render only the gauge as SVG
    Gauge {
        /// Gauge fill between 0 and 1
        #[arg(long, allow_hyphen_values = true)]
        fraction: f64,

        /// Draw the arc in the healthy color
        #[arg(long)]
        healthy: bool,

        /// Override gauge.size
        #[arg(long)]
        size: Option<u32>,

        /// Override gauge.stroke
        #[arg(long)]
        stroke: Option<u32>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .summit.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Svg,
    Terminal,
}

impl From<OutputFormat> for crate::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::output::OutputFormat::Markdown,
            OutputFormat::Svg => crate::output::OutputFormat::Svg,
            OutputFormat::Terminal => crate::output::OutputFormat::Terminal,
        }
    }
}

impl From<ThresholdPreset> for crate::config::PresetLevel {
    fn from(p: ThresholdPreset) -> Self {
        match p {
            ThresholdPreset::Strict => crate::config::PresetLevel::Strict,
            ThresholdPreset::Balanced => crate::config::PresetLevel::Balanced,
            ThresholdPreset::Lenient => crate::config::PresetLevel::Lenient,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
