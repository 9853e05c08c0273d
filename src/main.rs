use anyhow::Result;
use summit::cli::{self, Commands};
use summit::commands::{self, CalcConfig, GaugeCommandConfig};

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    match cli.command {
        Commands::Calc {
            inputs,
            format,
            output,
            render,
        } => commands::handle_calc(CalcConfig {
            inputs,
            format: format.map(Into::into),
            output,
            render,
        }),
        Commands::Session { render } => commands::handle_session(render),
        Commands::Gauge {
            fraction,
            healthy,
            size,
            stroke,
            output,
            config,
        } => commands::handle_gauge(GaugeCommandConfig {
            fraction,
            healthy,
            size,
            stroke,
            output,
            config,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
