use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::cli::RenderOptions;
use crate::config::SummitConfig;
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::output::{summary_line, CalculationView};
use crate::session::{CalculatorSession, FieldEdit};

/// Line commands understood by the session loop besides `field=value`.
const RESET_COMMAND: &str = "reset";
const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];

pub fn handle_session(render: RenderOptions) -> Result<()> {
    let config = crate::cli::resolve_config(&render)?;
    let formatting = crate::cli::formatting_for(&render, &config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(stdin.lock(), stdout.lock(), &config, formatting)
}

/// Apply one edit per input line and print the summary after each one.
///
/// Unparseable lines produce a warning and the loop continues.
pub fn run_session<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    config: &SummitConfig,
    formatting: FormattingConfig,
) -> Result<()> {
    let formatter = formatter_for(formatting);
    let mut session = CalculatorSession::with_thresholds(config.thresholds());

    for line in reader.lines() {
        let line = line.context("Failed to read session input")?;
        let command = line.trim();
        if command.is_empty() || command.starts_with('#') {
            continue;
        }
        if QUIT_COMMANDS.contains(&command) {
            break;
        }

        if command == RESET_COMMAND {
            session.reset();
        } else {
            match command.parse::<FieldEdit>() {
                Ok(edit) => {
                    log::debug!("Applying {}={:?}", edit.field, edit.raw);
                    session.apply(&edit);
                }
                Err(message) => {
                    log::warn!("Ignoring session input: {}", message);
                    writeln!(writer, "{}", formatter.warning(&message))?;
                    continue;
                }
            }
        }

        write_summary(&mut writer, &session, config, formatter.as_ref())?;
    }

    writer.flush()?;
    Ok(())
}

fn write_summary<W: Write>(
    writer: &mut W,
    session: &CalculatorSession,
    config: &SummitConfig,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let view = CalculationView::new(session.inputs(), *session.report(), config);
    writeln!(writer, "{}", summary_line(&view, formatter))?;
    Ok(())
}
