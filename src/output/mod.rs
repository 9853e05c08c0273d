//! Report writers for a single calculation.
//!
//! Every writer consumes a [`CalculationView`], which already contains the
//! display strings, so writers only decide layout.

pub mod json;
pub mod markdown;
pub mod svg;
pub mod terminal;
pub mod view;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use svg::SvgWriter;
pub use terminal::{gauge_bar, summary_line, TerminalWriter};
pub use view::{CalculationView, InputRow, RenderedValues};

use std::io::Write;

use crate::formatting::FormattingConfig;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Svg,
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "svg" => Some(Self::Svg),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, view: &CalculationView) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Svg => Box::new(SvgWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

/// Render a view in `format` into a string.
pub fn render_to_string(
    view: &CalculationView,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    create_writer(format, &mut buf, formatting).write_report(view)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute;
    use crate::config::SummitConfig;
    use crate::core::InputSet;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("md"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::parse("html"), None);
    }

    #[test]
    fn test_render_to_string_dispatches_on_format() {
        let inputs = InputSet::new();
        let view = CalculationView::new(&inputs, compute(&inputs), &SummitConfig::default());
        let plain = FormattingConfig::plain();

        let json = render_to_string(&view, OutputFormat::Json, plain).unwrap();
        assert!(json.trim_start().starts_with('{'));

        let svg = render_to_string(&view, OutputFormat::Svg, plain).unwrap();
        assert!(svg.starts_with("<svg"));

        let md = render_to_string(&view, OutputFormat::Markdown, plain).unwrap();
        assert!(md.starts_with("# LTV/CAC Ratio"));

        let text = render_to_string(&view, OutputFormat::Terminal, plain).unwrap();
        assert!(text.contains("Enter inputs to calculate LTV/CAC ratio"));
    }
}
