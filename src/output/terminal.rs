use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use std::io::Write;

use super::view::CalculationView;
use super::OutputWriter;
use crate::core::Adornment;
use crate::formatting::{format_number, FormattingConfig, OutputFormatter};

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    config: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: crate::formatting::formatter_for(config),
            config,
        }
    }

    fn write_header(&mut self, view: &CalculationView) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("LTV/CAC Ratio"))?;
        writeln!(self.writer, "{}", self.formatter.header("============="))?;
        writeln!(self.writer, "{}", self.formatter.dim(&view.rendered.target))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_ratio(&mut self, view: &CalculationView) -> anyhow::Result<()> {
        let report = &view.report;
        let marker = if !report.valid {
            self.formatter.emoji("⚪", "[--]")
        } else if report.is_healthy {
            self.formatter.emoji("🟢", "[OK]")
        } else {
            self.formatter.emoji("🔴", "[LOW]")
        };
        let ratio = self
            .formatter
            .status(&view.rendered.ratio, report.valid && report.is_healthy);

        writeln!(
            self.writer,
            "{} {} {}",
            marker,
            self.formatter.bold(&ratio),
            gauge_bar(report.gauge_fraction, 20)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, view: &CalculationView) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["CAC", "LTV", "Lifespan", "LTV - CAC"]);
        if !self.config.color.should_use_color() {
            table.force_no_tty();
        }
        table.add_row(vec![
            Cell::new(&view.rendered.cac),
            Cell::new(&view.rendered.ltv),
            Cell::new(&view.rendered.lifespan),
            Cell::new(&view.rendered.payback_margin),
        ]);
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer, "{}", view.rendered.narrative)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_inputs(&mut self, view: &CalculationView) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.bold("Inputs (Monthly)"))?;
        for row in &view.inputs {
            let value = match row.display {
                Some(v) => adorn(row.field.adornment(), &format_number(v)),
                None => self.formatter.dim("missing"),
            };
            writeln!(self.writer, "  {:<28} {}", row.label, value)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, view: &CalculationView) -> anyhow::Result<()> {
        self.write_header(view)?;
        self.write_ratio(view)?;
        self.write_breakdown(view)?;
        self.write_inputs(view)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn adorn(adornment: Adornment, value: &str) -> String {
    match adornment {
        Adornment::Prefix(p) => format!("{p}{value}"),
        Adornment::Suffix(s) => format!("{value}{s}"),
        Adornment::None => value.to_string(),
    }
}

/// ASCII rendering of the gauge fill, e.g. `[#####...............]`.
pub fn gauge_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

/// One-line summary used by the interactive session.
pub fn summary_line(view: &CalculationView, formatter: &dyn OutputFormatter) -> String {
    if !view.report.valid {
        let missing: Vec<_> = view.missing.iter().map(|f| f.as_str()).collect();
        let waiting = if missing.is_empty() {
            "new_customers must be greater than zero".to_string()
        } else {
            format!("missing: {}", missing.join(", "))
        };
        return format!(
            "{} {} ({})",
            view.rendered.ratio,
            gauge_bar(0.0, 20),
            formatter.dim(&waiting)
        );
    }
    format!(
        "{} {} CAC {} | LTV {}",
        formatter.status(&view.rendered.ratio, view.report.is_healthy),
        gauge_bar(view.report.gauge_fraction, 20),
        view.rendered.cac,
        view.rendered.ltv
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute;
    use crate::config::SummitConfig;
    use crate::core::{Field, InputSet};
    use crate::formatting::PlainFormatter;

    fn healthy_inputs() -> InputSet {
        InputSet {
            marketing_spend: Some(5000.0),
            sales_spend: Some(3000.0),
            new_customers: Some(40.0),
            arpa: Some(150.0),
            gross_margin_pct: Some(0.7),
            churn_monthly_pct: Some(0.02),
        }
    }

    fn healthy_view() -> CalculationView {
        let inputs = healthy_inputs();
        CalculationView::new(&inputs, compute(&inputs), &SummitConfig::default())
    }

    #[test]
    fn test_gauge_bar() {
        assert_eq!(gauge_bar(0.0, 4), "[....]");
        assert_eq!(gauge_bar(0.5, 4), "[##..]");
        assert_eq!(gauge_bar(7.0, 4), "[####]");
    }

    #[test]
    fn test_plain_terminal_report() {
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf, FormattingConfig::plain())
            .write_report(&healthy_view())
            .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("LTV/CAC Ratio"));
        assert!(out.contains("Target ≥ 3.0"));
        assert!(out.contains("[OK] 26.25x"));
        assert!(out.contains("$5,250"));
        assert!(out.contains("Ratio = LTV / CAC = $5,250 / $200 = 26.25x"));
        assert!(out.contains("Gross Margin %"));
        assert!(out.contains("70%"));
        assert!(out.contains("$5,000"));
    }

    #[test]
    fn test_summary_line_lists_missing_fields() {
        let inputs = InputSet::new().with(Field::Arpa, 150.0);
        let view = CalculationView::new(&inputs, compute(&inputs), &SummitConfig::default());
        let line = summary_line(&view, &PlainFormatter);
        assert!(line.starts_with("—"));
        assert!(line.contains("missing: marketing_spend, sales_spend, new_customers"));
    }

    #[test]
    fn test_summary_line_for_zero_customers() {
        let inputs = InputSet {
            new_customers: Some(0.0),
            ..healthy_inputs()
        };
        let view = CalculationView::new(&inputs, compute(&inputs), &SummitConfig::default());
        assert!(summary_line(&view, &PlainFormatter).contains("greater than zero"));
    }

    #[test]
    fn test_summary_line_for_valid_report() {
        let line = summary_line(&healthy_view(), &PlainFormatter);
        assert_eq!(
            line,
            "26.25x [####################] CAC $200 | LTV $5,250"
        );
    }
}
