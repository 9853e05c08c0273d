use std::io::Write;

use super::view::CalculationView;
use super::OutputWriter;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, view: &CalculationView) -> anyhow::Result<()> {
        writeln!(self.writer, "# LTV/CAC Ratio")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "_{}_", view.rendered.target)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, view: &CalculationView) -> anyhow::Result<()> {
        let status = if !view.report.valid {
            "Incomplete"
        } else if view.report.is_healthy {
            "✅ Healthy"
        } else {
            "⚠️ Below target"
        };

        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row("LTV/CAC", &view.rendered.ratio)?;
        self.write_row("Status", status)?;
        self.write_row("CAC", &view.rendered.cac)?;
        self.write_row("LTV", &view.rendered.ltv)?;
        self.write_row("Customer lifespan", &view.rendered.lifespan)?;
        self.write_row("LTV - CAC", &view.rendered.payback_margin)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", view.rendered.narrative)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_inputs(&mut self, view: &CalculationView) -> anyhow::Result<()> {
        writeln!(self.writer, "## Inputs (Monthly)")?;
        writeln!(self.writer)?;
        for row in &view.inputs {
            let value = row
                .display
                .map(crate::formatting::format_number)
                .unwrap_or_else(|| "_missing_".to_string());
            writeln!(self.writer, "- **{}**: {}", row.label, value)?;
        }
        Ok(())
    }

    fn write_row(&mut self, metric: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {metric} | {value} |")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, view: &CalculationView) -> anyhow::Result<()> {
        self.write_header(view)?;
        self.write_summary(view)?;
        self.write_inputs(view)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute;
    use crate::config::SummitConfig;
    use crate::core::InputSet;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_report() {
        let inputs = InputSet {
            marketing_spend: Some(10000.0),
            sales_spend: Some(10000.0),
            new_customers: Some(50.0),
            arpa: Some(80.0),
            gross_margin_pct: Some(0.5),
            churn_monthly_pct: Some(0.1),
        };
        let view = CalculationView::new(&inputs, compute(&inputs), &SummitConfig::default());

        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf).write_report(&view).unwrap();

        let expected = indoc! {"
            # LTV/CAC Ratio

            _Target ≥ 3.0_

            | Metric | Value |
            |--------|-------|
            | LTV/CAC | 1.00x |
            | Status | ⚠️ Below target |
            | CAC | $400 |
            | LTV | $400 |
            | Customer lifespan | 10 mo |
            | LTV - CAC | $0 |

            Ratio = LTV / CAC = $400 / $400 = 1.00x

            ## Inputs (Monthly)

            - **Marketing Spend (mo)**: 10,000
            - **Sales Spend (mo)**: 10,000
            - **New Customers (mo)**: 50
            - **Avg Monthly Revenue (ARPA)**: 80
            - **Gross Margin %**: 50
            - **Monthly Churn %**: 10
        "};
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_markdown_marks_missing_inputs() {
        let inputs = InputSet::new();
        let view = CalculationView::new(&inputs, compute(&inputs), &SummitConfig::default());
        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf).write_report(&view).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("| Status | Incomplete |"));
        assert!(out.contains("- **Avg Monthly Revenue (ARPA)**: _missing_"));
    }
}
