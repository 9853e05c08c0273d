use std::io::Write;

use super::view::CalculationView;
use super::OutputWriter;
use crate::gauge;

/// Writes only the gauge graphic for the calculation.
pub struct SvgWriter<W: Write> {
    writer: W,
}

impl<W: Write> SvgWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for SvgWriter<W> {
    fn write_report(&mut self, view: &CalculationView) -> anyhow::Result<()> {
        let svg = gauge::render_report(&view.report, &view.gauge);
        self.writer.write_all(svg.as_bytes())?;
        Ok(())
    }
}
