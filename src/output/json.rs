use std::io::Write;

use super::view::CalculationView;
use super::OutputWriter;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, view: &CalculationView) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(view)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}
