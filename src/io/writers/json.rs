use crate::io::output::OutputWriter;
use crate::views::ReportViews;
use serde_json;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_views(&mut self, views: &ReportViews) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(views)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}
