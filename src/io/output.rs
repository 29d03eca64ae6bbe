use crate::io::writers::{HtmlWriter, JsonWriter, TerminalWriter};
use crate::views::ReportViews;
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_views(&mut self, views: &ReportViews) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Html => Box::new(HtmlWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
