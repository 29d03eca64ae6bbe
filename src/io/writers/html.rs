use crate::io::output::OutputWriter;
use crate::views::ReportViews;
use anyhow::Result;
use html_escape::encode_text;
use serde_json;
use std::io::Write;

/// Renders the self-contained report page: a static template with the
/// view payload embedded as an escaped JSON island the chart scaffolding
/// reads back at load time.
pub struct HtmlWriter<W: Write> {
    writer: W,
    template: &'static str,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            template: include_str!("templates/report.html"),
        }
    }

    fn render_html(&self, views: &ReportViews) -> Result<String> {
        let json_data = serde_json::to_string(views)?;
        let escaped_json = encode_text(&json_data);

        let html = self
            .template
            .replace("{{{JSON_DATA}}}", &escaped_json)
            .replace("{{{DATE}}}", &views.meta.date)
            .replace("{{{TIMESTAMP}}}", &views.meta.timestamp)
            .replace("{{{RUNS}}}", &views.meta.runs.to_string())
            .replace(
                "{{{MODELS_TESTED}}}",
                &views.meta.models_tested.to_string(),
            )
            .replace("{{{SYMBOLS}}}", &views.meta.symbols.join(", "))
            .replace("{{{INTERVAL}}}", &views.meta.interval)
            .replace(
                "{{{HIGHEST_SCORE}}}",
                &format!("{:.1}", views.summary.highest_score),
            )
            .replace(
                "{{{MEAN_SCORE}}}",
                &format!("{:.1}", views.summary.mean_score),
            )
            .replace(
                "{{{FASTEST_LATENCY}}}",
                &format!("{:.0}", views.summary.fastest_latency_ms),
            )
            .replace("{{{FINBENCH_VERSION}}}", &views.meta.finbench_version)
            .replace("{{{PLATFORM}}}", &views.meta.platform)
            .replace("{{{RUNTIME}}}", &views.meta.runtime)
            .replace("{{{TOOL_VERSION}}}", &views.meta.tool_version);

        Ok(html)
    }
}

impl<W: Write> OutputWriter for HtmlWriter<W> {
    fn write_views(&mut self, views: &ReportViews) -> Result<()> {
        let html = self.render_html(views)?;
        write!(self.writer, "{}", html)?;
        Ok(())
    }
}
