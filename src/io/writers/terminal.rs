use crate::io::output::OutputWriter;
use crate::views::{LeaderboardRow, ReportViews};
use colored::*;
use std::io::Write;

/// Plain-text report for quick inspection without opening a browser.
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_views(&mut self, views: &ReportViews) -> anyhow::Result<()> {
        self.print_header(views)?;
        self.print_summary(views)?;
        self.print_leaderboard(views)?;
        self.print_difficulty(views)?;
        self.print_failed(views)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self, views: &ReportViews) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "FinBench Benchmark Report".bold().blue())?;
        writeln!(self.writer, "{}", "=========================".blue())?;
        writeln!(
            self.writer,
            "Date: {} | Runs per model: {} | Interval: {}",
            views.meta.date, views.meta.runs, views.meta.interval
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_summary(&mut self, views: &ReportViews) -> anyhow::Result<()> {
        writeln!(self.writer, "Summary:")?;
        writeln!(self.writer, "  Models tested: {}", views.summary.model_count)?;
        writeln!(
            self.writer,
            "  Highest score: {:.1}",
            views.summary.highest_score
        )?;
        writeln!(
            self.writer,
            "  Average score: {:.1}",
            views.summary.mean_score
        )?;
        writeln!(
            self.writer,
            "  Fastest response: {:.0}ms",
            views.summary.fastest_latency_ms
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_leaderboard(&mut self, views: &ReportViews) -> anyhow::Result<()> {
        if views.leaderboard.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "Leaderboard:")?;
        for row in &views.leaderboard {
            writeln!(
                self.writer,
                "  {:>2}. {} ({}) - score {} consistency {:.1}% latency {:.0}ms success {:.0}%",
                row.rank,
                row.model.bold(),
                row.provider,
                colored_score(row),
                row.consistency,
                row.latency_ms,
                row.success_rate
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_difficulty(&mut self, views: &ReportViews) -> anyhow::Result<()> {
        // Hardest indicator first: that is the one worth reading from a terminal.
        let mut ranked: Vec<_> = views.difficulty.iter().collect();
        ranked.sort_by(|a, b| {
            a.mean_score
                .partial_cmp(&b.mean_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        writeln!(self.writer, "Indicator difficulty (hardest first):")?;
        for entry in ranked {
            writeln!(
                self.writer,
                "  {:<10} {:.1}",
                entry.label, entry.mean_score
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_failed(&mut self, views: &ReportViews) -> anyhow::Result<()> {
        if views.failed.models.is_empty() {
            return Ok(());
        }

        writeln!(
            self.writer,
            "{} ({}):",
            "Failed models".red().bold(),
            views.failed.models.len()
        )?;
        for model in &views.failed.models {
            writeln!(self.writer, "  - {}", model)?;
        }
        writeln!(self.writer, "  {}", views.failed.note)?;
        Ok(())
    }
}

fn colored_score(row: &LeaderboardRow) -> String {
    let text = format!("{:.1}", row.score);
    match row.score_tier.label() {
        "excellent" => text.green().to_string(),
        "good" => text.blue().to_string(),
        "fair" => text.yellow().to_string(),
        _ => text.red().to_string(),
    }
}
