use anyhow::{Context, Result};
use clap::Parser;
use finbench_report::cli::Cli;
use finbench_report::formatting::FormattingConfig;
use finbench_report::io::output::create_writer;
use finbench_report::{build_views, load_report};
use std::fs::File;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbosity);

    let formatting = if cli.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    formatting.apply();

    log::info!("Loading benchmark data from {}", cli.input.display());
    let report = load_report(&cli.input)?;
    log::debug!(
        "Loaded {} statistics records and {} leaderboard entries",
        report.statistics.len(),
        report.leaderboard.len()
    );

    let views = build_views(&report)?;

    match cli.resolve_output() {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = create_writer(cli.format.into(), file);
            writer.write_views(&views)?;
            log::info!("Report written to {}", path.display());
        }
        None => {
            let mut writer = create_writer(cli.format.into(), std::io::stdout());
            writer.write_views(&views)?;
        }
    }

    Ok(())
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
