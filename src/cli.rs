use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "finbench-report")]
#[command(
    about = "Generate an interactive visualization report from FinBench benchmark JSON",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Benchmark report JSON produced by the FinBench runner
    pub input: PathBuf,

    /// Output file (defaults to finbench_report.html for HTML, stdout otherwise)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// Plain output: no colors in terminal format
    #[arg(long)]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Html => crate::io::output::OutputFormat::Html,
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

impl Cli {
    /// Where the report goes. HTML defaults to a file next to the caller,
    /// matching the runner's expectations; the structured formats default
    /// to stdout so they can be piped.
    pub fn resolve_output(&self) -> Option<PathBuf> {
        match (&self.output, self.format) {
            (Some(path), _) => Some(path.clone()),
            (None, OutputFormat::Html) => Some(PathBuf::from("finbench_report.html")),
            (None, _) => None,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
