use crate::model::Theme;
use crate::{content, text_summary};
use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "secfolio",
    version,
    about = "Terminal portfolio for a security engineer, with interactive workflow pipelines"
)]
pub struct Cli {
    /// Print the portfolio as plain text and exit (no TUI)
    #[arg(long)]
    pub text: bool,

    /// Override the persisted theme for this session (dark|light)
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Workflow to show first (e.g. "DevSecOps")
    #[arg(long)]
    pub workflow: Option<String>,

    /// Automatic advance interval for the pipeline animation
    #[arg(long, default_value = "2s")]
    pub stage_interval: humantime::Duration,
}

impl Cli {
    pub fn stage_interval(&self) -> Duration {
        Duration::from(self.stage_interval)
    }
}

pub async fn run(args: Cli) -> Result<()> {
    if !args.text {
        #[cfg(feature = "tui")]
        {
            return crate::tui::run(args).await;
        }
        #[cfg(not(feature = "tui"))]
        {
            // Fallback when built without TUI support.
            return run_text();
        }
    }

    run_text()
}

fn run_text() -> Result<()> {
    let summary = text_summary::build_text_summary(&content::dossier(), &content::catalog());
    let stdout = std::io::stdout();
    let mut out = std::io::LineWriter::new(stdout.lock());
    for line in summary.lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
