use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use linediff::{run_linediff, Args, ColorChoice};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default());
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.format_timestamp(None).init();

    let reports = run_linediff(&args.files).context("Could not build diff")?;

    let color = match args.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    };
    colored::control::set_override(color);

    let mut out = io::stdout().lock();
    for report in &reports {
        writeln!(out)?;
        if color {
            write!(out, "{}", report.colored())?;
        } else {
            write!(out, "{report}")?;
        }
    }
    out.flush()?;

    info!("Diff was built for {} file(s)", reports.len());
    Ok(())
}
