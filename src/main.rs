//! Sandbox conformance probe CLI

mod cli;
mod logging;

use clap::Parser;
use cli::{Cli, Format};
use console::style;
use log::info;
use sandbox_conform::{JsonReport, Reporter, Result, TextReport, checks, runner};
use std::io;

fn main() {
    let cli = Cli::parse();

    logging::init_logger(cli.verbose);

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", style("error:").for_stderr().red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let layout = cli.layout();
    layout.validate()?;

    let suite = checks::default_suite(&layout);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        use std::io::Write;
        for name in suite.names() {
            writeln!(out, "{}", name)?;
        }
        return Ok(0);
    }

    info!("Probing sandbox rooted at {}", layout.root.display());

    let mut reporter: Box<dyn Reporter + '_> = match cli.format {
        Format::Text => Box::new(TextReport::new(&mut out)),
        Format::Json => Box::new(JsonReport::new(&mut out)),
    };
    let summary = runner::run(suite, reporter.as_mut())?;

    Ok(summary.exit_code())
}
