use console::style;
use env_logger::{Builder, Env, Target};
use log::Level;
use std::io::Write;

/// Initialize logger based on verbose flag; `RUST_LOG` takes precedence.
/// Logs always go to stderr, stdout carries the report.
pub fn init_logger(verbose: bool) {
    let env = Env::default().filter_or("RUST_LOG", if verbose { "debug" } else { "warn" });

    Builder::from_env(env)
        .target(Target::Stderr)
        .format(|buf, record| {
            let level = match record.level() {
                Level::Error => format!("{}", style("ERROR").for_stderr().red().bold()),
                Level::Warn => format!("{}", style("WARN ").for_stderr().yellow().bold()),
                Level::Info => format!("{}", style("INFO ").for_stderr().green()),
                Level::Debug => format!("{}", style("DEBUG").for_stderr().cyan()),
                Level::Trace => format!("{}", style("TRACE").for_stderr().dim()),
            };
            writeln!(buf, "{} {}", level, record.args())
        })
        .init();
}
