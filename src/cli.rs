use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use sandbox_conform::Layout;

#[derive(Parser)]
#[command(name = "sandbox-conform")]
#[command(version, about = "Verify that this process runs inside a restricted sandbox", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Run inside the sandbox with the default python layout
    sandbox-conform

    # Custom sandbox root with extra required directories
    sandbox-conform --root /node --require bin --require lib --require include

    # Machine-readable report
    sandbox-conform --format json

    # Show what would be checked
    sandbox-conform --list

EXIT STATUS:
    0 when no check failed (skipped checks do not count), 1 otherwise
")]
pub struct Cli {
    /// Sandbox root directory
    #[arg(long, value_name = "PATH", default_value = "/python")]
    pub root: PathBuf,

    /// Directory that must exist under the root (repeatable); the first one
    /// is the mount point used by the unmount check
    #[arg(long = "require", value_name = "NAME", default_values = ["bin", "lib"])]
    pub required: Vec<String>,

    /// Directory listed when looking for the forbidden entry
    #[arg(long, value_name = "PATH", default_value = "/")]
    pub scan: PathBuf,

    /// Entry of a standard system layout that must not be visible
    #[arg(long, value_name = "NAME", default_value = "usr")]
    pub forbid: String,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// List the registered checks without running them
    #[arg(long)]
    pub list: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One line per check, then a summary line
    Text,
    /// A single JSON document after all checks ran
    Json,
}

impl Cli {
    pub fn layout(&self) -> Layout {
        Layout::new(&self.root)
            .required(self.required.iter().cloned())
            .scan_dir(&self.scan)
            .forbidden(self.forbid.clone())
    }
}
