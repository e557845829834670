//! sandbox-conform: verify that a process really runs inside a restricted sandbox
//!
//! Run inside a freshly built sandbox before untrusted code goes in. The
//! probe looks for the sandbox's virtual root filesystem and attempts a set
//! of syscalls the sandbox must reject with `ENOSYS`, printing one line per
//! check and exiting non-zero if any check fails.
//!
//! # Modules
//!
//! - **verdict**: Pass / Fail / Skip outcome of a check
//! - **runner**: Ordered check suite, sequential runner, run summary
//! - **report**: Text and JSON report sinks
//! - **probe**: Directory and restricted-syscall assertion primitives
//! - **checks**: Filesystem containment and disabled-syscall checks
//!
//! # Example
//!
//! ```ignore
//! use sandbox_conform::{Layout, TextReport, checks, runner};
//!
//! let suite = checks::default_suite(&Layout::default());
//! let mut report = TextReport::new(std::io::stdout().lock());
//! let summary = runner::run(suite, &mut report)?;
//! std::process::exit(summary.exit_code());
//! ```

// Core modules
pub mod errors;
pub mod verdict;

// Harness
pub mod report;
pub mod runner;

// Checks
pub mod checks;
pub mod probe;

// Public API
pub use checks::{Layout, default_suite};
pub use errors::{ConformError, Result};
pub use report::{JsonReport, Reporter, TextReport};
pub use runner::{Check, RunSummary, Suite, run};
pub use verdict::Verdict;
