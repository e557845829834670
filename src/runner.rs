//! Check registry and sequential runner

use log::{debug, info};
use serde::Serialize;

use crate::errors::Result;
use crate::report::Reporter;
use crate::verdict::Verdict;

/// A named check. The name is what gets reported; it need not be unique.
pub struct Check {
    name: String,
    probe: Box<dyn FnMut() -> Verdict>,
}

impl Check {
    pub fn new(name: impl Into<String>, probe: impl FnMut() -> Verdict + 'static) -> Self {
        Self {
            name: name.into(),
            probe: Box::new(probe),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&mut self) -> Verdict {
        (self.probe)()
    }
}

impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check").field("name", &self.name).finish()
    }
}

/// Ordered collection of checks
#[derive(Debug, Default)]
pub struct Suite {
    checks: Vec<Check>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a check after all previously registered ones
    pub fn check(
        mut self,
        name: impl Into<String>,
        probe: impl FnMut() -> Verdict + 'static,
    ) -> Self {
        self.checks.push(Check::new(name, probe));
        self
    }

    /// Register a check that always reports as skipped
    pub fn skip(self, name: impl Into<String>, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        self.check(name, move || Verdict::Skip(reason.clone()))
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().map(Check::name)
    }
}

/// Aggregate counts for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub passed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Pass => self.passed += 1,
            Verdict::Skip(_) => self.skipped += 1,
            Verdict::Fail(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.skipped + self.failed
    }

    /// Skips never count against success
    pub fn success(&self) -> bool {
        self.failed == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.success() { 0 } else { 1 }
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} succeeded, {} skipped, {} failed",
            self.passed, self.skipped, self.failed
        )
    }
}

/// Run every check once, in registration order, reporting each verdict.
///
/// A failing check never stops the checks after it. The only error is a
/// failure of the reporter itself.
pub fn run(suite: Suite, reporter: &mut dyn Reporter) -> Result<RunSummary> {
    info!("Running {} checks", suite.len());

    let mut summary = RunSummary::default();
    for mut check in suite.checks {
        debug!("Running check: {}", check.name);
        let verdict = check.evaluate();
        debug!("{} -> {:?}", check.name, verdict);

        summary.record(&verdict);
        reporter.check(&check.name, &verdict)?;
    }

    reporter.finish(&summary)?;
    info!("Run finished: {}", summary);
    Ok(summary)
}
