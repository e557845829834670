//! Outcome of a single check

/// The three-way result of running one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The property holds
    Pass,
    /// The property does not hold
    Fail(String),
    /// The check was deliberately not asserted; the reason is documentation only
    Skip(String),
}

impl Verdict {
    pub fn fail(message: impl Into<String>) -> Self {
        Verdict::Fail(message.into())
    }

    pub fn skip(reason: impl Into<String>) -> Self {
        Verdict::Skip(reason.into())
    }
}

#[cfg(test)]
impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Verdict::Fail(_))
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Verdict::Skip(_))
    }
}

impl From<std::result::Result<(), String>> for Verdict {
    fn from(result: std::result::Result<(), String>) -> Self {
        match result {
            Ok(()) => Verdict::Pass,
            Err(message) => Verdict::Fail(message),
        }
    }
}
