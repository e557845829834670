//! Assertion primitives the concrete checks are built from
//!
//! - [`is_dir`] / [`has_entry`]: filesystem visibility
//! - [`expect_enosys`]: a syscall the sandbox must reject as not implemented
//! - [`Unmount`]: platform-neutral "attempt unmount" capability

pub mod unmount;

use log::debug;
use nix::errno::Errno;
use std::fs;
use std::io;
use std::path::Path;

use crate::verdict::Verdict;

pub use unmount::{HostUnmount, Unmount};

/// True iff `path` names an existing directory (symlinks followed).
/// Missing, inaccessible and non-directory paths all yield false.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref())
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

/// Whether `dir` lists an entry called `name`
pub fn has_entry(dir: impl AsRef<Path>, name: &str) -> io::Result<bool> {
    for entry in fs::read_dir(dir.as_ref())? {
        if entry?.file_name() == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Classify the outcome of a syscall that must fail with `ENOSYS`
pub fn expect_enosys<T>(result: nix::Result<T>) -> Verdict {
    match result {
        Ok(_) => Verdict::fail("succeeded when expected ENOSYS"),
        Err(Errno::ENOSYS) => Verdict::Pass,
        Err(errno) => {
            debug!("Expected ENOSYS, got {:?}", errno);
            Verdict::Fail(format!(
                "failed with {} when expected ENOSYS",
                errno.desc()
            ))
        }
    }
}
