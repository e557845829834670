//! The concrete sandbox checks and the default suite
//!
//! Check names mirror the call each one attempts, so a report line such as
//! `ERR  kill(0, 0): succeeded when expected ENOSYS` reads on its own.

pub mod filesystem;
pub mod syscalls;


use std::path::{Path, PathBuf};

use crate::errors::{ConformError, Result};
use crate::probe::{HostUnmount, Unmount};
use crate::runner::Suite;

/// chmod inside the sandbox clamps the mode to the user RWX bits instead of
/// rejecting the call, and that behavior varies between sandbox versions.
pub const CHMOD_SKIP_REASON: &str =
    "chmod is clamped to user RWX bits rather than rejected; no policy to assert";

/// Expected shape of the sandbox filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Top-level sandbox directory
    pub root: PathBuf,
    /// Directories that must exist under `root`. The first is also the
    /// mount point the unmount check targets.
    pub required: Vec<String>,
    /// Directory listed when looking for `forbidden`
    pub scan_dir: PathBuf,
    /// Entry of a standard system layout that must not be visible
    pub forbidden: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/python"),
            required: vec!["bin".to_string(), "lib".to_string()],
            scan_dir: PathBuf::from("/"),
            forbidden: "usr".to_string(),
        }
    }
}

impl Layout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn required(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.required = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn scan_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.scan_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn forbidden(mut self, name: impl Into<String>) -> Self {
        self.forbidden = name.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.root.is_absolute() {
            return Err(ConformError::InvalidConfig(format!(
                "sandbox root must be an absolute path: {}",
                self.root.display()
            )));
        }
        if !self.scan_dir.is_absolute() {
            return Err(ConformError::InvalidConfig(format!(
                "scan directory must be an absolute path: {}",
                self.scan_dir.display()
            )));
        }
        if self.required.is_empty() {
            return Err(ConformError::InvalidConfig(
                "at least one required directory is needed".to_string(),
            ));
        }
        for name in self.required.iter().chain(std::iter::once(&self.forbidden)) {
            if !is_plain_name(name) {
                return Err(ConformError::InvalidConfig(format!(
                    "expected a single path component, got {:?}",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Full paths of the required directories, in order
    pub fn required_dirs(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.required.iter().map(|name| self.root.join(name))
    }

    pub fn mount_point(&self) -> PathBuf {
        self.required_dirs()
            .next()
            .unwrap_or_else(|| self.root.clone())
    }
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}

/// The full conformance suite against the host's syscalls
pub fn default_suite(layout: &Layout) -> Suite {
    suite_with(layout, HostUnmount)
}

/// The full suite with a caller-chosen unmount capability
pub fn suite_with<U: Unmount + 'static>(layout: &Layout, unmounter: U) -> Suite {
    let mount_point = layout.mount_point();
    let umount_name = format!("umount({:?})", mount_point.display().to_string());
    let chmod_name = format!("chmod({:?}, 0777)", mount_point.display().to_string());

    let fs_layout = layout.clone();
    Suite::new()
        .check("filesystem()", move || filesystem::containment(&fs_layout))
        .check("no_fork()", syscalls::no_fork)
        .check("kill(0, 0)", syscalls::signal_process_group)
        .check("waitpid(0, &stat, 0)", syscalls::waitpid_any)
        .check("wait4(0, &stat, 0, 0)", syscalls::wait4_any)
        .check(umount_name, move || {
            syscalls::unmount(&unmounter, &mount_point)
        })
        .check("pipe(fd)", syscalls::pipe)
        .skip(chmod_name, CHMOD_SKIP_REASON)
}
