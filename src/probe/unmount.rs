//! Unmount capability
//!
//! Linux names the call `umount(2)`; the BSDs and macOS only have
//! `unmount(2)` taking flags. Checks go through [`Unmount`] so the platform
//! choice stays here.

use std::path::Path;

/// Attempt to unmount a mount point
pub trait Unmount {
    fn unmount(&self, target: &Path) -> nix::Result<()>;
}

/// Unmount through the host's native syscall
#[derive(Debug, Clone, Copy, Default)]
pub struct HostUnmount;

impl Unmount for HostUnmount {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    fn unmount(&self, target: &Path) -> nix::Result<()> {
        nix::mount::umount(target)
    }

    #[cfg(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "netbsd",
        target_os = "dragonfly"
    ))]
    fn unmount(&self, target: &Path) -> nix::Result<()> {
        nix::mount::unmount(target, nix::mount::MntFlags::empty())
    }
}
