//! Syscalls the sandbox must reject
//!
//! Every check here really attempts the call; the result goes straight to
//! [`expect_enosys`].

use log::debug;
use nix::errno::Errno;
use nix::sys::signal::{Signal, kill};
use nix::sys::wait::waitpid;
use nix::unistd::{ForkResult, Pid, fork};
use std::path::Path;

use crate::probe::{Unmount, expect_enosys};
use crate::verdict::Verdict;

/// Process duplication must fail.
///
/// If it does not, the child leaves through `_exit(0)` at once: no report
/// lines, no destructors, no flushing of inherited buffers. The parent reaps
/// it before reporting, so no zombie outlives the check.
pub fn no_fork() -> Verdict {
    debug!("Attempting fork");
    // SAFETY: the child branch only calls `_exit`, which is async-signal-safe.
    match unsafe { fork() } {
        Ok(ForkResult::Child) => unsafe { libc::_exit(0) },
        Ok(ForkResult::Parent { child }) => {
            debug!("fork created child {}", child);
            if let Err(errno) = waitpid(child, None) {
                debug!("Reaping child {} failed: {:?}", child, errno);
            }
            Verdict::fail("fork succeeded when expected ENOSYS")
        }
        Err(errno) => {
            debug!("fork refused: {:?}", errno);
            Verdict::Pass
        }
    }
}

/// Null signal to our own process group
pub fn signal_process_group() -> Verdict {
    debug!("Attempting kill(0, 0)");
    expect_enosys(kill(Pid::from_raw(0), None::<Signal>))
}

/// Wait for any child in our process group
pub fn waitpid_any() -> Verdict {
    debug!("Attempting waitpid(0)");
    expect_enosys(waitpid(Pid::from_raw(0), None))
}

/// Same as [`waitpid_any`] through `wait4`, which nix does not wrap
pub fn wait4_any() -> Verdict {
    debug!("Attempting wait4(0)");
    let mut status: libc::c_int = 0;
    // SAFETY: `status` outlives the call and a null rusage is allowed.
    let ret = unsafe { libc::wait4(0, &mut status, 0, std::ptr::null_mut()) };
    expect_enosys(Errno::result(ret))
}

pub fn unmount(unmounter: &impl Unmount, target: &Path) -> Verdict {
    debug!("Attempting unmount of {}", target.display());
    expect_enosys(unmounter.unmount(target))
}

/// Anonymous pipe creation. Descriptors from an unexpected success are
/// closed when the result is dropped.
pub fn pipe() -> Verdict {
    debug!("Attempting pipe");
    expect_enosys(nix::unistd::pipe())
}
