//! Filesystem containment: we must be looking at the sandbox's virtual root

use log::debug;

use super::Layout;
use crate::probe::{has_entry, is_dir};
use crate::verdict::Verdict;

/// The sandbox root and its required subdirectories exist, and the scanned
/// directory does not show the forbidden system entry.
pub fn containment(layout: &Layout) -> Verdict {
    check_containment(layout).into()
}

fn check_containment(layout: &Layout) -> Result<(), String> {
    for dir in std::iter::once(layout.root.clone()).chain(layout.required_dirs()) {
        debug!("Expecting directory {}", dir.display());
        if !is_dir(&dir) {
            return Err(format!("Expected a directory: {}", dir.display()));
        }
    }

    match has_entry(&layout.scan_dir, &layout.forbidden) {
        Ok(false) => Ok(()),
        Ok(true) => Err(format!(
            "Unexpected entry {}",
            layout.scan_dir.join(&layout.forbidden).display()
        )),
        Err(e) => {
            debug!("Listing {} failed: {}", layout.scan_dir.display(), e);
            Err(format!("Can't open {}", layout.scan_dir.display()))
        }
    }
}
