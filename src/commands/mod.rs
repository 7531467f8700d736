pub mod entry;
pub mod init;
pub mod next;
pub mod open;

use std::path::Path;

use crate::capsy::error::CapsyError;
use crate::utils::fs::is_initialized;

/// Refuse to touch `.capsy/` contents before `capsy init` has run.
pub fn ensure_initialized(root: &Path) -> Result<(), CapsyError> {
    if !is_initialized(root) {
        return Err(CapsyError::NotInitialized {
            root: root.to_path_buf(),
        });
    }
    Ok(())
}
