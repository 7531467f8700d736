use std::path::Path;

use log::debug;

use crate::capsy::error::CapsyError;
use crate::capsy::worklog::{EntryKind, WorklogWriter};
use crate::commands::ensure_initialized;

/// Append a `cp` or `day` note built from the remaining command-line words.
pub fn run(root: &Path, kind: EntryKind, words: &[String]) -> Result<(), CapsyError> {
    ensure_initialized(root)?;

    let message = words.join(" ");
    debug!("appending {} entry ({} bytes)", kind, message.len());

    let writer = WorklogWriter::new(root);
    let path = match kind {
        EntryKind::Checkpoint => writer.append_checkpoint(&message)?,
        EntryKind::Endday => writer.append_endday(&message)?,
    };

    println!("Logged {} to {}", kind, path.display());
    Ok(())
}
