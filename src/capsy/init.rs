use std::fs;
use std::io::Write;
use std::path::Path;

use crate::capsy::error::CapsyError;
use crate::templates::{CHECKPOINT_PROMPT_TEMPLATE, ENDDAY_PROMPT_TEMPLATE, TASKS_TEMPLATE};
use crate::utils::fs::{
    create_new_with, prompt_path, state_dir, tasks_path, CHECKPOINT_PROMPT_FILE,
    ENDDAY_PROMPT_FILE, PROMPTS_DIR, RUNS_DIR, SCHEMAS_DIR, WORKLOG_DIR,
};

/// Subdirectories of `.capsy/` created on every init
const STATE_SUBDIRS: [&str; 4] = [WORKLOG_DIR, PROMPTS_DIR, SCHEMAS_DIR, RUNS_DIR];

/// Ensure the `.capsy/` skeleton exists under `project_root`.
///
/// Directories are created when missing. Seed files are written only when
/// absent; an existing file belongs to the user and is never rewritten, so
/// running this again (or after a partial failure) is always safe.
pub fn initialize(project_root: &Path) -> Result<(), CapsyError> {
    let root = state_dir(project_root);
    fs::create_dir_all(&root).map_err(CapsyError::io(&root))?;

    for name in STATE_SUBDIRS {
        let dir = root.join(name);
        fs::create_dir_all(&dir).map_err(CapsyError::io(&dir))?;
    }

    let seeds = [
        (tasks_path(project_root), TASKS_TEMPLATE),
        (
            prompt_path(project_root, CHECKPOINT_PROMPT_FILE),
            CHECKPOINT_PROMPT_TEMPLATE,
        ),
        (
            prompt_path(project_root, ENDDAY_PROMPT_FILE),
            ENDDAY_PROMPT_TEMPLATE,
        ),
    ];
    for (path, content) in &seeds {
        create_file_if_absent(path, content)?;
    }

    Ok(())
}

/// Write `content` to `path` unless something is already there.
///
/// Returns whether the file was created.
fn create_file_if_absent(path: &Path, content: &str) -> Result<bool, CapsyError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(CapsyError::io(parent))?;
    }

    // create_new refuses to open an existing file, so user edits survive even a race
    create_new_with(path, |file| file.write_all(content.as_bytes())).map_err(CapsyError::io(path))
}
