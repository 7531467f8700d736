use std::env;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};

pub const STATE_DIR: &str = ".capsy";
pub const WORKLOG_DIR: &str = "worklog";
pub const PROMPTS_DIR: &str = "prompts";
pub const SCHEMAS_DIR: &str = "schemas";
pub const RUNS_DIR: &str = "runs";
pub const TASKS_FILE: &str = "tasks.md";
pub const CHECKPOINT_PROMPT_FILE: &str = "checkpoint.user.txt";
pub const ENDDAY_PROMPT_FILE: &str = "endday.user.txt";

/// Get the `.capsy` state root under a project root
pub fn state_dir(root: &Path) -> PathBuf {
    root.join(STATE_DIR)
}

/// Get the directory holding one log file per day
pub fn worklog_dir(root: &Path) -> PathBuf {
    state_dir(root).join(WORKLOG_DIR)
}

/// Get the path to the task file
pub fn tasks_path(root: &Path) -> PathBuf {
    state_dir(root).join(TASKS_FILE)
}

/// Get the path to a prompt template
pub fn prompt_path(root: &Path, file_name: &str) -> PathBuf {
    state_dir(root).join(PROMPTS_DIR).join(file_name)
}

/// Check if the `.capsy` directory exists under the project root
pub fn is_initialized(root: &Path) -> bool {
    state_dir(root).is_dir()
}

/// Create `path` and fill it with `write`, unless the file already exists.
///
/// Returns `Ok(false)` when something was already there. If `write` fails the
/// half-written file is removed, so the next attempt starts from scratch.
pub fn create_new_with<F>(path: &Path, write: F) -> io::Result<bool>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e),
    };

    if let Err(e) = write(&mut file) {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(e);
    }
    Ok(true)
}

/// Resolve the project root: `dir` (or the working directory) made absolute
/// and lexically normalized.
pub fn resolve_root(dir: Option<&Path>) -> io::Result<PathBuf> {
    let cwd = env::current_dir()?;
    let joined = match dir {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };
    Ok(normalize(&joined))
}

/// Drop `.` components and fold `..` into their parent without touching the disk.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
