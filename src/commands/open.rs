use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use clap::ValueEnum;
use log::{debug, info};

use crate::capsy::error::CapsyError;
use crate::capsy::worklog::WorklogWriter;
use crate::commands::ensure_initialized;
use crate::utils::fs::tasks_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpenTarget {
    /// .capsy/tasks.md
    Tasks,
    /// Today's worklog file
    Today,
}

pub fn run(root: &Path, target: OpenTarget) -> Result<(), CapsyError> {
    ensure_initialized(root)?;

    let path = resolve_target(root, target);
    if !path.is_file() {
        return Err(CapsyError::NotFound { path });
    }

    match editor_command() {
        Some(editor) => launch(&editor, &path),
        None => {
            // No editor configured: print the path so it can be piped elsewhere
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn resolve_target(root: &Path, target: OpenTarget) -> PathBuf {
    match target {
        OpenTarget::Tasks => tasks_path(root),
        OpenTarget::Today => WorklogWriter::new(root).today_path(),
    }
}

/// `$VISUAL`, then `$EDITOR`, ignoring blank values
fn editor_command() -> Option<String> {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.trim().is_empty())
}

fn launch(editor: &str, path: &Path) -> Result<(), CapsyError> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| CapsyError::Editor("editor command is empty".to_string()))?;

    debug!("launching {} for {}", program, path.display());
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| CapsyError::Editor(format!("{}: {}", program, e)))?;

    if !status.success() {
        return Err(CapsyError::Editor(format!("{} exited with {}", program, status)));
    }
    info!("editor closed {}", path.display());
    Ok(())
}
