use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

use crate::capsy::error::CapsyError;
use crate::templates::WORKLOG_MARKER;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::fs::{create_new_with, worklog_dir};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// What kind of note a worklog line records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Mid-session note
    Checkpoint,
    /// Session-closing note
    Endday,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Checkpoint => "CHECKPOINT",
            EntryKind::Endday => "ENDDAY",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single worklog line, formatted and written immediately.
#[derive(Debug, Clone)]
pub struct WorklogEntry<'a> {
    pub kind: EntryKind,
    pub timestamp: NaiveDateTime,
    pub message: &'a str,
}

impl fmt::Display for WorklogEntry<'_> {
    /// Format: - [HH:MM] LABEL: message
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- [{}] {}: {}",
            self.timestamp.format(TIME_FORMAT),
            self.kind,
            self.message
        )
    }
}

/// Appends entries to `.capsy/worklog/<YYYY-MM-DD>.md`.
///
/// The caller must have checked that the project is initialized
/// (see [`crate::utils::fs::is_initialized`]); the writer does not re-check.
pub struct WorklogWriter<C = SystemClock> {
    project_root: PathBuf,
    clock: C,
}

impl WorklogWriter {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self::with_clock(project_root, SystemClock)
    }
}

impl<C: Clock> WorklogWriter<C> {
    pub fn with_clock(project_root: impl Into<PathBuf>, clock: C) -> Self {
        WorklogWriter {
            project_root: project_root.into(),
            clock,
        }
    }

    pub fn append_checkpoint(&self, message: &str) -> Result<PathBuf, CapsyError> {
        self.append_entry(EntryKind::Checkpoint, message)
    }

    pub fn append_endday(&self, message: &str) -> Result<PathBuf, CapsyError> {
        self.append_entry(EntryKind::Endday, message)
    }

    /// Path of the worklog file for the current date
    pub fn today_path(&self) -> PathBuf {
        self.path_for(self.clock.now().date())
    }

    fn path_for(&self, date: NaiveDate) -> PathBuf {
        worklog_dir(&self.project_root).join(format!("{}.md", date.format(DATE_FORMAT)))
    }

    /// Validate, then append one line for `kind` to today's file.
    ///
    /// Returns the path written to.
    pub fn append_entry(&self, kind: EntryKind, raw_message: &str) -> Result<PathBuf, CapsyError> {
        let message = normalize_message(raw_message)?;

        // One reading of the clock feeds both the file name and the line timestamp
        let now = self.clock.now();
        let path = self.path_for(now.date());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(CapsyError::io(parent))?;
        }
        write_header_if_absent(&path, now.date())?;

        let entry = WorklogEntry {
            kind,
            timestamp: now,
            message,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(CapsyError::io(&path))?;
        // Single write so concurrent appenders never interleave within a line
        file.write_all(entry.to_string().as_bytes())
            .map_err(CapsyError::io(&path))?;

        Ok(path)
    }
}

/// Trim the message; reject it if nothing is left.
fn normalize_message(raw: &str) -> Result<&str, CapsyError> {
    let message = raw.trim();
    if message.is_empty() {
        return Err(CapsyError::InvalidArgument(
            "message must not be blank".to_string(),
        ));
    }
    Ok(message)
}

fn header(date: NaiveDate) -> String {
    format!("# {}\n\n{}\n\n", date.format(DATE_FORMAT), WORKLOG_MARKER)
}

/// Create the day's file with its header. An existing file is left alone.
fn write_header_if_absent(path: &Path, date: NaiveDate) -> Result<(), CapsyError> {
    create_new_with(path, |file| file.write_all(header(date).as_bytes()))
        .map_err(CapsyError::io(path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capsy::init::initialize;
    use crate::utils::clock::FixedClock;
    use tempfile::tempdir;

    #[test]
    fn test_entry_kind_labels() {
        assert_eq!(EntryKind::Checkpoint.label(), "CHECKPOINT");
        assert_eq!(EntryKind::Endday.label(), "ENDDAY");
        assert_eq!(EntryKind::Endday.to_string(), "ENDDAY");
    }

    #[test]
    fn test_entry_format() {
        let entry = WorklogEntry {
            kind: EntryKind::Checkpoint,
            timestamp: FixedClock::at("2025-06-12", "07:05").0,
            message: "setup done",
        };
        assert_eq!(entry.to_string(), "- [07:05] CHECKPOINT: setup done\n");
    }

    #[test]
    fn test_header_format() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
        assert_eq!(header(date), "# 2025-06-12\n\n> Capsy worklog\n\n");
    }

    #[test]
    fn test_append_checkpoint_round_trip() {
        let dir = tempdir().unwrap();
        initialize(dir.path()).unwrap();

        let writer = WorklogWriter::with_clock(dir.path(), FixedClock::at("2025-06-12", "14:32"));
        let path = writer.append_checkpoint("setup done").unwrap();

        assert_eq!(path, dir.path().join(".capsy/worklog/2025-06-12.md"));
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "# 2025-06-12\n\n> Capsy worklog\n\n- [14:32] CHECKPOINT: setup done\n"
        );
    }

    #[test]
    fn test_header_written_once() {
        let dir = tempdir().unwrap();
        initialize(dir.path()).unwrap();

        let morning = WorklogWriter::with_clock(dir.path(), FixedClock::at("2025-06-12", "09:00"));
        let evening = WorklogWriter::with_clock(dir.path(), FixedClock::at("2025-06-12", "18:45"));
        morning.append_checkpoint("first").unwrap();
        let path = evening.append_endday("second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("# 2025-06-12").count(), 1);
        assert_eq!(content.matches(WORKLOG_MARKER).count(), 1);

        let entries: Vec<&str> = content.lines().filter(|l| l.starts_with("- [")).collect();
        assert_eq!(
            entries,
            vec!["- [09:00] CHECKPOINT: first", "- [18:45] ENDDAY: second"]
        );
    }

    #[test]
    fn test_existing_file_is_appended_not_rewritten() {
        let dir = tempdir().unwrap();
        initialize(dir.path()).unwrap();
        let path = dir.path().join(".capsy/worklog/2025-06-12.md");
        fs::write(&path, "hand written notes\n").unwrap();

        let writer = WorklogWriter::with_clock(dir.path(), FixedClock::at("2025-06-12", "10:00"));
        writer.append_checkpoint("more").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "hand written notes\n- [10:00] CHECKPOINT: more\n");
    }

    #[test]
    fn test_separate_days_get_separate_files() {
        let dir = tempdir().unwrap();
        initialize(dir.path()).unwrap();

        let day_one = WorklogWriter::with_clock(dir.path(), FixedClock::at("2025-06-12", "17:00"));
        let day_two = WorklogWriter::with_clock(dir.path(), FixedClock::at("2025-06-13", "09:30"));
        let first = day_one.append_endday("wrapped up").unwrap();
        let second = day_two.append_checkpoint("fresh start").unwrap();

        assert_ne!(first, second);

        let first_content = fs::read_to_string(&first).unwrap();
        let second_content = fs::read_to_string(&second).unwrap();
        assert!(first_content.starts_with("# 2025-06-12\n"));
        assert!(second_content.starts_with("# 2025-06-13\n"));
        assert!(first_content.contains("ENDDAY: wrapped up"));
        assert!(!first_content.contains("fresh start"));
        assert!(second_content.contains("CHECKPOINT: fresh start"));
        assert!(!second_content.contains("wrapped up"));
    }

    #[test]
    fn test_message_is_trimmed() {
        let dir = tempdir().unwrap();
        let writer = WorklogWriter::with_clock(dir.path(), FixedClock::at("2025-06-12", "11:11"));

        let path = writer.append_checkpoint("  \tpadded note \n").unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.ends_with("- [11:11] CHECKPOINT: padded note\n"));
    }

    #[test]
    fn test_markdown_is_not_escaped() {
        let dir = tempdir().unwrap();
        let writer = WorklogWriter::with_clock(dir.path(), FixedClock::at("2025-06-12", "11:11"));

        let path = writer.append_checkpoint("**bold** _and_ `code`").unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("CHECKPOINT: **bold** _and_ `code`\n"));
    }

    #[test]
    fn test_blank_message_rejected_without_writes() {
        let dir = tempdir().unwrap();
        let writer = WorklogWriter::with_clock(dir.path(), FixedClock::at("2025-06-12", "12:00"));

        for raw in ["", "   ", "\t\n "] {
            let err = writer.append_checkpoint(raw).unwrap_err();
            assert!(matches!(err, CapsyError::InvalidArgument(_)));
        }

        // Not even the worklog directory gets created
        assert!(!dir.path().join(".capsy").exists());
    }

    #[test]
    fn test_today_path_uses_clock_date() {
        let writer = WorklogWriter::with_clock("/work/project", FixedClock::at("2024-02-29", "23:59"));
        assert_eq!(
            writer.today_path(),
            PathBuf::from("/work/project/.capsy/worklog/2024-02-29.md")
        );
    }
}
