use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::capsy::error::CapsyError;
use crate::utils::fs::tasks_path;

/// Section of tasks.md that `capsy next` reads
const NEXT_SECTION: &str = "next";

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,2}\s+(.+?)\s*$").expect("heading pattern"));

static TASK_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+\[([ xX])\]\s+(.+?)\s*$").expect("task pattern"));

/// Open (`- [ ]`) items under the `## Next` heading, at most `limit` of them.
///
/// The section ends at the next level-1 or level-2 heading.
pub fn next_open_tasks(content: &str, limit: usize) -> Vec<String> {
    let mut in_next = false;
    let mut tasks = Vec::new();

    for line in content.lines() {
        if let Some(caps) = HEADING.captures(line) {
            in_next = caps[1].eq_ignore_ascii_case(NEXT_SECTION);
            continue;
        }
        if !in_next {
            continue;
        }
        if let Some(caps) = TASK_ITEM.captures(line) {
            if &caps[1] == " " {
                tasks.push(caps[2].to_string());
                if tasks.len() == limit {
                    break;
                }
            }
        }
    }

    tasks
}

/// Read `.capsy/tasks.md` and return its open Next items.
pub fn read_next_tasks(project_root: &Path, limit: usize) -> Result<Vec<String>, CapsyError> {
    let path = tasks_path(project_root);
    let content = fs::read_to_string(&path).map_err(CapsyError::io(&path))?;
    Ok(next_open_tasks(&content, limit))
}
