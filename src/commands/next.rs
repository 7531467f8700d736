use std::path::Path;

use crate::capsy::error::CapsyError;
use crate::capsy::tasks::read_next_tasks;
use crate::commands::ensure_initialized;

/// How many Next items to show
const NEXT_LIMIT: usize = 3;

pub fn run(root: &Path) -> Result<(), CapsyError> {
    ensure_initialized(root)?;

    let tasks = read_next_tasks(root, NEXT_LIMIT)?;
    if tasks.is_empty() {
        println!("No open tasks in Next.");
        return Ok(());
    }

    for (i, task) in tasks.iter().enumerate() {
        println!("{}. {}", i + 1, task);
    }
    Ok(())
}
