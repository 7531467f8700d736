use std::path::Path;

use log::{debug, info};

use crate::capsy::error::CapsyError;
use crate::capsy::init::initialize;
use crate::utils::fs::{is_initialized, state_dir};

pub fn run(root: &Path) -> Result<(), CapsyError> {
    let existed = is_initialized(root);
    debug!("initializing capsy in {}", root.display());

    initialize(root)?;

    if existed {
        info!("{} already existed; missing files were filled in", state_dir(root).display());
    }

    println!("Initialized Capsy in {}", state_dir(root).display());
    println!("  .capsy/tasks.md");
    println!("  .capsy/worklog/");
    println!("  .capsy/prompts/checkpoint.user.txt");
    println!("  .capsy/prompts/endday.user.txt");
    println!("  .capsy/schemas/");
    println!("  .capsy/runs/");

    Ok(())
}
