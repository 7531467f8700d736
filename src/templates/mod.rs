pub mod prompts;
pub mod tasks;
pub mod worklog;

pub use prompts::{CHECKPOINT_PROMPT_TEMPLATE, ENDDAY_PROMPT_TEMPLATE};
pub use tasks::TASKS_TEMPLATE;
pub use worklog::WORKLOG_MARKER;
