pub mod error;
pub mod init;
pub mod tasks;
pub mod worklog;
