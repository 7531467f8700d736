use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Process exit codes, one per error category.
pub const EXIT_UNEXPECTED: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_NOT_INITIALIZED: i32 = 3;
pub const EXIT_FILESYSTEM: i32 = 4;

#[derive(Error, Debug)]
pub enum CapsyError {
    /// Bad or missing user input, e.g. a blank worklog message
    #[error("{0}")]
    InvalidArgument(String),

    /// `.capsy/` is missing under the project root
    #[error("Capsy not initialized in {}", .root.display())]
    NotInitialized { root: PathBuf },

    /// A filesystem call failed on `path`
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file the user asked for does not exist yet
    #[error("{} does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to launch editor: {0}")]
    Editor(String),
}

impl CapsyError {
    /// Build a closure for `map_err` that tags an I/O error with the path it concerns.
    pub fn io(path: &Path) -> impl FnOnce(io::Error) -> CapsyError + '_ {
        move |source| CapsyError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CapsyError::InvalidArgument(_) => EXIT_USAGE,
            CapsyError::NotInitialized { .. } => EXIT_NOT_INITIALIZED,
            CapsyError::Io { .. } | CapsyError::NotFound { .. } => EXIT_FILESYSTEM,
            CapsyError::Editor(_) => EXIT_UNEXPECTED,
        }
    }
}
