// Common error types for the scaffolder

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Error creating directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error creating file {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error: {0}")]
    Validation(String),
}

impl ScaffoldError {
    /// Path the failing filesystem operation targeted, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::CreateDirectory { path, .. } | Self::WriteFile { path, .. } => Some(path),
            Self::Validation(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// User-facing rendering of a [`ScaffoldError`]: the diagnostic line and the
/// process exit code.
#[derive(Debug)]
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub const IO_EXIT_CODE: i32 = 1;
    pub const USAGE_EXIT_CODE: i32 = 2;

    pub fn from_scaffold_error(err: &ScaffoldError) -> Self {
        let exit_code = match err {
            ScaffoldError::CreateDirectory { .. } | ScaffoldError::WriteFile { .. } => {
                Self::IO_EXIT_CODE
            }
            ScaffoldError::Validation(_) => Self::USAGE_EXIT_CODE,
        };

        Self {
            message: err.to_string(),
            exit_code,
        }
    }

    pub fn print(&self) {
        eprintln!("{}", self.message);
    }
}
