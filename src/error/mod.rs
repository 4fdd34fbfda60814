mod codes;

pub use codes::ExitCode;

use crate::config::ConfigError;
use crate::execute::ExecutionReport;
use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Renamed {renamed} of {planned} files")]
    IncompleteRename {
        renamed: usize,
        planned: usize,
        /// `original -> new: reason` for each failed pair
        failures: Vec<String>,
    },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::InvalidConfig(_) => ExitCode::InvalidArguments,
            AppError::IncompleteRename { .. } => ExitCode::RenameIncomplete,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Build the error for a batch that did not fully apply
    pub fn incomplete(report: &ExecutionReport) -> Self {
        AppError::IncompleteRename {
            renamed: report.renamed,
            planned: report.planned,
            failures: report
                .failures
                .iter()
                .map(|f| format!("{} -> {}: {}", f.original_name, f.new_name, f.error))
                .collect(),
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide the series folder, not a file inside it.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check folder permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::InvalidConfig(err) => match err {
                ConfigError::EmptySeriesName => String::from(
                    "The series name is empty.\n\n\
                     Pass a name with --name.",
                ),
                ConfigError::NoExtensions => String::from(
                    "No file extensions to rename.\n\n\
                     Pass a comma-separated list with --extensions, e.g. .mkv,.srt",
                ),
                ConfigError::SeriesNameUnavailable(path) => format!(
                    "Cannot derive a series name from:\n  {}\n\n\
                     Pass a name with --name.",
                    path.display()
                ),
            },

            AppError::IncompleteRename {
                renamed,
                planned,
                failures,
            } => {
                let mut msg = format!(
                    "Only {} of {} planned files were renamed.\n",
                    renamed, planned
                );

                if !failures.is_empty() {
                    msg.push_str("\nFailed:\n");
                    for failure in failures.iter().take(10) {
                        msg.push_str(&format!("  - {}\n", failure));
                    }
                    if failures.len() > 10 {
                        msg.push_str(&format!("  ... and {} more\n", failures.len() - 10));
                    }
                }

                msg.push_str(
                    "\nFiles that were already renamed keep their new names.\n\
                     Run with --dry to preview the remaining changes.",
                );
                msg
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}
