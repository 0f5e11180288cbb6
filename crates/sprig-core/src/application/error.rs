//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The git config file exists but could not be read.
    #[error("Cannot read git config at {path}: {reason}")]
    ConfigUnreadable { path: PathBuf, reason: String },

    /// The git config file is malformed.
    #[error("Malformed git config at {path}, line {line}: {reason}")]
    ConfigParse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A skeleton directory could not be loaded.
    #[error("Cannot load skeleton from {path}: {reason}")]
    SkeletonLoad { path: PathBuf, reason: String },

    /// Skeleton rendering failed.
    #[error("Skeleton rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// An external program (git) failed or could not be started.
    #[error("External command failed: {command}: {reason}")]
    ExternalCommand { command: String, reason: String },

    /// The hosting provider rejected or failed repository creation.
    #[error("Repository host error: {reason}")]
    HostFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigUnreadable { path, .. } => vec![
                format!("Check that {} is readable", path.display()),
                "Point at another file with --gitconfig <PATH>".into(),
            ],
            Self::ConfigParse { path, line, .. } => vec![
                format!("Fix line {} of {}", line, path.display()),
                format!("Inspect it with: git config --file {} --list", path.display()),
            ],
            Self::SkeletonLoad { path, .. } => vec![
                format!("Check the skeleton directory: {}", path.display()),
                "Leave out --skeleton to use the built-in skeleton".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different project name".into(),
            ],
            Self::ExternalCommand { command, .. } => vec![
                format!("Command failed: {}", command),
                "Ensure git is installed and on your PATH".into(),
                "Or pass --no-git to skip repository initialisation".into(),
            ],
            Self::HostFailed { .. } => vec![
                "The project was written locally".into(),
                "Create the remote repository by hand and push".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigUnreadable { .. } | Self::ConfigParse { .. } => {
                ErrorCategory::Configuration
            }
            Self::SkeletonLoad { .. } => ErrorCategory::NotFound,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::LockPoisoned
            | Self::ExternalCommand { .. }
            | Self::HostFailed { .. } => ErrorCategory::Internal,
        }
    }
}
