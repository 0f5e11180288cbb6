// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::git_config::{GITHUB_TOKEN, GITHUB_USER, USER_EMAIL, USER_NAME};

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Identity Errors (raised by Generator::new, in check order)
    // ========================================================================
    #[error("No GitHub repository name given")]
    NoRepoNameGiven,

    /// The name cannot serve as a single directory under the output dir.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("No user name found in git config (user.name)")]
    NoUserName,

    #[error("No user email found in git config (user.email)")]
    NoUserEmail,

    #[error("No GitHub user found in git config (github.user)")]
    NoHostingUser,

    #[error("No GitHub token found in git config (github.token), required to create the repository")]
    NoHostingToken,

    // ========================================================================
    // Skeleton / Structure Errors
    // ========================================================================
    #[error("Invalid skeleton: {0}")]
    InvalidSkeleton(String),

    #[error("Skeleton '{name}' has no content")]
    EmptySkeleton { name: String },

    #[error("Duplicate path in skeleton: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoRepoNameGiven => vec![
                "Pass the project name as the first argument".into(),
                "Example: sprig new the-perfect-gem".into(),
            ],
            Self::InvalidProjectName { .. } => vec![
                "The name becomes a directory; use a single path component".into(),
                "Examples: the-perfect-gem, my_lib, project123".into(),
            ],
            Self::NoUserName => vec![
                "Tell git who you are:".into(),
                format!("  git config --global {USER_NAME} \"Your Name\""),
            ],
            Self::NoUserEmail => vec![
                "Tell git which email to use:".into(),
                format!("  git config --global {USER_EMAIL} you@example.com"),
            ],
            Self::NoHostingUser => vec![
                "Record your GitHub username in git config:".into(),
                format!("  git config --global {GITHUB_USER} your-github-login"),
            ],
            Self::NoHostingToken => vec![
                "Creating the remote repository needs a GitHub token:".into(),
                format!("  git config --global {GITHUB_TOKEN} <token>"),
                "Or leave out --create-repo and create the repository later".into(),
            ],
            Self::EmptySkeleton { name } => vec![
                format!("Skeleton '{}' contains no files", name),
                "Add files to the skeleton directory or use the built-in skeleton".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoUserName | Self::NoUserEmail | Self::NoHostingUser | Self::NoHostingToken => {
                ErrorCategory::Identity
            }
            Self::NoRepoNameGiven
            | Self::InvalidProjectName { .. }
            | Self::InvalidSkeleton(_)
            | Self::EmptySkeleton { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    /// Required git config entries are missing.
    Identity,
    Internal,
}
