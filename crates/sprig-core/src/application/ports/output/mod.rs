//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sprig-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{GitConfig, ProjectStructure, RenderContext, Skeleton};
use crate::error::SprigResult;

/// Port for reading git configuration.
///
/// Implemented by:
/// - `sprig_adapters::git_config::GitConfigFile` (production, parses the file)
/// - `sprig_adapters::git_config::MemoryConfigSource` (testing)
pub trait ConfigSource: Send + Sync {
    /// Parse the configuration at `path` into a flat key/value mapping.
    fn parse_config(&self, path: &Path) -> SprigResult<GitConfig>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sprig_adapters::filesystem::LocalFilesystem` (production)
/// - `sprig_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SprigResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> SprigResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> SprigResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> SprigResult<()>;
}

/// Port for skeleton rendering.
pub trait SkeletonRenderer: Send + Sync {
    /// Render a skeleton into a project structure rooted at `output_root`.
    fn render(
        &self,
        skeleton: &Skeleton,
        context: &RenderContext,
        output_root: &Path,
    ) -> SprigResult<ProjectStructure>;
}

/// Port for local version control.
///
/// Implemented by:
/// - `sprig_adapters::vcs::GitCommand` (runs the `git` executable)
/// - `sprig_adapters::vcs::RecordingVcs` (testing)
pub trait VersionControl: Send + Sync {
    /// Initialise an empty repository in `dir`.
    fn init(&self, dir: &Path) -> SprigResult<()>;

    /// Register a remote named `name` pointing at `url`.
    fn add_remote(&self, dir: &Path, name: &str, url: &str) -> SprigResult<()>;
}

/// Outcome of asking a host to create a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedRepository {
    /// Browser URL of the repository.
    pub html_url: String,
    /// `false` when the host only describes how to create it by hand.
    pub created: bool,
    /// Follow-up the user has to perform, if any.
    pub instructions: Option<String>,
}

/// Port for remote repository creation.
///
/// Only called when `create_repo` was requested, which guarantees a token.
pub trait RepositoryHost: Send + Sync {
    fn create_repository(
        &self,
        owner: &str,
        token: &str,
        name: &str,
    ) -> SprigResult<HostedRepository>;
}
