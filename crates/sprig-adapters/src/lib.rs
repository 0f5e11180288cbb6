//! Infrastructure adapters for Sprig.
//!
//! This crate implements the ports defined in `sprig-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_skeleton;
pub mod filesystem;
pub mod git_config;
pub mod host;
pub mod renderer;
pub mod skeleton_loader;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use git_config::{GitConfigFile, MemoryConfigSource};
pub use host::{ManualHost, RecordingHost};
pub use renderer::SimpleRenderer;
pub use skeleton_loader::DirectorySkeletonLoader;
pub use vcs::{GitCommand, RecordingVcs};
