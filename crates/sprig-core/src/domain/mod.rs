// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Sprig.
//!
//! Pure logic: identity validation, the skeleton model, and rendering
//! context. All I/O (reading git config, writing files, running git) is
//! handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: `Generator` never changes after construction
pub mod entities;
pub mod error;
pub mod generator;
pub mod git_config;

mod validation;

pub use entities::{
    common::{Permissions, RelativePath},
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    render_context::RenderContext,
    skeleton::{DirectorySpec, FileSpec, Skeleton, SkeletonContent, SkeletonNode, SkeletonSource},
};

pub use error::{DomainError, ErrorCategory};
pub use generator::{Generator, GeneratorOptions};
pub use git_config::GitConfig;
pub use validation::DomainValidator;
