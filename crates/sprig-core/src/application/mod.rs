//! Application layer for Sprig.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerateService, GenerationPlan, GenerationReport, GenerationRequest};

pub use ports::{
    ConfigSource, Filesystem, HostedRepository, RepositoryHost, SkeletonRenderer, VersionControl,
};

pub use error::ApplicationError;
