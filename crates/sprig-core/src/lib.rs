//! Sprig Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sprig
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            sprig-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (GenerateService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (ConfigSource, Filesystem, Renderer,    │
//! │  VersionControl, RepositoryHost)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     sprig-adapters (Infrastructure)     │
//! │ (GitConfigFile, LocalFilesystem, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Generator, GitConfig, Skeleton, ...)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sprig_core::domain::{Generator, GeneratorOptions, GitConfig};
//!
//! let config: GitConfig = [
//!     ("user.name", "foo"),
//!     ("user.email", "bar@example.com"),
//!     ("github.user", "technicalpickles"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let generator =
//!     Generator::new(Some("the-perfect-gem"), GeneratorOptions::default(), &config).unwrap();
//! assert_eq!(
//!     generator.git_remote(),
//!     "git@github.com:technicalpickles/the-perfect-gem.git"
//! );
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GenerationReport, GenerationRequest,
        ports::{ConfigSource, Filesystem, RepositoryHost, SkeletonRenderer, VersionControl},
    };
    pub use crate::domain::{
        Generator, GeneratorOptions, GitConfig, ProjectStructure, RenderContext, Skeleton,
    };
    pub use crate::error::{SprigError, SprigResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
