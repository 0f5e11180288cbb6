//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sprig-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ConfigSource`: git configuration lookup
//!   - `Filesystem`: File operations
//!   - `SkeletonRenderer`: Skeleton rendering
//!   - `VersionControl`: local repository initialisation
//!   - `RepositoryHost`: remote repository creation
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    ConfigSource, Filesystem, HostedRepository, RepositoryHost, SkeletonRenderer, VersionControl,
};
