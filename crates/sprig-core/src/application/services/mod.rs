//! Application services - orchestrate use cases.

pub mod generate_service;

pub use generate_service::{
    DEFAULT_GITCONFIG, GenerateService, GenerationPlan, GenerationReport, GenerationRequest,
};
