pub mod common;
pub mod project_structure;
pub mod render_context;
pub mod skeleton;

pub use crate::domain::DomainError;
pub use project_structure::ProjectStructure;
pub use render_context::RenderContext;
pub use skeleton::Skeleton;
