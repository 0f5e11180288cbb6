use crate::domain::{
    entities::{ProjectStructure, Skeleton},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_skeleton(skeleton: &Skeleton) -> Result<(), DomainError> {
        skeleton.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
