use thiserror::Error;

/// Validation and evaluation failures.
///
/// Variants carry the offending `f64`, so an `InvalidType` holding NaN is
/// not `==` to itself. Match on the variant with `matches!` instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RelationError {
    #[error("Invalid type: {name} must be a finite real number (got {value})")]
    InvalidType { name: &'static str, value: f64 },

    #[error("Invalid range: {name} must be {requirement} (got {value})")]
    InvalidRange {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },

    #[error("Overflow: {name} is not representable as a finite f64")]
    Overflow { name: &'static str },
}

impl RelationError {
    /// Name of the argument that failed validation, or of the overflowing
    /// result.
    pub fn name(&self) -> &'static str {
        match self {
            RelationError::InvalidType { name, .. } => name,
            RelationError::InvalidRange { name, .. } => name,
            RelationError::Overflow { name } => name,
        }
    }
}

pub type Result<T> = std::result::Result<T, RelationError>;
