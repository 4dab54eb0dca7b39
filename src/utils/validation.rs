use crate::errors::{RelationError, Result};

/// Rejects NaN and infinities, which are not real numbers for this domain.
pub fn require_real(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RelationError::InvalidType { name, value })
    }
}

pub fn require_greater_than(
    name: &'static str,
    value: f64,
    bound: f64,
    requirement: &'static str,
) -> Result<f64> {
    if value > bound {
        Ok(value)
    } else {
        Err(RelationError::InvalidRange {
            name,
            value,
            requirement,
        })
    }
}

pub fn require_at_least(
    name: &'static str,
    value: f64,
    bound: f64,
    requirement: &'static str,
) -> Result<f64> {
    if value >= bound {
        Ok(value)
    } else {
        Err(RelationError::InvalidRange {
            name,
            value,
            requirement,
        })
    }
}

/// Half-open interval check, `low <= value < high`.
pub fn require_in_range(
    name: &'static str,
    value: f64,
    low: f64,
    high: f64,
    requirement: &'static str,
) -> Result<f64> {
    if (low..high).contains(&value) {
        Ok(value)
    } else {
        Err(RelationError::InvalidRange {
            name,
            value,
            requirement,
        })
    }
}
