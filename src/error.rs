// ⚠️ Vehicle Errors
// Every constructor and the factory report failures through VehicleError.

use thiserror::Error;

/// Errors raised while constructing vehicles
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VehicleError {
    /// A constructor argument violates its constraint
    /// (negative/non-finite speed, empty brand, mismatched extra)
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    /// The factory was asked for a kind it does not know
    #[error("unsupported vehicle type: {0:?}")]
    UnsupportedType(String),
}

impl VehicleError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        VehicleError::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, VehicleError::InvalidArgument { .. })
    }

    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, VehicleError::UnsupportedType(_))
    }
}

pub type VehicleResult<T> = Result<T, VehicleError>;

/// Reject empty or whitespace-only text attributes
pub(crate) fn require_text(field: &'static str, value: String) -> VehicleResult<String> {
    if value.trim().is_empty() {
        return Err(VehicleError::invalid(field, "must not be empty"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = VehicleError::invalid("speed", "must not be negative, got -1");
        assert_eq!(
            err.to_string(),
            "invalid argument `speed`: must not be negative, got -1"
        );
        assert!(err.is_invalid_argument());
        assert!(!err.is_unsupported_type());
    }

    #[test]
    fn test_unsupported_type_display() {
        let err = VehicleError::UnsupportedType("Truck".to_string());
        assert_eq!(err.to_string(), "unsupported vehicle type: \"Truck\"");
        assert!(err.is_unsupported_type());
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("brand", "Toyota".to_string()).unwrap(), "Toyota");
        assert!(require_text("brand", String::new()).is_err());
        assert!(require_text("brand", "   ".to_string()).is_err());
    }
}
