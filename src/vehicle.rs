// 🚦 Vehicle - shared state of every transportation entity
//
// Car and Bike embed a Vehicle instead of inheriting from it. The shared
// behaviour (describe) lives here and on the Transport trait.

use crate::error::{VehicleError, VehicleResult};
use serde::Serialize;

// ============================================================================
// BASE ENTITY
// ============================================================================

/// Attributes common to all vehicles
///
/// `category` never changes after construction and `speed` is always a
/// finite, non-negative number of km/h.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    category: String,
    speed: f64,
}

impl Vehicle {
    /// Create the shared vehicle state
    ///
    /// # Errors
    /// `InvalidArgument` if `speed` is negative, NaN or infinite.
    pub fn new(category: impl Into<String>, speed: f64) -> VehicleResult<Self> {
        Ok(Vehicle {
            category: category.into(),
            speed: validate_speed(speed)?,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Speed in km/h
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// "Car is moving at 120 km/h."
    pub fn describe(&self) -> String {
        format!("{} is moving at {} km/h.", self.category, self.speed)
    }
}

fn validate_speed(speed: f64) -> VehicleResult<f64> {
    if !speed.is_finite() {
        return Err(VehicleError::invalid(
            "speed",
            format!("must be a finite number, got {}", speed),
        ));
    }
    if speed < 0.0 {
        return Err(VehicleError::invalid(
            "speed",
            format!("must not be negative, got {}", speed),
        ));
    }
    // -0.0 would render as "-0"
    Ok(speed.abs())
}

// ============================================================================
// TESTS
// ============================================================================
