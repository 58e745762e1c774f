// Entity Models
// Each specialized vehicle embeds the shared Vehicle state and adds its own
// attributes plus one behaviour of its own.

pub mod bike;
pub mod car;

pub use bike::Bike;
pub use car::Car;

use crate::error::VehicleError;
use crate::vehicle::Vehicle;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// VEHICLE KIND
// ============================================================================

/// Discriminator for the specialized vehicle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VehicleKind {
    Car,
    Bike,
}

impl VehicleKind {
    /// Category label stored in the shared Vehicle state
    pub fn name(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Bike => "Bike",
        }
    }

    pub fn all() -> [VehicleKind; 2] {
        [VehicleKind::Car, VehicleKind::Bike]
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact, case-sensitive match on "Car" / "Bike"
impl FromStr for VehicleKind {
    type Err = VehicleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleKind::all()
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| VehicleError::UnsupportedType(s.to_string()))
    }
}

// ============================================================================
// TRANSPORT TRAIT
// ============================================================================

/// Transport - capability shared by every vehicle
///
/// Implementors only expose their embedded Vehicle; `describe` comes for free.
pub trait Transport {
    /// The shared state this vehicle embeds
    fn vehicle(&self) -> &Vehicle;

    fn kind(&self) -> VehicleKind;

    fn speed(&self) -> f64 {
        self.vehicle().speed()
    }

    fn describe(&self) -> String {
        self.vehicle().describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_kind_names() {
        assert_eq!(VehicleKind::Car.name(), "Car");
        assert_eq!(VehicleKind::Bike.name(), "Bike");
        assert_eq!(VehicleKind::Bike.to_string(), "Bike");
    }

    #[test]
    fn test_vehicle_kind_from_str() {
        assert_eq!("Car".parse::<VehicleKind>().unwrap(), VehicleKind::Car);
        assert_eq!("Bike".parse::<VehicleKind>().unwrap(), VehicleKind::Bike);
    }

    #[test]
    fn test_vehicle_kind_from_str_is_exact() {
        for input in ["car", "BIKE", " Car", "Truck", ""] {
            let err = input.parse::<VehicleKind>().unwrap_err();
            assert_eq!(err, VehicleError::UnsupportedType(input.to_string()));
        }
    }
}
