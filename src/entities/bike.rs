// 🏍️ Bike Entity

use super::{Transport, VehicleKind};
use crate::error::{require_text, VehicleResult};
use crate::vehicle::Vehicle;
use serde::Serialize;

pub const NO_HELMET: &str = "No helmet detected!";

/// A bike: shared vehicle state plus brand and whether the rider wears a helmet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bike {
    #[serde(flatten)]
    vehicle: Vehicle,
    brand: String,
    has_helmet: bool,
}

impl Bike {
    /// Create a bike with category fixed to "Bike"
    ///
    /// # Errors
    /// `InvalidArgument` for an invalid speed or an empty brand.
    pub fn new(brand: impl Into<String>, speed: f64, has_helmet: bool) -> VehicleResult<Self> {
        let vehicle = Vehicle::new(VehicleKind::Bike.name(), speed)?;
        Ok(Bike {
            vehicle,
            brand: require_text("brand", brand.into())?,
            has_helmet,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn has_helmet(&self) -> bool {
        self.has_helmet
    }

    pub fn wear_helmet(&self) -> String {
        if self.has_helmet {
            format!("Wearing a helmet while riding {} bike.", self.brand)
        } else {
            NO_HELMET.to_string()
        }
    }
}

impl Transport for Bike {
    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Bike
    }
}
