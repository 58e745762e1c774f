// 🚗 Car Entity

use super::{Transport, VehicleKind};
use crate::error::{require_text, VehicleResult};
use crate::vehicle::Vehicle;
use serde::Serialize;

/// A car: shared vehicle state plus brand and fuel type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    #[serde(flatten)]
    vehicle: Vehicle,
    brand: String,
    fuel_type: String,
}

impl Car {
    /// Create a car with category fixed to "Car"
    ///
    /// # Errors
    /// `InvalidArgument` for an invalid speed, an empty brand or an empty fuel type.
    pub fn new(
        brand: impl Into<String>,
        speed: f64,
        fuel_type: impl Into<String>,
    ) -> VehicleResult<Self> {
        let vehicle = Vehicle::new(VehicleKind::Car.name(), speed)?;
        Ok(Car {
            vehicle,
            brand: require_text("brand", brand.into())?,
            fuel_type: require_text("fuel_type", fuel_type.into())?,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn fuel_type(&self) -> &str {
        &self.fuel_type
    }

    /// "Toyota car is refueling with Petrol."
    pub fn refuel(&self) -> String {
        format!("{} car is refueling with {}.", self.brand, self.fuel_type)
    }
}

impl Transport for Car {
    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_creation() {
        let car = Car::new("Toyota", 120.0, "Petrol").unwrap();
        assert_eq!(car.brand(), "Toyota");
        assert_eq!(car.fuel_type(), "Petrol");
        assert_eq!(car.kind(), VehicleKind::Car);
        assert_eq!(car.vehicle().category(), "Car");
        assert_eq!(car.speed(), 120.0);
    }

    #[test]
    fn test_car_describe() {
        let car = Car::new("Toyota", 120.0, "Petrol").unwrap();
        assert_eq!(car.describe(), "Car is moving at 120 km/h.");
    }

    #[test]
    fn test_car_refuel() {
        let car = Car::new("Toyota", 120.0, "Petrol").unwrap();
        assert_eq!(car.refuel(), "Toyota car is refueling with Petrol.");

        let electric = Car::new("Tesla", 200.0, "Electricity").unwrap();
        assert_eq!(electric.refuel(), "Tesla car is refueling with Electricity.");
    }

    #[test]
    fn test_car_negative_speed() {
        let err = Car::new("Toyota", -1.0, "Petrol").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_car_empty_brand() {
        let err = Car::new("", 120.0, "Petrol").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("brand"));
    }

    #[test]
    fn test_car_empty_fuel_type() {
        let err = Car::new("Toyota", 120.0, " ").unwrap_err();
        assert!(err.to_string().contains("fuel_type"));
    }

    #[test]
    fn test_car_serializes_flat() {
        let car = Car::new("Toyota", 120.0, "Petrol").unwrap();
        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "category": "Car",
                "speed": 120.0,
                "brand": "Toyota",
                "fuel_type": "Petrol",
            })
        );
    }
}
