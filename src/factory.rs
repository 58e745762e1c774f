// 🏭 Vehicle Factory
// Single entry point mapping a kind discriminator to a constructed vehicle

use crate::entities::{Bike, Car, Transport, VehicleKind};
use crate::error::{VehicleError, VehicleResult};
use crate::vehicle::Vehicle;
use serde::Serialize;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Extra - the kind-specific constructor argument
///
/// A Car takes its fuel type, a Bike takes its helmet flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extra {
    FuelType(String),
    Helmet(bool),
}

impl Extra {
    fn label(&self) -> &'static str {
        match self {
            Extra::FuelType(_) => "fuel type",
            Extra::Helmet(_) => "helmet flag",
        }
    }
}

impl From<&str> for Extra {
    fn from(fuel_type: &str) -> Self {
        Extra::FuelType(fuel_type.to_string())
    }
}

impl From<String> for Extra {
    fn from(fuel_type: String) -> Self {
        Extra::FuelType(fuel_type)
    }
}

impl From<bool> for Extra {
    fn from(has_helmet: bool) -> Self {
        Extra::Helmet(has_helmet)
    }
}

/// AnyVehicle - output of the factory
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum AnyVehicle {
    Car(Car),
    Bike(Bike),
}

impl AnyVehicle {
    pub fn as_car(&self) -> Option<&Car> {
        match self {
            AnyVehicle::Car(car) => Some(car),
            AnyVehicle::Bike(_) => None,
        }
    }

    pub fn as_bike(&self) -> Option<&Bike> {
        match self {
            AnyVehicle::Bike(bike) => Some(bike),
            AnyVehicle::Car(_) => None,
        }
    }

    pub fn brand(&self) -> &str {
        match self {
            AnyVehicle::Car(car) => car.brand(),
            AnyVehicle::Bike(bike) => bike.brand(),
        }
    }

    /// The sentence of the kind-specific behaviour (refuel / wear helmet)
    pub fn special_action(&self) -> String {
        match self {
            AnyVehicle::Car(car) => car.refuel(),
            AnyVehicle::Bike(bike) => bike.wear_helmet(),
        }
    }
}

impl Transport for AnyVehicle {
    fn vehicle(&self) -> &Vehicle {
        match self {
            AnyVehicle::Car(car) => car.vehicle(),
            AnyVehicle::Bike(bike) => bike.vehicle(),
        }
    }

    fn kind(&self) -> VehicleKind {
        match self {
            AnyVehicle::Car(_) => VehicleKind::Car,
            AnyVehicle::Bike(_) => VehicleKind::Bike,
        }
    }
}

impl From<Car> for AnyVehicle {
    fn from(car: Car) -> Self {
        AnyVehicle::Car(car)
    }
}

impl From<Bike> for AnyVehicle {
    fn from(bike: Bike) -> Self {
        AnyVehicle::Bike(bike)
    }
}

// ============================================================================
// FACTORY FUNCTIONS
// ============================================================================

/// Create a vehicle from its kind name
///
/// # Examples:
/// ```
/// use vehicle_management::{create_vehicle, Transport};
///
/// let car = create_vehicle("Car", "Toyota", 120.0, "Petrol").unwrap();
/// assert_eq!(car.describe(), "Car is moving at 120 km/h.");
/// ```
///
/// # Errors
/// * `UnsupportedType` - `kind` is neither "Car" nor "Bike"
/// * `InvalidArgument` - bad speed/brand/fuel type, or `extra` does not fit `kind`
pub fn create_vehicle(
    kind: &str,
    brand: &str,
    speed: f64,
    extra: impl Into<Extra>,
) -> VehicleResult<AnyVehicle> {
    let kind = kind.parse::<VehicleKind>().inspect_err(|err| {
        tracing::warn!(error = %err, "vehicle factory rejected kind");
    })?;
    build_vehicle(kind, brand, speed, extra.into())
}

/// Typed variant of [`create_vehicle`] for an already parsed kind
pub fn build_vehicle(
    kind: VehicleKind,
    brand: &str,
    speed: f64,
    extra: Extra,
) -> VehicleResult<AnyVehicle> {
    let vehicle: AnyVehicle = match (kind, extra) {
        (VehicleKind::Car, Extra::FuelType(fuel_type)) => {
            Car::new(brand, speed, fuel_type)?.into()
        }
        (VehicleKind::Bike, Extra::Helmet(has_helmet)) => {
            Bike::new(brand, speed, has_helmet)?.into()
        }
        (kind, extra) => {
            return Err(VehicleError::invalid(
                "extra",
                format!("a {} takes no {}", kind, extra.label()),
            ));
        }
    };

    tracing::debug!(kind = %kind, brand, speed, "vehicle created");
    Ok(vehicle)
}

// ============================================================================
// TESTS
// ============================================================================
