// Vehicle Management - Core Library
// Exposes the entity hierarchy, the factory and the fleet loader for the CLI and tests

pub mod error;
pub mod vehicle;   // Shared state of every vehicle
pub mod entities;  // Car + Bike
pub mod factory;   // create_vehicle dispatcher
pub mod fleet;     // CSV fleet loading

// Re-export commonly used types
pub use error::{VehicleError, VehicleResult};
pub use vehicle::Vehicle;
pub use entities::{Bike, Car, Transport, VehicleKind};
pub use factory::{build_vehicle, create_vehicle, AnyVehicle, Extra};
pub use fleet::{load_fleet, load_fleet_lenient, parse_helmet, FleetRecord, FleetReport, RejectedRow};
