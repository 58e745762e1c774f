// 📦 Fleet Loader - CSV rows → vehicles through the factory
//
// CSV format (with headers):
//   kind,brand,speed,extra
//   Car,Toyota,120,Petrol
//   Bike,Yamaha,80,true

use crate::entities::{Transport, VehicleKind};
use crate::error::{VehicleError, VehicleResult};
use crate::factory::{build_vehicle, AnyVehicle, Extra};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// RAW RECORD
// ============================================================================

/// One CSV row before validation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FleetRecord {
    pub kind: String,
    pub brand: String,
    pub speed: String,
    pub extra: String,
}

impl FleetRecord {
    /// Interpret `speed` and `extra` for the row's kind and build the vehicle
    pub fn into_vehicle(self) -> VehicleResult<AnyVehicle> {
        let kind = self.kind.trim().parse::<VehicleKind>()?;
        let speed = parse_speed(&self.speed)?;
        let extra = match kind {
            VehicleKind::Car => Extra::FuelType(self.extra.trim().to_string()),
            VehicleKind::Bike => Extra::Helmet(parse_helmet(&self.extra)?),
        };
        build_vehicle(kind, self.brand.trim(), speed, extra)
    }
}

fn parse_speed(raw: &str) -> VehicleResult<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        VehicleError::invalid("speed", format!("expected a number, got {:?}", raw.trim()))
    })
}

/// Accepts true/false, yes/no and 1/0 in any case
pub fn parse_helmet(raw: &str) -> VehicleResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(VehicleError::invalid(
            "extra",
            format!("expected a helmet flag (true/false), got {:?}", other),
        )),
    }
}

// ============================================================================
// LOADERS
// ============================================================================

/// A row that failed validation in lenient mode
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// 1-based line in the file, header included
    pub line: usize,
    pub error: VehicleError,
}

#[derive(Debug, Clone, Default)]
pub struct FleetReport {
    pub vehicles: Vec<AnyVehicle>,
    pub rejected: Vec<RejectedRow>,
}

impl FleetReport {
    pub fn count(&self, kind: VehicleKind) -> usize {
        self.vehicles.iter().filter(|v| v.kind() == kind).count()
    }

    /// "2 cars, 1 bikes, 1 rejected"
    pub fn summary(&self) -> String {
        format!(
            "{} cars, {} bikes, {} rejected",
            self.count(VehicleKind::Car),
            self.count(VehicleKind::Bike),
            self.rejected.len()
        )
    }
}

/// Load every row; the first invalid row aborts the load
pub fn load_fleet(csv_path: &Path) -> Result<Vec<AnyVehicle>> {
    let mut vehicles = Vec::new();

    for row in read_records(csv_path)? {
        let (line, record) = row?;
        let vehicle = record
            .into_vehicle()
            .with_context(|| format!("Invalid vehicle on line {} in {}", line, csv_path.display()))?;
        vehicles.push(vehicle);
    }

    tracing::info!(path = %csv_path.display(), count = vehicles.len(), "fleet loaded");
    Ok(vehicles)
}

/// Load valid rows and collect invalid ones instead of failing
///
/// IO and CSV syntax errors still abort.
pub fn load_fleet_lenient(csv_path: &Path) -> Result<FleetReport> {
    let mut report = FleetReport::default();

    for row in read_records(csv_path)? {
        let (line, record) = row?;
        match record.into_vehicle() {
            Ok(vehicle) => report.vehicles.push(vehicle),
            Err(error) => {
                tracing::warn!(line, error = %error, "skipping invalid fleet row");
                report.rejected.push(RejectedRow { line, error });
            }
        }
    }

    tracing::info!(path = %csv_path.display(), summary = %report.summary(), "fleet loaded");
    Ok(report)
}

fn read_records(
    csv_path: &Path,
) -> Result<impl Iterator<Item = Result<(usize, FleetRecord)>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open fleet file: {}", csv_path.display()))?;

    let filename = csv_path.display().to_string();
    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV headers in {}", filename))?
        .clone();

    Ok(reader.into_records().map(move |result| -> Result<(usize, FleetRecord)> {
        let record =
            result.with_context(|| format!("Failed to read CSV record in {}", filename))?;

        // Blank lines are skipped by the reader, so take the line from the record itself
        let line = record.position().map_or(0, |pos| pos.line() as usize);
        let fleet_record = record
            .deserialize::<FleetRecord>(Some(&headers))
            .with_context(|| format!("Failed to parse CSV line {} in {}", line, filename))?;

        Ok((line, fleet_record))
    }))
}

// ============================================================================
// TESTS
// ============================================================================
