use anyhow::{bail, Context, Result};
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use vehicle_management::{
    create_vehicle, load_fleet_lenient, parse_helmet, AnyVehicle, Extra, Transport,
};

const USAGE: &str = "usage: vehicles [demo | create <Car|Bike> <brand> <speed> <extra> [--json] | import <fleet.csv>] [--verbose]";

fn main() {
    if let Err(error) = run() {
        eprintln!("❌ {:#}", error);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let verbose = take_flag(&mut args, "--verbose");
    let json = take_flag(&mut args, "--json");

    init_tracing(verbose)?;

    let command = args.first().map(String::as_str);
    if json && command != Some("create") {
        bail!("--json only applies to create\n{}", USAGE);
    }

    match command {
        None | Some("demo") => run_demo(),
        Some("create") => run_create(&args[1..], json),
        Some("import") => run_import(&args[1..]),
        Some(other) => bail!("unknown command {:?}\n{}", other, USAGE),
    }
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|arg| arg != flag);
    args.len() != before
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("VEHICLES_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

fn run_demo() -> Result<()> {
    let my_car = create_vehicle("Car", "Toyota", 120.0, "Petrol")?;
    print_vehicle(&my_car);

    let my_bike = create_vehicle("Bike", "Yamaha", 80.0, true)?;
    print_vehicle(&my_bike);

    Ok(())
}

fn run_create(args: &[String], json: bool) -> Result<()> {
    let [kind, brand, speed, extra] = args else {
        bail!("create expects 4 arguments\n{}", USAGE);
    };

    let speed: f64 = speed
        .parse()
        .with_context(|| format!("speed must be a number, got {:?}", speed))?;

    let extra = parse_extra(kind, extra)?;
    let vehicle = create_vehicle(kind, brand, speed, extra)?;
    println!("{}", render_vehicle(&vehicle, json)?);

    Ok(())
}

/// Bikes take a helmet flag, everything else is passed through as a fuel type
fn parse_extra(kind: &str, raw: &str) -> Result<Extra> {
    match kind {
        "Bike" => Ok(Extra::Helmet(parse_helmet(raw)?)),
        _ => Ok(Extra::FuelType(raw.to_string())),
    }
}

/// Both sentences, followed by the JSON form when asked for
fn render_vehicle(vehicle: &AnyVehicle, json: bool) -> Result<String> {
    let mut out = format!("{}\n{}", vehicle.describe(), vehicle.special_action());
    if json {
        out.push('\n');
        out.push_str(&serde_json::to_string_pretty(vehicle)?);
    }
    Ok(out)
}

fn run_import(args: &[String]) -> Result<()> {
    let [path] = args else {
        bail!("import expects a CSV path\n{}", USAGE);
    };

    println!("📂 Loading fleet from {}...", path);
    let report = load_fleet_lenient(Path::new(path))?;

    for vehicle in &report.vehicles {
        print_vehicle(vehicle);
    }

    for rejected in &report.rejected {
        eprintln!("⚠️  line {}: {}", rejected.line, rejected.error);
    }

    println!("✓ {}", report.summary());
    Ok(())
}

fn print_vehicle(vehicle: &AnyVehicle) {
    println!("{}", vehicle.describe());
    println!("{}", vehicle.special_action());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extra_bike_accepts_loader_flags() {
        let flags = [("true", true), ("YES", true), ("1", true), ("no", false), ("0", false)];
        for (raw, expected) in flags {
            assert_eq!(parse_extra("Bike", raw).unwrap(), Extra::Helmet(expected));
        }
        assert!(parse_extra("Bike", "maybe").is_err());
    }

    #[test]
    fn test_parse_extra_car_is_fuel_type() {
        assert_eq!(
            parse_extra("Car", "Petrol").unwrap(),
            Extra::FuelType("Petrol".to_string())
        );
    }

    #[test]
    fn test_render_vehicle_plain() {
        let car = create_vehicle("Car", "Toyota", 120.0, "Petrol").unwrap();
        assert_eq!(
            render_vehicle(&car, false).unwrap(),
            "Car is moving at 120 km/h.\nToyota car is refueling with Petrol."
        );
    }

    #[test]
    fn test_render_vehicle_json_keeps_sentences() {
        let bike = create_vehicle("Bike", "Yamaha", 80.0, true).unwrap();
        let out = render_vehicle(&bike, true).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Bike is moving at 80 km/h."));
        assert_eq!(lines.next(), Some("Wearing a helmet while riding Yamaha bike."));

        let json: serde_json::Value =
            serde_json::from_str(&lines.collect::<Vec<_>>().join("\n")).unwrap();
        assert_eq!(json["kind"], "Bike");
        assert_eq!(json["has_helmet"], true);
    }
}
