//! Core data models for refuel planning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel spelled in serialized data for waypoints whose country could
/// not be resolved.
pub const UNKNOWN_COUNTRY: &str = "??";

/// ISO 3166-1 alpha-2 country code, uppercased on construction.
///
/// `Unknown` is a first-class value: consecutive unresolved waypoints group
/// with each other during segmentation, never with a known neighbor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CountryCode {
    Known(String),
    Unknown,
}

impl From<String> for CountryCode {
    fn from(raw: String) -> Self {
        let code = raw.trim().to_ascii_uppercase();
        if code.is_empty() || code == UNKNOWN_COUNTRY {
            CountryCode::Unknown
        } else {
            CountryCode::Known(code)
        }
    }
}

impl From<&str> for CountryCode {
    fn from(raw: &str) -> Self {
        CountryCode::from(raw.to_string())
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.to_string()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryCode::Known(code) => f.write_str(code),
            CountryCode::Unknown => f.write_str(UNKNOWN_COUNTRY),
        }
    }
}

/// Fuel variant consumed by a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Diesel,
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FuelType::Gasoline => f.write_str("gasoline"),
            FuelType::Diesel => f.write_str("diesel"),
        }
    }
}

/// One point along a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
    /// Cumulative distance from the route origin, non-decreasing.
    pub distance_from_start_km: f64,
    pub country_code: CountryCode,
}

/// An ordered route as supplied by the surrounding layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// Human-readable starting location.
    pub origin: String,
    /// Human-readable ending location.
    pub destination: String,
    pub total_distance_km: f64,
    pub waypoints: Vec<Waypoint>,
}

impl Route {
    /// Distinct countries in traversal order.
    pub fn countries(&self) -> Vec<CountryCode> {
        let mut seen = Vec::new();
        for waypoint in &self.waypoints {
            if !seen.contains(&waypoint.country_code) {
                seen.push(waypoint.country_code.clone());
            }
        }
        seen
    }
}

/// Vehicle definition used for one planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSpec {
    #[serde(default)]
    pub name: String,
    pub fuel_type: FuelType,
    /// Average fuel consumption in L/100km.
    pub avg_consumption: f64,
    /// Total tank capacity in liters.
    pub tank_capacity: f64,
}

impl VehicleSpec {
    /// Theoretical driving range (km) on a full tank.
    ///
    /// Non-positive capacity or consumption yields 0.0, which planning then
    /// rejects through the reservoir gate instead of propagating NaN.
    pub fn max_range_km(&self) -> f64 {
        if self.avg_consumption > 0.0 && self.tank_capacity > 0.0 {
            self.tank_capacity / self.avg_consumption * 100.0
        } else {
            0.0
        }
    }
}

/// One observed fuel price, input row for the price index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelPriceRecord {
    pub country_code: CountryCode,
    pub fuel_type: FuelType,
    /// Price per liter in EUR.
    pub price_per_liter_eur: f64,
    pub recorded_at: DateTime<Utc>,
}

/// A single refueling event in a computed plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefuelStop {
    /// Sequential stop number (1, 2, 3, ...).
    pub stop_number: u32,
    pub country: CountryCode,
    pub distance_from_start_km: f64,
    pub fuel_to_add_liters: f64,
    pub price_per_liter_eur: f64,
    /// Liters added times price, rounded to whole cents.
    pub cost_eur: f64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Computed refueling schedule for one (route, vehicle, reservoir) input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefuelPlan {
    /// Label of the strategy that produced the plan.
    pub strategy: String,
    /// Safety reserve distance in kilometers.
    pub reservoir_km: u32,
    pub stops: Vec<RefuelStop>,
    pub total_cost_eur: f64,
    /// Fuel consumed over the whole route, not just the refueled liters.
    pub total_fuel_liters: f64,
    pub number_of_stops: u32,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_normalizes_to_uppercase() {
        assert_eq!(CountryCode::from("pl"), CountryCode::Known("PL".into()));
        assert_eq!(CountryCode::from(" de "), CountryCode::Known("DE".into()));
    }

    #[test]
    fn country_code_sentinel_parses_as_unknown() {
        assert_eq!(CountryCode::from(""), CountryCode::Unknown);
        assert_eq!(CountryCode::from("??"), CountryCode::Unknown);
        assert_eq!(CountryCode::Unknown.to_string(), "??");
    }

    #[test]
    fn country_code_roundtrips_through_json() {
        let json = serde_json::to_string(&CountryCode::from("at")).unwrap();
        assert_eq!(json, "\"AT\"");
        let back: CountryCode = serde_json::from_str("\"??\"").unwrap();
        assert_eq!(back, CountryCode::Unknown);
    }

    #[test]
    fn fuel_type_uses_lowercase_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&FuelType::Gasoline).unwrap(),
            "\"gasoline\""
        );
        let parsed: FuelType = serde_json::from_str("\"diesel\"").unwrap();
        assert_eq!(parsed, FuelType::Diesel);
    }

    #[test]
    fn max_range_from_tank_and_consumption() {
        let car = VehicleSpec {
            name: "family wagon".into(),
            fuel_type: FuelType::Gasoline,
            avg_consumption: 6.0,
            tank_capacity: 50.0,
        };
        assert!((car.max_range_km() - 833.333).abs() < 0.001);
    }

    #[test]
    fn max_range_degenerates_to_zero() {
        let car = VehicleSpec {
            name: String::new(),
            fuel_type: FuelType::Diesel,
            avg_consumption: 0.0,
            tank_capacity: 50.0,
        };
        assert_eq!(car.max_range_km(), 0.0);
    }

    #[test]
    fn route_countries_deduplicate_in_order() {
        let route = Route {
            origin: "Warsaw".into(),
            destination: "Berlin".into(),
            total_distance_km: 575.0,
            waypoints: vec![
                waypoint(0.0, "PL"),
                waypoint(300.0, "PL"),
                waypoint(450.0, "DE"),
                waypoint(575.0, "DE"),
            ],
        };
        assert_eq!(
            route.countries(),
            vec![CountryCode::from("PL"), CountryCode::from("DE")]
        );
    }

    fn waypoint(distance_km: f64, country: &str) -> Waypoint {
        Waypoint {
            lat: 52.0,
            lon: 21.0,
            distance_from_start_km: distance_km,
            country_code: CountryCode::from(country),
        }
    }
}
