//! Planning failure kinds.
//!
//! Every failure is deterministic in the inputs: re-running with the same
//! route, vehicle and prices reproduces the same error, so there is no
//! retry path. A run either returns a complete plan or exactly one of
//! these errors.

use crate::models::{CountryCode, FuelType};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlanningError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanningError {
    /// The reserve distance alone meets or exceeds the full-tank range.
    #[error("reservoir ({reservoir_km} km) must be less than the vehicle's max range ({max_range_km:.1} km)")]
    InvalidReservoir { reservoir_km: u32, max_range_km: f64 },

    /// A single-country run cannot be crossed while keeping the reserve.
    #[error("country run in {country} spans {length_km:.1} km and cannot be crossed while keeping the reserve intact (safe range {safe_range_km:.1} km)")]
    UnreachableSegment {
        country: CountryCode,
        length_km: f64,
        safe_range_km: f64,
    },

    /// A stop is required in a country with no usable price entry.
    #[error("no {fuel_type} price available for {country}")]
    MissingPriceData {
        country: CountryCode,
        fuel_type: FuelType,
    },

    /// The waypoint sequence is unusable: empty or with decreasing distances.
    #[error("malformed route: {reason}")]
    MalformedRoute { reason: String },
}
