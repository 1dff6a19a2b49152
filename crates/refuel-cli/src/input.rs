//! JSON request schema shared by the planner binaries.

use anyhow::Context;
use refuel_core::{FuelPriceRecord, Route, VehicleSpec};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_RESERVOIR_KM: u32 = 100;

/// One planning request: a route, a vehicle, and the price dataset to
/// index. The reserve defaults to 100 km when the file omits it.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    pub route: Route,
    pub car: VehicleSpec,
    #[serde(default = "default_reservoir_km")]
    pub reservoir_km: u32,
    pub prices: Vec<FuelPriceRecord>,
}

fn default_reservoir_km() -> u32 {
    DEFAULT_RESERVOIR_KM
}

pub fn load_request(path: &Path) -> anyhow::Result<PlanRequest> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let request: PlanRequest =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(request)
}
