//! Minimum-stops refuel planning.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{PlanningError, Result};
use crate::models::{RefuelPlan, RefuelStop, Route, VehicleSpec};
use crate::prices::PriceIndex;
use crate::segment::{segment_route, RouteSegment};
use crate::spatial::interpolate_position;
use crate::validate::check_feasibility;

/// Fuel comparison tolerance in liters.
const FUEL_EPS_L: f64 = 1e-6;
/// Distance comparison tolerance in kilometers.
const DIST_EPS_KM: f64 = 1e-6;

/// Derived per-run planning parameters.
///
/// Construction performs the reservoir gate: a reserve that meets or
/// exceeds the full-tank range leaves no usable travel distance at all.
#[derive(Debug, Clone)]
pub struct PlanningContext {
    pub vehicle: VehicleSpec,
    /// Safety reserve distance in kilometers, never to be consumed.
    pub reservoir_km: u32,
    pub max_range_km: f64,
    /// Distance coverable on a full tank while keeping the reserve.
    pub safe_range_km: f64,
    /// The reserve expressed in liters for this vehicle.
    pub reservoir_fuel_liters: f64,
}

impl PlanningContext {
    pub fn new(vehicle: &VehicleSpec, reservoir_km: u32) -> Result<Self> {
        let max_range_km = vehicle.max_range_km();
        if reservoir_km as f64 >= max_range_km {
            return Err(PlanningError::InvalidReservoir {
                reservoir_km,
                max_range_km,
            });
        }
        Ok(Self {
            vehicle: vehicle.clone(),
            reservoir_km,
            max_range_km,
            safe_range_km: max_range_km - reservoir_km as f64,
            reservoir_fuel_liters: reservoir_km as f64 / 100.0 * vehicle.avg_consumption,
        })
    }
}

/// Tank state carried through one planning pass. Owned by the strategy for
/// the duration of a run and discarded afterwards.
#[derive(Debug, Clone, Copy)]
struct FuelState {
    distance_km: f64,
    fuel_liters: f64,
}

/// A refuel planning objective.
///
/// Implementations turn validated segments plus a price snapshot into an
/// ordered stop list. Minimum-stops is the only objective implemented;
/// alternatives would conform to the same surface.
pub trait RefuelStrategy {
    fn name(&self) -> &'static str;

    fn plan_stops(
        &self,
        segments: &[RouteSegment],
        prices: &PriceIndex,
        ctx: &PlanningContext,
    ) -> Result<Vec<RefuelStop>>;
}

/// Greedy strategy: drive as far as the reserve allows, then fill to 100%.
///
/// Placing every stop as late as possible maximizes the distance covered
/// per stop, which minimizes the stop count.
pub struct MinimumStopsStrategy;

impl RefuelStrategy for MinimumStopsStrategy {
    fn name(&self) -> &'static str {
        "min_stops"
    }

    fn plan_stops(
        &self,
        segments: &[RouteSegment],
        prices: &PriceIndex,
        ctx: &PlanningContext,
    ) -> Result<Vec<RefuelStop>> {
        let consumption = ctx.vehicle.avg_consumption;
        let mut stops: Vec<RefuelStop> = Vec::new();
        let mut state = FuelState {
            distance_km: segments.first().map(|s| s.start_km).unwrap_or(0.0),
            fuel_liters: ctx.vehicle.tank_capacity,
        };

        for segment in segments {
            // a long run can require several stops; keep refueling until the
            // remainder of the run is coverable with the reserve intact
            loop {
                let fuel_needed = (segment.end_km - state.distance_km) / 100.0 * consumption;
                if state.fuel_liters - fuel_needed >= ctx.reservoir_fuel_liters - FUEL_EPS_L {
                    state.fuel_liters -= fuel_needed;
                    break;
                }
                let stop = place_stop(segment, prices, ctx, &state, stops.len() as u32 + 1)?;
                debug!(
                    country = %stop.country,
                    distance_km = stop.distance_from_start_km,
                    liters = stop.fuel_to_add_liters,
                    "refuel stop placed"
                );
                state.fuel_liters = ctx.vehicle.tank_capacity;
                state.distance_km = stop.distance_from_start_km;
                stops.push(stop);
            }
            state.distance_km = segment.end_km;
        }

        Ok(stops)
    }
}

/// Place one stop inside `segment`, as late as the reserve allows.
fn place_stop(
    segment: &RouteSegment,
    prices: &PriceIndex,
    ctx: &PlanningContext,
    state: &FuelState,
    stop_number: u32,
) -> Result<RefuelStop> {
    let consumption = ctx.vehicle.avg_consumption;

    // furthest point reachable while landing exactly on the reserve
    let reach_km = (state.fuel_liters - ctx.reservoir_fuel_liters) / consumption * 100.0;
    if reach_km < -DIST_EPS_KM {
        // already under the reserve; no stop inside this run can repair that
        return Err(PlanningError::UnreachableSegment {
            country: segment.country.clone(),
            length_km: segment.length_km(),
            safe_range_km: ctx.safe_range_km,
        });
    }

    // the stop must stay inside the run whose country prices it
    let stop_km = (state.distance_km + reach_km.max(0.0)).clamp(segment.start_km, segment.end_km);

    let price = prices
        .lookup(&segment.country, ctx.vehicle.fuel_type)
        .ok_or_else(|| PlanningError::MissingPriceData {
            country: segment.country.clone(),
            fuel_type: ctx.vehicle.fuel_type,
        })?;

    let fuel_on_arrival =
        state.fuel_liters - (stop_km - state.distance_km) / 100.0 * consumption;
    let fuel_to_add = ctx.vehicle.tank_capacity - fuel_on_arrival;
    let position = interpolate_position(&segment.waypoints, stop_km);

    Ok(RefuelStop {
        stop_number,
        country: segment.country.clone(),
        distance_from_start_km: stop_km,
        fuel_to_add_liters: fuel_to_add,
        price_per_liter_eur: price.price_per_liter_eur,
        cost_eur: round2(fuel_to_add * price.price_per_liter_eur),
        lat: position.map(|p| p.0),
        lon: position.map(|p| p.1),
    })
}

/// Compute a complete refuel plan with the minimum-stops strategy.
pub fn plan_route(
    route: &Route,
    vehicle: &VehicleSpec,
    reservoir_km: u32,
    prices: &PriceIndex,
) -> Result<RefuelPlan> {
    plan_route_with(&MinimumStopsStrategy, route, vehicle, reservoir_km, prices)
}

/// Compute a plan with an explicit strategy: context, segmentation and
/// feasibility first, then the strategy pass, then the aggregates.
pub fn plan_route_with(
    strategy: &dyn RefuelStrategy,
    route: &Route,
    vehicle: &VehicleSpec,
    reservoir_km: u32,
    prices: &PriceIndex,
) -> Result<RefuelPlan> {
    let ctx = PlanningContext::new(vehicle, reservoir_km)?;
    let segments = segment_route(&route.waypoints)?;
    let feasibility = check_feasibility(&segments, &ctx)?;
    if let Some(warning) = &feasibility.warning {
        warn!(origin = %route.origin, destination = %route.destination, "{warning}");
    }
    debug!(
        segments = segments.len(),
        safe_range_km = ctx.safe_range_km,
        "route segmented and validated"
    );

    let stops = strategy.plan_stops(&segments, prices, &ctx)?;

    let total_cost_eur = round2(stops.iter().map(|s| s.cost_eur).sum());
    let total_fuel_liters = round2(route.total_distance_km / 100.0 * vehicle.avg_consumption);
    info!(
        origin = %route.origin,
        destination = %route.destination,
        stops = stops.len(),
        total_cost_eur,
        "refuel plan computed"
    );

    Ok(RefuelPlan {
        strategy: strategy.name().to_string(),
        reservoir_km,
        number_of_stops: stops.len() as u32,
        total_cost_eur,
        total_fuel_liters,
        stops,
        created_at: Utc::now(),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
