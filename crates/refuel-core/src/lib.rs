//! Core logic for cross-country refuel planning.
//!
//! One planning run is a pure, synchronous pass: segment the route into
//! country runs, validate feasibility against the vehicle's safe range,
//! then walk the segments placing stops as late as the safety reserve
//! allows. Inputs (route, vehicle, price index) are immutable during a run,
//! so independent runs can execute concurrently without coordination.

pub mod error;
pub mod models;
pub mod planner;
pub mod prices;
pub mod segment;
pub mod spatial;
pub mod validate;

pub use error::{PlanningError, Result};
pub use models::{
    CountryCode, FuelPriceRecord, FuelType, RefuelPlan, RefuelStop, Route, VehicleSpec, Waypoint,
};
pub use planner::{
    plan_route, plan_route_with, MinimumStopsStrategy, PlanningContext, RefuelStrategy,
};
pub use prices::{PriceIndex, PricePoint};
pub use segment::{segment_route, RouteSegment};
pub use spatial::interpolate_position;
pub use validate::{check_feasibility, Feasibility};
