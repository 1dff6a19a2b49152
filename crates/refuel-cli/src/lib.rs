//! Command line runners for the refuel planner.
//!
//! This crate provides the planner binaries:
//! - plan_route: compute a refuel plan from a JSON request file
//! - check_route: segment a route and report feasibility without planning

pub mod input;

pub use input::{load_request, PlanRequest, DEFAULT_RESERVOIR_KM};
