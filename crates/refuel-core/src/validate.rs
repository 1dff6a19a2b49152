//! Feasibility checks that must pass before planning starts.

use crate::error::{PlanningError, Result};
use crate::planner::PlanningContext;
use crate::segment::RouteSegment;

/// Distance tolerance when comparing lengths against range limits.
const RANGE_EPS_KM: f64 = 1e-6;

/// Outcome of a successful feasibility check.
#[derive(Debug, Clone, PartialEq)]
pub struct Feasibility {
    pub safe_range_km: f64,
    /// Lower bound on the number of stops the route will need.
    pub min_stops_estimate: u32,
    /// Advisory only; the route remains plannable when set.
    pub warning: Option<String>,
}

/// Validate segmented route against the vehicle's safe range.
///
/// Refueling happens at country granularity: within a run the tank can be
/// topped up to full at most once per traversal of the safe range, so a run
/// longer than twice the safe range cannot be crossed even when entered on
/// a full tank. Runs up to that limit are accepted here; entry-fuel
/// dependent cases are guarded during planning. A run exactly at the limit
/// is accepted (inclusive boundary).
pub fn check_feasibility(segments: &[RouteSegment], ctx: &PlanningContext) -> Result<Feasibility> {
    let safe_range_km = ctx.safe_range_km;

    for segment in segments {
        if segment.length_km() > 2.0 * safe_range_km + RANGE_EPS_KM {
            return Err(PlanningError::UnreachableSegment {
                country: segment.country.clone(),
                length_km: segment.length_km(),
                safe_range_km,
            });
        }
    }

    let total_km = match (segments.first(), segments.last()) {
        (Some(first), Some(last)) => last.end_km - first.start_km,
        _ => 0.0,
    };
    let min_stops_estimate = if total_km > RANGE_EPS_KM {
        ((total_km / safe_range_km).ceil() as u32).saturating_sub(1)
    } else {
        0
    };

    let warning = if min_stops_estimate as usize > segments.len() {
        Some(format!(
            "route needs at least {} stops across {} country runs; some stops will fall inside runs rather than at borders",
            min_stops_estimate,
            segments.len()
        ))
    } else {
        None
    };

    Ok(Feasibility {
        safe_range_km,
        min_stops_estimate,
        warning,
    })
}
