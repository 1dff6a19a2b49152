//! Route segmentation into single-country runs.

use crate::error::{PlanningError, Result};
use crate::models::{CountryCode, Waypoint};

/// A maximal run of consecutive waypoints sharing one country.
///
/// Segments partition the route with no gaps: each segment starts where the
/// previous one ends, and the concatenated waypoint lists reproduce the
/// input sequence. The stretch between the last waypoint observed in one
/// country and the first observed in the next is attributed to the former,
/// so `end_km` of a non-final segment equals the next segment's first
/// waypoint distance.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    pub country: CountryCode,
    pub start_km: f64,
    pub end_km: f64,
    pub waypoints: Vec<Waypoint>,
}

impl RouteSegment {
    pub fn length_km(&self) -> f64 {
        self.end_km - self.start_km
    }
}

/// Split an ordered waypoint sequence into country runs.
///
/// Fails fast with `MalformedRoute` on an empty sequence or decreasing
/// cumulative distances. A single waypoint yields one zero-length segment.
pub fn segment_route(waypoints: &[Waypoint]) -> Result<Vec<RouteSegment>> {
    if waypoints.is_empty() {
        return Err(PlanningError::MalformedRoute {
            reason: "route has no waypoints".to_string(),
        });
    }
    for pair in waypoints.windows(2) {
        if pair[1].distance_from_start_km < pair[0].distance_from_start_km {
            return Err(PlanningError::MalformedRoute {
                reason: format!(
                    "waypoint distances decrease ({:.3} km -> {:.3} km)",
                    pair[0].distance_from_start_km, pair[1].distance_from_start_km
                ),
            });
        }
    }

    let mut segments = Vec::new();
    let mut run = vec![waypoints[0].clone()];
    for waypoint in &waypoints[1..] {
        if waypoint.country_code == run[0].country_code {
            run.push(waypoint.clone());
            continue;
        }
        let completed = std::mem::replace(&mut run, vec![waypoint.clone()]);
        segments.push(RouteSegment {
            country: completed[0].country_code.clone(),
            start_km: completed[0].distance_from_start_km,
            // the border is only known to lie before the next observed country
            end_km: waypoint.distance_from_start_km,
            waypoints: completed,
        });
    }
    let end_km = run[run.len() - 1].distance_from_start_km;
    segments.push(RouteSegment {
        country: run[0].country_code.clone(),
        start_km: run[0].distance_from_start_km,
        end_km,
        waypoints: run,
    });
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(distance_km: f64, country: &str) -> Waypoint {
        Waypoint {
            lat: 50.0 + distance_km / 1000.0,
            lon: 20.0 - distance_km / 1000.0,
            distance_from_start_km: distance_km,
            country_code: CountryCode::from(country),
        }
    }

    #[test]
    fn groups_consecutive_waypoints_by_country() {
        let waypoints = vec![
            waypoint(0.0, "PL"),
            waypoint(200.0, "PL"),
            waypoint(400.0, "PL"),
            waypoint(600.0, "DE"),
            waypoint(800.0, "DE"),
            waypoint(1000.0, "NL"),
        ];
        let segments = segment_route(&waypoints).unwrap();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].country, CountryCode::from("PL"));
        assert_eq!(segments[1].country, CountryCode::from("DE"));
        assert_eq!(segments[2].country, CountryCode::from("NL"));
    }

    #[test]
    fn segments_are_contiguous_and_partition_the_waypoints() {
        let waypoints = vec![
            waypoint(0.0, "PL"),
            waypoint(400.0, "PL"),
            waypoint(600.0, "DE"),
            waypoint(1000.0, "DE"),
            waypoint(1100.0, "CZ"),
        ];
        let segments = segment_route(&waypoints).unwrap();

        for pair in segments.windows(2) {
            assert_eq!(pair[0].end_km, pair[1].start_km);
            assert_ne!(pair[0].country, pair[1].country);
        }
        let rejoined: Vec<Waypoint> = segments
            .iter()
            .flat_map(|s| s.waypoints.clone())
            .collect();
        assert_eq!(rejoined, waypoints);
        assert_eq!(segments[0].start_km, 0.0);
        assert_eq!(segments[0].end_km, 600.0);
        assert_eq!(segments[2].length_km(), 0.0);
    }

    #[test]
    fn consecutive_unknowns_merge_into_one_segment() {
        let waypoints = vec![
            waypoint(0.0, "PL"),
            waypoint(100.0, "??"),
            waypoint(150.0, ""),
            waypoint(200.0, "DE"),
        ];
        let segments = segment_route(&waypoints).unwrap();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].country, CountryCode::Unknown);
        assert_eq!(segments[1].waypoints.len(), 2);
    }

    #[test]
    fn single_waypoint_yields_one_zero_length_segment() {
        let segments = segment_route(&[waypoint(0.0, "PL")]).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].length_km(), 0.0);
        assert_eq!(segments[0].waypoints.len(), 1);
    }

    #[test]
    fn empty_route_is_malformed() {
        let err = segment_route(&[]).unwrap_err();
        assert!(matches!(err, PlanningError::MalformedRoute { .. }));
    }

    #[test]
    fn decreasing_distances_are_malformed() {
        let err = segment_route(&[waypoint(100.0, "PL"), waypoint(50.0, "PL")]).unwrap_err();
        assert!(matches!(err, PlanningError::MalformedRoute { .. }));
    }

    #[test]
    fn equal_distances_are_tolerated() {
        let segments =
            segment_route(&[waypoint(100.0, "PL"), waypoint(100.0, "PL")]).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].length_km(), 0.0);
    }
}
