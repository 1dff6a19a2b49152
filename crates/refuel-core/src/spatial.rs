//! Position interpolation along a distance-indexed waypoint run.

use crate::models::Waypoint;

/// Linearly interpolate (lat, lon) at `target_km` along `waypoints`.
///
/// Locates the bracketing waypoint pair by cumulative distance and blends
/// both coordinates by the fractional position between them. Returns `None`
/// only for an empty slice; a single-point run returns that point, and
/// targets outside the covered range clamp to the nearest endpoint.
pub fn interpolate_position(waypoints: &[Waypoint], target_km: f64) -> Option<(f64, f64)> {
    let first = waypoints.first()?;
    let last = &waypoints[waypoints.len() - 1];

    if target_km <= first.distance_from_start_km {
        return Some((first.lat, first.lon));
    }
    if target_km >= last.distance_from_start_km {
        return Some((last.lat, last.lon));
    }

    for pair in waypoints.windows(2) {
        let (before, after) = (&pair[0], &pair[1]);
        if target_km > after.distance_from_start_km {
            continue;
        }
        let span = after.distance_from_start_km - before.distance_from_start_km;
        if span <= 0.0 {
            return Some((after.lat, after.lon));
        }
        let ratio = ((target_km - before.distance_from_start_km) / span).clamp(0.0, 1.0);
        return Some((
            before.lat + (after.lat - before.lat) * ratio,
            before.lon + (after.lon - before.lon) * ratio,
        ));
    }

    Some((last.lat, last.lon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountryCode;

    fn waypoint(lat: f64, lon: f64, distance_km: f64) -> Waypoint {
        Waypoint {
            lat,
            lon,
            distance_from_start_km: distance_km,
            country_code: CountryCode::from("PL"),
        }
    }

    #[test]
    fn interpolates_between_bracketing_waypoints() {
        let waypoints = vec![
            waypoint(52.0, 21.0, 0.0),
            waypoint(53.0, 20.0, 100.0),
            waypoint(53.0, 18.0, 300.0),
        ];
        let (lat, lon) = interpolate_position(&waypoints, 50.0).unwrap();
        assert!((lat - 52.5).abs() < 1e-9);
        assert!((lon - 20.5).abs() < 1e-9);

        let (lat, lon) = interpolate_position(&waypoints, 200.0).unwrap();
        assert!((lat - 53.0).abs() < 1e-9);
        assert!((lon - 19.0).abs() < 1e-9);
    }

    #[test]
    fn single_waypoint_returns_its_coordinates() {
        let waypoints = vec![waypoint(48.2, 16.4, 120.0)];
        assert_eq!(interpolate_position(&waypoints, 500.0), Some((48.2, 16.4)));
    }

    #[test]
    fn out_of_range_targets_clamp_to_endpoints() {
        let waypoints = vec![waypoint(52.0, 21.0, 100.0), waypoint(53.0, 20.0, 200.0)];
        assert_eq!(interpolate_position(&waypoints, 50.0), Some((52.0, 21.0)));
        assert_eq!(interpolate_position(&waypoints, 250.0), Some((53.0, 20.0)));
    }

    #[test]
    fn empty_run_has_no_position() {
        assert_eq!(interpolate_position(&[], 10.0), None);
    }

    #[test]
    fn zero_length_spans_are_skipped() {
        let waypoints = vec![
            waypoint(52.0, 21.0, 100.0),
            waypoint(52.5, 20.5, 100.0),
            waypoint(53.0, 20.0, 200.0),
        ];
        let (lat, lon) = interpolate_position(&waypoints, 150.0).unwrap();
        assert!((lat - 52.75).abs() < 1e-9);
        assert!((lon - 20.25).abs() < 1e-9);
    }
}
