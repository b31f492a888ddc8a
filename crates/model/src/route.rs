use serde::{Deserialize, Serialize};
use utility::geo;

use crate::{Coordinate, GeoPoint};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// meters
    #[serde(default)]
    pub distance: f64,
    /// seconds
    #[serde(default)]
    pub duration: f64,
}

/// One path from origin to destination, in the order the routing service
/// returned it. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub coordinates: Vec<Coordinate>,
    pub summary: Option<RouteSummary>,
}

impl Route {
    pub fn new(coordinates: Vec<Coordinate>, summary: Option<RouteSummary>) -> Self {
        Self {
            coordinates,
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn points(&self) -> Vec<GeoPoint> {
        self.coordinates.iter().copied().map(GeoPoint::from).collect()
    }

    /// Length of the polyline itself, independent of the reported summary.
    pub fn length_km(&self) -> f64 {
        geo::path_length(
            self.coordinates
                .iter()
                .map(|coordinate| (coordinate.latitude(), coordinate.longitude())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_keep_order_and_swap_axes() {
        let route = Route::new(
            vec![
                Coordinate::new(10.0, 54.0).unwrap(),
                Coordinate::new(10.1, 54.1).unwrap(),
                Coordinate::new(10.2, 54.2).unwrap(),
            ],
            None,
        );
        assert_eq!(
            route.points(),
            vec![
                GeoPoint::new(54.0, 10.0),
                GeoPoint::new(54.1, 10.1),
                GeoPoint::new(54.2, 10.2),
            ]
        );
    }

    #[test]
    fn empty_route_has_no_length() {
        let route = Route::default();
        assert!(route.is_empty());
        assert_eq!(route.length_km(), 0.0);
    }

    #[test]
    fn length_follows_the_polyline() {
        let route = Route::new(
            vec![
                Coordinate::new(0.0, 0.0).unwrap(),
                Coordinate::new(0.0, 1.0).unwrap(),
            ],
            None,
        );
        assert!((route.length_km() - 111.19).abs() < 0.01);
    }
}
