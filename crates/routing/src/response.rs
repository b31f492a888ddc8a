//! Wire format of the directions endpoint (GeoJSON flavour).

use model::{Coordinate, Route, RouteSummary};
use serde::Deserialize;

use crate::RouteFetchError;

#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub coordinates: Vec<Coordinate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub summary: Option<RouteSummary>,
}

/// Only the first feature is used; alternatives are ignored.
impl From<RouteResponse> for Route {
    fn from(response: RouteResponse) -> Self {
        match response.features.into_iter().next() {
            Some(feature) => Route::new(
                feature.geometry.coordinates,
                feature.properties.and_then(|properties| properties.summary),
            ),
            None => Route::default(),
        }
    }
}

pub fn parse_route(body: &str) -> Result<Route, RouteFetchError> {
    let response: RouteResponse = serde_json::from_str(body)?;
    Ok(response.into())
}

#[cfg(test)]
mod tests {
    use model::GeoPoint;

    use super::*;

    #[test]
    fn takes_the_first_feature_in_order() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[10.12, 54.32], [10.13, 54.33], [10.14, 54.35]]
                    },
                    "properties": { "summary": { "distance": 412.7, "duration": 63.1 } }
                },
                {
                    "geometry": { "coordinates": [[0.0, 0.0], [1.0, 1.0]] }
                }
            ]
        }"#;

        let route = parse_route(body).unwrap();

        assert_eq!(
            route.points(),
            vec![
                GeoPoint::new(54.32, 10.12),
                GeoPoint::new(54.33, 10.13),
                GeoPoint::new(54.35, 10.14),
            ]
        );
        assert_eq!(
            route.summary,
            Some(RouteSummary {
                distance: 412.7,
                duration: 63.1
            })
        );
    }

    #[test]
    fn no_features_is_an_empty_route() {
        assert!(parse_route(r#"{ "features": [] }"#).unwrap().is_empty());
        assert!(parse_route("{}").unwrap().is_empty());
    }

    #[test]
    fn empty_summary_defaults_to_zero() {
        let body = r#"{ "features": [ {
            "geometry": { "coordinates": [] },
            "properties": { "summary": {} }
        } ] }"#;

        let route = parse_route(body).unwrap();

        assert!(route.is_empty());
        assert_eq!(
            route.summary,
            Some(RouteSummary {
                distance: 0.0,
                duration: 0.0
            })
        );
    }

    #[test]
    fn malformed_body_is_a_json_error() {
        assert!(matches!(
            parse_route("<html>Bad Gateway</html>"),
            Err(RouteFetchError::JsonError(_))
        ));
        assert!(matches!(
            parse_route(r#"{ "features": [ { "geometry": { "coordinates": [[200.0, 1.0]] } } ] }"#),
            Err(RouteFetchError::JsonError(_))
        ));
    }
}
