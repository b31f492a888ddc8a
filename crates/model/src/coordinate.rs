use std::{error, fmt};

use serde::{Deserialize, Serialize};

/// A position as exchanged with the routing service: longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InvalidCoordinate {
    Longitude(f64),
    Latitude(f64),
    Arity(usize),
}

impl error::Error for InvalidCoordinate {}

impl fmt::Display for InvalidCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Longitude(value) => {
                write!(f, "longitude {} is outside of [-180, 180]", value)
            }
            Self::Latitude(value) => {
                write!(f, "latitude {} is outside of [-90, 90]", value)
            }
            Self::Arity(len) => write!(
                f,
                "expected [lon, lat] or [lon, lat, ele], got {} values",
                len
            ),
        }
    }
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, InvalidCoordinate> {
        // negated range checks so that NaN is rejected as well
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinate::Longitude(longitude));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinate::Latitude(latitude));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

/// Formats as `lon,lat`, the form the routing service expects for
/// `start` and `end`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.longitude, self.latitude)
    }
}

impl TryFrom<Vec<f64>> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            // third value is the elevation
            [longitude, latitude] | [longitude, latitude, _] => {
                Self::new(*longitude, *latitude)
            }
            other => Err(InvalidCoordinate::Arity(other.len())),
        }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coordinate: Coordinate) -> Self {
        [coordinate.longitude, coordinate.latitude]
    }
}

/// A position as consumed by the map: latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for GeoPoint {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate.latitude, coordinate.longitude)
    }
}

impl TryFrom<GeoPoint> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(point: GeoPoint) -> Result<Self, Self::Error> {
        Self::new(point.longitude, point.latitude)
    }
}
