pub use coordinate::{Coordinate, GeoPoint, InvalidCoordinate};
pub use route::{Route, RouteSummary};

pub mod coordinate;
pub mod route;
