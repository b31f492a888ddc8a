use std::error;
use std::fmt;

pub mod location;
pub mod location_store;
pub mod presenter;
pub mod screen;
pub mod surface;

#[cfg(test)]
mod testing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationUnavailableError {
    PermissionDenied,
    /// The provider answered, but without a position.
    NoFix,
}

impl error::Error for LocationUnavailableError {}

impl fmt::Display for LocationUnavailableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "Location permission was denied."),
            Self::NoFix => write!(f, "No current position available."),
        }
    }
}
