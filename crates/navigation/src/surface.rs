//! What the navigation core needs from the map widget. Tiles, gestures and
//! icon assets stay on the other side of this trait. Taps are delivered to
//! the screen as `MapTapped` messages instead of callbacks.

use model::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIcon {
    Pin,
    Home,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: GeoPoint,
    pub icon: MarkerIcon,
    pub title: String,
}

impl Marker {
    pub fn new<S: Into<String>>(position: GeoPoint, icon: MarkerIcon, title: S) -> Self {
        Self {
            position,
            icon,
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStyle {
    pub width: f32,
}

pub trait RenderingSurface: Send + 'static {
    /// Handle to a drawn path, needed to remove it again.
    type Path: Send;

    fn add_marker(&mut self, marker: Marker);
    fn remove_markers(&mut self, predicate: &dyn Fn(&Marker) -> bool);
    fn add_path(&mut self, points: Vec<GeoPoint>, style: PathStyle) -> Self::Path;
    fn remove_path(&mut self, path: Self::Path);
    fn center_on(&mut self, point: GeoPoint);
    fn set_zoom(&mut self, level: f64);
    /// Request a redraw.
    fn invalidate(&mut self);
}
