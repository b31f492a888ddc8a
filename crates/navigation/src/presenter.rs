use model::{Coordinate, GeoPoint};

use crate::surface::{PathStyle, RenderingSurface};

pub const ROUTE_STYLE: PathStyle = PathStyle { width: 5.0 };

/// Owns the map surface and the one route drawn on it. At most one route
/// path is on the surface at any time.
pub struct RoutePresenter<S: RenderingSurface> {
    surface: S,
    current: Option<S::Path>,
}

impl<S: RenderingSurface> RoutePresenter<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            current: None,
        }
    }

    /// Replaces the drawn route. An empty sequence leaves no route at all.
    pub fn show_route(&mut self, coordinates: &[Coordinate]) {
        if let Some(path) = self.current.take() {
            self.surface.remove_path(path);
        }
        if !coordinates.is_empty() {
            let points = coordinates.iter().copied().map(GeoPoint::from).collect();
            self.current = Some(self.surface.add_path(points, ROUTE_STYLE));
        }
        self.surface.invalidate();
    }

    pub fn clear_route(&mut self) {
        if let Some(path) = self.current.take() {
            self.surface.remove_path(path);
            self.surface.invalidate();
        }
    }

    pub fn has_route(&self) -> bool {
        self.current.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// For markers and camera only; the route path is not reachable from here.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
