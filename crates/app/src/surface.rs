use model::GeoPoint;
use navigation::surface::{Marker, PathStyle, RenderingSurface};

/// Headless stand-in for the map widget that reports what would be drawn.
#[derive(Debug, Default)]
pub struct LogSurface {
    markers: Vec<Marker>,
    paths: Vec<usize>,
    next_path: usize,
}

impl RenderingSurface for LogSurface {
    type Path = usize;

    fn add_marker(&mut self, marker: Marker) {
        log::info!(
            "marker '{}' ({:?}) at {}, {}",
            marker.title,
            marker.icon,
            marker.position.latitude,
            marker.position.longitude
        );
        self.markers.push(marker);
    }

    fn remove_markers(&mut self, predicate: &dyn Fn(&Marker) -> bool) {
        self.markers.retain(|marker| !predicate(marker));
    }

    fn add_path(&mut self, points: Vec<GeoPoint>, style: PathStyle) -> usize {
        self.next_path += 1;
        log::info!(
            "path #{} with {} points (width {})",
            self.next_path,
            points.len(),
            style.width
        );
        self.paths.push(self.next_path);
        self.next_path
    }

    fn remove_path(&mut self, path: usize) {
        log::info!("removing path #{}", path);
        self.paths.retain(|id| *id != path);
    }

    fn center_on(&mut self, point: GeoPoint) {
        log::info!("centered on {}, {}", point.latitude, point.longitude);
    }

    fn set_zoom(&mut self, level: f64) {
        log::debug!("zoom {}", level);
    }

    fn invalidate(&mut self) {
        log::debug!(
            "redraw: {} markers, {} paths",
            self.markers.len(),
            self.paths.len()
        );
    }
}
