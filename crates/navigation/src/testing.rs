use std::sync::{Arc, Mutex, MutexGuard};

use model::GeoPoint;

use crate::surface::{Marker, PathStyle, RenderingSurface};

#[derive(Debug, Default)]
pub struct SurfaceState {
    pub markers: Vec<Marker>,
    pub paths: Vec<(u64, Vec<GeoPoint>, PathStyle)>,
    pub added_paths: usize,
    pub center: Option<GeoPoint>,
    pub zoom: Option<f64>,
    pub redraws: usize,
    /// Makes the next `center_on` panic, to exercise screen restarts.
    pub fail_next_center: bool,
    next_path: u64,
}

impl SurfaceState {
    pub fn markers_titled(&self, title: &str) -> Vec<&Marker> {
        self.markers
            .iter()
            .filter(|marker| marker.title == title)
            .collect()
    }
}

/// In-memory surface; clones share their state so tests can look at what an
/// actor did with its copy.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl RecordingSurface {
    pub fn state(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap()
    }
}

impl RenderingSurface for RecordingSurface {
    type Path = u64;

    fn add_marker(&mut self, marker: Marker) {
        self.state().markers.push(marker);
    }

    fn remove_markers(&mut self, predicate: &dyn Fn(&Marker) -> bool) {
        self.state().markers.retain(|marker| !predicate(marker));
    }

    fn add_path(&mut self, points: Vec<GeoPoint>, style: PathStyle) -> u64 {
        let mut state = self.state();
        state.next_path += 1;
        let id = state.next_path;
        state.paths.push((id, points, style));
        state.added_paths += 1;
        id
    }

    fn remove_path(&mut self, path: u64) {
        self.state().paths.retain(|(id, _, _)| *id != path);
    }

    fn center_on(&mut self, point: GeoPoint) {
        let fail = {
            let mut state = self.state();
            state.center = Some(point);
            std::mem::take(&mut state.fail_next_center)
        };
        // guard is released, the mutex stays usable after the panic
        if fail {
            panic!("surface failed to center");
        }
    }

    fn set_zoom(&mut self, level: f64) {
        self.state().zoom = Some(level);
    }

    fn invalidate(&mut self) {
        self.state().redraws += 1;
    }
}
