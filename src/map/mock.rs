//! # Recording Surface
//!
//! [`RecordingSurface`] is an in-memory [`MapSurface`] that remembers what was drawn.
//! Clones share the same record, so a test can hand one clone to a shell and inspect
//! the other.

use crate::map::bounds::LatLngBounds;
use crate::map::surface::{MapSurface, MarkerHandle, MarkerOptions};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Record {
    markers: Vec<(MarkerHandle, MarkerOptions)>,
    camera_moves: Vec<(LatLngBounds, u32)>,
    clears: usize,
    next_handle: u64,
}

#[derive(Clone, Default)]
pub struct RecordingSurface {
    record: Arc<Mutex<Record>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markers currently on the surface, in placement order.
    pub fn markers(&self) -> Vec<MarkerOptions> {
        let record = self.record.lock().unwrap();
        record.markers.iter().map(|(_, m)| m.clone()).collect()
    }

    /// Titles of the markers currently on the surface.
    pub fn titles(&self) -> Vec<String> {
        self.markers().into_iter().map(|m| m.title).collect()
    }

    /// Every camera animation requested so far.
    pub fn camera_moves(&self) -> Vec<(LatLngBounds, u32)> {
        self.record.lock().unwrap().camera_moves.clone()
    }

    pub fn clear_count(&self) -> usize {
        self.record.lock().unwrap().clears
    }
}

impl MapSurface for RecordingSurface {
    fn clear_markers(&mut self) {
        let mut record = self.record.lock().unwrap();
        record.markers.clear();
        record.clears += 1;
    }

    fn add_marker(&mut self, options: MarkerOptions) -> MarkerHandle {
        let mut record = self.record.lock().unwrap();
        record.next_handle += 1;
        let handle = MarkerHandle(record.next_handle);
        record.markers.push((handle, options));
        handle
    }

    fn animate_camera_to_bounds(&mut self, bounds: LatLngBounds, padding: u32) {
        self.record.lock().unwrap().camera_moves.push((bounds, padding));
    }
}
