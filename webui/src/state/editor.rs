//! Editor view state: mask store, preview geometry, load tracking.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use mask::geometry::{Point, PreviewGeometry};
use mask::region::MaskStore;

/// State owned by the mask editor for the lifetime of the control view.
///
/// The device is authoritative: `loaded` tracks whether the region set has
/// been fetched since the preview source last changed, and the first valid
/// geometry after a source change triggers that fetch so loaded regions are
/// immediately renderable in pixel space.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub store: MaskStore,
    pub geometry: PreviewGeometry,
    pub loaded: bool,
}

impl EditorState {
    /// Record the rendered preview size after an image load or resize.
    ///
    /// Returns true when the caller should fetch the authoritative region
    /// set now: the geometry is valid and no fetch has happened since the
    /// source last changed.
    pub fn set_geometry(&mut self, width: f64, height: f64) -> bool {
        self.geometry = PreviewGeometry::new(width, height);
        self.geometry.is_valid() && !self.loaded
    }

    /// A new preview source is loading; the next valid geometry should
    /// trigger a region reload.
    pub fn mark_source_changed(&mut self) {
        self.loaded = false;
    }

    /// Convert a pointer position to percentage space.
    ///
    /// Returns `None` until a successful image load has produced a valid
    /// geometry; input before that is ignored rather than divided by zero.
    #[must_use]
    pub fn capture_point(&self, pixel: Point) -> Option<Point> {
        self.geometry
            .is_valid()
            .then(|| self.geometry.to_percent(pixel))
    }
}
