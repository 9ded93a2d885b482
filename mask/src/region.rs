//! Mask regions and the in-memory store that owns them.
//!
//! A [`Region`] is a committed privacy-mask polygon in the exact shape the
//! device stores and serves. The [`MaskStore`] owns the committed collection
//! plus the single draft polygon under construction; the device remains
//! authoritative across reloads, so the store is refilled from a fetch on
//! every editor mount.

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;

use serde::{Deserialize, Serialize};

use crate::consts::MIN_REGION_VERTICES;
use crate::geometry::{Point, centroid};

/// Unique identifier for a committed region.
///
/// Assigned by the store, monotonically increasing within a session and
/// seeded past the highest id loaded from the device.
pub type RegionId = u64;

/// A committed privacy-mask polygon, as stored and sent on the wire.
///
/// Vertices are always in percentage space and a committed region always
/// has at least [`MIN_REGION_VERTICES`] of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub points: Vec<Point>,
}

impl Region {
    /// Label anchor for rendering: the arithmetic mean of the vertices.
    ///
    /// `None` only for a region deserialized with an empty point list,
    /// which the store itself never produces.
    #[must_use]
    pub fn center(&self) -> Option<Point> {
        centroid(&self.points)
    }
}

/// In-memory store owning the committed regions and the draft polygon.
///
/// Invariant: the committed collection never holds a polygon with fewer
/// than [`MIN_REGION_VERTICES`] vertices. [`complete`](Self::complete)
/// discards short drafts instead of promoting them.
#[derive(Debug, Clone, Default)]
pub struct MaskStore {
    regions: Vec<Region>,
    draft: Vec<Point>,
    next_id: RegionId,
}

impl MaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed regions in stable insertion order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Vertices of the draft polygon under construction.
    #[must_use]
    pub fn draft(&self) -> &[Point] {
        &self.draft
    }

    /// Whether a draft polygon is in progress.
    #[must_use]
    pub fn has_draft(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Replace the committed collection with the set loaded from the device.
    ///
    /// Id assignment continues past the highest loaded id so a commit after
    /// a reload cannot collide. The draft survives a reload untouched.
    pub fn replace_all(&mut self, regions: Vec<Region>) {
        if let Some(max_id) = regions.iter().map(|r| r.id).max() {
            self.next_id = self.next_id.max(max_id + 1);
        }
        self.regions = regions;
    }

    /// Append a vertex (percentage space) to the draft polygon.
    ///
    /// Callers must only pass points produced by a valid-geometry
    /// conversion; the store does not re-check coordinate ranges.
    pub fn add_point(&mut self, p: Point) {
        self.draft.push(p);
    }

    /// Promote the draft to a committed region.
    ///
    /// Drafts with fewer than [`MIN_REGION_VERTICES`] vertices are
    /// discarded: the committed collection is untouched and `None` is
    /// returned. The draft is cleared either way, so a failed completion
    /// never leaves a partial polygon behind.
    pub fn complete(&mut self) -> Option<RegionId> {
        let points = std::mem::take(&mut self.draft);
        if points.len() < MIN_REGION_VERTICES {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.regions.push(Region { id, points });
        Some(id)
    }

    /// Discard the draft polygon without committing it.
    pub fn cancel(&mut self) {
        self.draft.clear();
    }

    /// Remove the region with the given id.
    ///
    /// Returns whether a region was removed; deleting an absent id is an
    /// idempotent no-op (the caller still persists the unchanged set).
    pub fn delete(&mut self, id: RegionId) -> bool {
        let before = self.regions.len();
        self.regions.retain(|r| r.id != id);
        self.regions.len() != before
    }
}
