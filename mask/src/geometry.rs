//! Points, preview geometry, and pixel/percentage conversion.
//!
//! Mask vertices are stored and transmitted in percentage space (0–100 per
//! axis, relative to the image's intrinsic dimensions) so they survive
//! display resizing and resolution changes. Pixel space exists only between
//! a pointer event and the conversion, or between the conversion and
//! rendering. It is never persisted.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::PERCENT_SCALE;

/// A point in either pixel or percentage space.
///
/// The space is implicit from context: wire and stored points are always
/// percentage space, pointer events and render output are pixel space. A
/// computation must never mix the two without going through
/// [`PreviewGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered size of the live preview element, in CSS pixels.
///
/// Zero until the first successful image load. Conversions are undefined
/// while [`is_valid`](Self::is_valid) is false and callers must not invoke
/// them before then; pointer input arriving that early is dropped upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PreviewGeometry {
    pub width: f64,
    pub height: f64,
}

impl PreviewGeometry {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether pixel/percentage conversion is defined for this geometry.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Convert a pixel-space point to percentage space.
    ///
    /// No clamping: capture points originate from in-bounds pointer events,
    /// so out-of-range input simply maps to out-of-range output.
    #[must_use]
    pub fn to_percent(&self, pixel: Point) -> Point {
        Point {
            x: pixel.x / self.width * PERCENT_SCALE,
            y: pixel.y / self.height * PERCENT_SCALE,
        }
    }

    /// Convert a percentage-space point to pixel space.
    #[must_use]
    pub fn to_pixels(&self, percent: Point) -> Point {
        Point {
            x: percent.x / PERCENT_SCALE * self.width,
            y: percent.y / PERCENT_SCALE * self.height,
        }
    }
}

/// Arithmetic mean of a vertex list, or `None` for an empty list.
///
/// Used for label placement only; never persisted.
#[must_use]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}
