// File: crates/sensitivity-core/src/geometry.rs
// Summary: Lightweight geometry helpers for layout math.

/// Axis-aligned rectangle in surface units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    /// Negative extents collapse to zero.
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width: width.max(0.0), height: height.max(0.0) }
    }
    pub fn right(&self) -> f32 { self.left + self.width }
    pub fn bottom(&self) -> f32 { self.top + self.height }
    pub fn center_x(&self) -> f32 { self.left + self.width * 0.5 }
    pub fn center_y(&self) -> f32 { self.top + self.height * 0.5 }
    pub fn is_empty(&self) -> bool { self.width <= 0.0 || self.height <= 0.0 }
}

/// A point on the surface.
pub type PointF = (f32, f32);
