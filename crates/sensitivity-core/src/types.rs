// File: crates/sensitivity-core/src/types.rs
// Summary: Shared types and constants (default surface size, plot margins).

/// Default surface width in generic length units (pixels for raster output).
pub const WIDTH: u32 = 600;
/// Default surface height.
pub const HEIGHT: u32 = 400;

/// Margins between the surface edge and the plotting area.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Room for the rotated x ticks below and the y ticks on the left.
    fn default() -> Self {
        Self::new(60, 40, 40, 60)
    }
}
