// File: crates/sensitivity-core/src/axis.rs
// Summary: Categorical axis model with caption, side and tick label rotation.

use crate::scale::BandScale;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub caption: String,
    pub side: AxisSide,
    /// Tick label rotation in degrees (negative = counter-clockwise).
    pub tick_rotation: f32,
    /// Length of the tick marks.
    pub tick_size: f32,
}

/// One tick: its label and where it sits along the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub label: String,
    pub position: f32,
}

impl Axis {
    pub fn new(caption: impl Into<String>, side: AxisSide) -> Self {
        Self { caption: caption.into(), side, tick_rotation: 0.0, tick_size: 6.0 }
    }

    pub fn with_tick_rotation(mut self, degrees: f32) -> Self {
        self.tick_rotation = degrees;
        self
    }

    /// Leverage axis along the bottom; labels tilted so long multiples don't collide.
    pub fn default_x() -> Self {
        Self::new("Debt / EBITDA", AxisSide::Bottom).with_tick_rotation(-45.0)
    }

    /// Cost-of-capital axis on the left.
    pub fn default_y() -> Self {
        Self::new("WACC", AxisSide::Left)
    }

    /// Ticks at band centers. Labels past the scale's length are ignored.
    pub fn ticks(&self, scale: &BandScale, labels: &[String]) -> Vec<Tick> {
        labels
            .iter()
            .enumerate()
            .filter_map(|(i, l)| scale.center(i).map(|position| Tick { label: l.clone(), position }))
            .collect()
    }
}
