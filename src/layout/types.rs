//! Core geometry types for the constraint resolver

use serde::Deserialize;

/// A width/height pair in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The extent of this size along an axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// One of the two layout axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// X axis: left / right / center_x / width
    Horizontal,
    /// Y axis: top / bottom / center_y / height
    Vertical,
}

/// A resolved rectangle in the parent's coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Snap to whole pixels.
    ///
    /// Positions are floored (toward negative infinity, so `-0.5` becomes
    /// `-1`) and sizes rounded half-up.
    pub fn pixel_aligned(&self) -> Rect {
        Rect {
            x: self.x.floor(),
            y: self.y.floor(),
            width: round_half_up(self.width),
            height: round_half_up(self.height),
        }
    }
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
