//! Constraint specifications
//!
//! A [`ConstraintSpec`] is the raw, possibly over- or under-determined
//! description of how an element sits inside its parent. Nothing is validated
//! here; the resolver applies a fixed precedence to whatever is set.

use serde::Deserialize;

use super::dimension::{Dimension, DimensionValue};
use super::types::Axis;

/// Per-axis pins, sizes and clamps for one element
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ConstraintSpec {
    pub left: Option<DimensionValue>,
    pub right: Option<DimensionValue>,
    pub top: Option<DimensionValue>,
    pub bottom: Option<DimensionValue>,
    /// Horizontal anchor, e.g. `"50%"` of the parent width
    pub center_x: Option<DimensionValue>,
    /// Vertical anchor, e.g. `"50%"` of the parent height
    pub center_y: Option<DimensionValue>,
    pub width: Option<DimensionValue>,
    pub height: Option<DimensionValue>,
    pub aspect_ratio: Option<f64>,
    /// Size comes from an external measurement; without one the element is
    /// not renderable yet
    pub auto_size: bool,
    pub min_width: Option<DimensionValue>,
    pub max_width: Option<DimensionValue>,
    pub min_height: Option<DimensionValue>,
    pub max_height: Option<DimensionValue>,
    /// Fallback measurement for `auto` widths
    pub intrinsic_width: Option<f64>,
    /// Fallback measurement for `auto` heights
    pub intrinsic_height: Option<f64>,
    /// Resolve against the viewport rather than the parent
    pub position_fixed: bool,
}

/// Borrowed view of the fields that drive a single axis
#[derive(Debug, Clone, Copy)]
pub struct AxisSpec<'a> {
    pub start: Option<&'a DimensionValue>,
    pub end: Option<&'a DimensionValue>,
    pub center: Option<&'a DimensionValue>,
    pub size: Option<&'a DimensionValue>,
    pub min: Option<&'a DimensionValue>,
    pub max: Option<&'a DimensionValue>,
    pub intrinsic: Option<f64>,
}

impl ConstraintSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the fields for one axis
    pub fn axis(&self, axis: Axis) -> AxisSpec<'_> {
        match axis {
            Axis::Horizontal => AxisSpec {
                start: self.left.as_ref(),
                end: self.right.as_ref(),
                center: self.center_x.as_ref(),
                size: self.width.as_ref(),
                min: self.min_width.as_ref(),
                max: self.max_width.as_ref(),
                intrinsic: self.intrinsic_width,
            },
            Axis::Vertical => AxisSpec {
                start: self.top.as_ref(),
                end: self.bottom.as_ref(),
                center: self.center_y.as_ref(),
                size: self.height.as_ref(),
                min: self.min_height.as_ref(),
                max: self.max_height.as_ref(),
                intrinsic: self.intrinsic_height,
            },
        }
    }

    pub fn with_left(mut self, value: impl Into<DimensionValue>) -> Self {
        self.left = Some(value.into());
        self
    }

    pub fn with_right(mut self, value: impl Into<DimensionValue>) -> Self {
        self.right = Some(value.into());
        self
    }

    pub fn with_top(mut self, value: impl Into<DimensionValue>) -> Self {
        self.top = Some(value.into());
        self
    }

    pub fn with_bottom(mut self, value: impl Into<DimensionValue>) -> Self {
        self.bottom = Some(value.into());
        self
    }

    pub fn with_center_x(mut self, value: impl Into<DimensionValue>) -> Self {
        self.center_x = Some(value.into());
        self
    }

    pub fn with_center_y(mut self, value: impl Into<DimensionValue>) -> Self {
        self.center_y = Some(value.into());
        self
    }

    pub fn with_width(mut self, value: impl Into<DimensionValue>) -> Self {
        self.width = Some(value.into());
        self
    }

    pub fn with_height(mut self, value: impl Into<DimensionValue>) -> Self {
        self.height = Some(value.into());
        self
    }

    pub fn with_aspect_ratio(mut self, ratio: f64) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    pub fn with_auto_size(mut self, auto_size: bool) -> Self {
        self.auto_size = auto_size;
        self
    }

    /// Set the width clamp; `None` leaves a side open
    pub fn with_width_bounds(
        mut self,
        min: Option<impl Into<DimensionValue>>,
        max: Option<impl Into<DimensionValue>>,
    ) -> Self {
        self.min_width = min.map(Into::into);
        self.max_width = max.map(Into::into);
        self
    }

    /// Set the height clamp; `None` leaves a side open
    pub fn with_height_bounds(
        mut self,
        min: Option<impl Into<DimensionValue>>,
        max: Option<impl Into<DimensionValue>>,
    ) -> Self {
        self.min_height = min.map(Into::into);
        self.max_height = max.map(Into::into);
        self
    }

    pub fn with_intrinsic_size(mut self, width: f64, height: f64) -> Self {
        self.intrinsic_width = Some(width);
        self.intrinsic_height = Some(height);
        self
    }

    pub fn with_position_fixed(mut self, fixed: bool) -> Self {
        self.position_fixed = fixed;
        self
    }
}

/// Which pins are set on one axis, in precedence order.
///
/// Every combination of start/end/center collapses into exactly one of these,
/// so each branch of the position solve can be exercised on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisPins {
    /// Both edges pinned: the size is whatever lies between them
    StartAndEnd { start: Dimension, end: Dimension },
    /// Pinned to the leading edge (left / top)
    Start(Dimension),
    /// Pinned to the trailing edge (right / bottom)
    End(Dimension),
    /// Element center aligned to an anchor along the parent
    Center(Dimension),
    /// Nothing set: sits at the parent origin
    Unpinned,
}

impl AxisPins {
    pub fn from_axis(spec: &AxisSpec<'_>) -> Self {
        match (spec.start, spec.end, spec.center) {
            (Some(start), Some(end), _) => AxisPins::StartAndEnd {
                start: Dimension::from_value(start),
                end: Dimension::from_value(end),
            },
            (Some(start), None, _) => AxisPins::Start(Dimension::from_value(start)),
            (None, Some(end), _) => AxisPins::End(Dimension::from_value(end)),
            (None, None, Some(center)) => AxisPins::Center(Dimension::from_value(center)),
            (None, None, None) => AxisPins::Unpinned,
        }
    }
}
