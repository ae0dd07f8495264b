//! Constraint resolution
//!
//! Turns a [`ConstraintSpec`] into a pixel [`Rect`] inside its parent. The
//! solve runs per axis in a fixed order:
//!
//! 1. **Size**: classify the declared width/height and resolve it against the
//!    parent, the external measurement or the free-space pool, then clamp.
//! 2. **Aspect ratio**: fill in a dimension nobody constrained explicitly.
//! 3. **Position**: pick the highest-precedence pin set on the axis
//!    ([`AxisPins`]) and place the element.
//! 4. **Pixel alignment**, when requested.
//!
//! A step that needs a size nobody can provide yields `None` for the whole
//! rectangle. Malformed or contradictory input never does; it degrades to a
//! deterministic default instead.

use super::context::ConstraintContext;
use super::dimension::{Dimension, DimensionValue};
use super::free_space::{FreeSpacePool, WithFractionOfFreeSpace};
use super::spec::{AxisPins, AxisSpec, ConstraintSpec};
use super::types::{Axis, Rect, Size};

/// How an axis size was arrived at
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum AxisSize {
    /// An explicit number, percentage, fraction or two-pin span
    Explicit(f64),
    /// `auto` or unset; an aspect ratio may replace it
    Unconstrained(f64),
}

impl AxisSize {
    pub(crate) fn value(self) -> f64 {
        match self {
            AxisSize::Explicit(v) | AxisSize::Unconstrained(v) => v,
        }
    }

    fn with_value(self, value: f64) -> AxisSize {
        match self {
            AxisSize::Explicit(_) => AxisSize::Explicit(value),
            AxisSize::Unconstrained(_) => AxisSize::Unconstrained(value),
        }
    }
}

/// Resolve an element's rectangle.
///
/// Returns `None` when the element cannot be placed yet: its parent size is
/// unknown and some branch needs it, an `auto_size` element has no
/// measurement, or constraint resolution is disabled for this level.
pub fn resolve(
    spec: &ConstraintSpec,
    context: &ConstraintContext,
    auto_size: Option<Size>,
    free_space: Option<&WithFractionOfFreeSpace>,
    pixel_align: bool,
) -> Option<Rect> {
    if !context.parent_size.is_enabled() {
        tracing::trace!(parent = ?context.parent_size, "constraints disabled");
        return None;
    }

    let reference = context.reference_size(spec.position_fixed);
    let size = solve_size(spec, reference, auto_size, free_space)?;

    let x = position(
        &spec.axis(Axis::Horizontal),
        size.width,
        reference.map(|r| r.width),
    )?;
    let y = position(
        &spec.axis(Axis::Vertical),
        size.height,
        reference.map(|r| r.height),
    )?;

    let rect = Rect::new(x, y, size.width, size.height);
    Some(if pixel_align {
        rect.pixel_aligned()
    } else {
        rect
    })
}

/// Resolve only an element's size, without placing it
pub fn resolve_size(
    spec: &ConstraintSpec,
    context: &ConstraintContext,
    auto_size: Option<Size>,
    free_space: Option<&WithFractionOfFreeSpace>,
) -> Option<Size> {
    if !context.parent_size.is_enabled() {
        return None;
    }
    solve_size(
        spec,
        context.reference_size(spec.position_fixed),
        auto_size,
        free_space,
    )
}

pub(crate) fn solve_size(
    spec: &ConstraintSpec,
    reference: Option<Size>,
    auto_size: Option<Size>,
    free_space: Option<&WithFractionOfFreeSpace>,
) -> Option<Size> {
    let x_spec = spec.axis(Axis::Horizontal);
    let y_spec = spec.axis(Axis::Vertical);
    let parent_width = reference.map(|r| r.width);
    let parent_height = reference.map(|r| r.height);

    let mut width = axis_size(
        &x_spec,
        Axis::Horizontal,
        parent_width,
        auto_size.map(|s| s.width),
        spec.auto_size,
        free_space.and_then(|f| f.pool(Axis::Horizontal)),
    )?;
    let mut height = axis_size(
        &y_spec,
        Axis::Vertical,
        parent_height,
        auto_size.map(|s| s.height),
        spec.auto_size,
        free_space.and_then(|f| f.pool(Axis::Vertical)),
    )?;

    if let Some(ratio) = spec.aspect_ratio.filter(|r| r.is_finite() && *r > 0.0) {
        match (width, height) {
            (AxisSize::Unconstrained(_), AxisSize::Explicit(h)) => {
                width = AxisSize::Explicit(clamp_size(h * ratio, &x_spec, parent_width)?);
            }
            (AxisSize::Explicit(w) | AxisSize::Unconstrained(w), AxisSize::Unconstrained(_)) => {
                height = AxisSize::Explicit(clamp_size(w / ratio, &y_spec, parent_height)?);
            }
            (AxisSize::Explicit(_), AxisSize::Explicit(_)) => {}
        }
    }

    Some(Size::new(width.value(), height.value()))
}

/// Size of one axis, pins included, clamped
fn axis_size(
    spec: &AxisSpec<'_>,
    axis: Axis,
    parent: Option<f64>,
    measured: Option<f64>,
    auto_size: bool,
    pool: Option<&FreeSpacePool>,
) -> Option<AxisSize> {
    let size = match AxisPins::from_axis(spec) {
        AxisPins::StartAndEnd { start, end } => {
            let parent = parent?;
            let span = parent - start.offset(Some(parent))? - end.offset(Some(parent))?;
            AxisSize::Explicit(span)
        }
        _ => declared_size(spec, axis, parent, measured, auto_size, pool)?,
    };
    Some(size.with_value(clamp_size(size.value(), spec, parent)?))
}

/// Size from the declared width/height alone, before clamping
fn declared_size(
    spec: &AxisSpec<'_>,
    axis: Axis,
    parent: Option<f64>,
    measured: Option<f64>,
    auto_size: bool,
    pool: Option<&FreeSpacePool>,
) -> Option<AxisSize> {
    let Some(raw) = spec.size else {
        return Some(AxisSize::Unconstrained(0.0));
    };

    let size = match Dimension::from_value(raw) {
        Dimension::FixedNumber(px) => AxisSize::Explicit(px),
        Dimension::Percentage(p) => AxisSize::Explicit(p * parent?),
        Dimension::FractionOfFreeSpace(units) => {
            // Free space is always measured against a known parent
            parent?;
            match pool {
                Some(pool) => AxisSize::Explicit(pool.share(units)),
                None => {
                    tracing::warn!(
                        ?axis,
                        units,
                        "fraction size outside a free-space container, using 0"
                    );
                    AxisSize::Explicit(0.0)
                }
            }
        }
        Dimension::Auto => match measured.or(spec.intrinsic) {
            Some(m) => AxisSize::Unconstrained(m),
            None if auto_size => return None,
            None => AxisSize::Unconstrained(0.0),
        },
    };
    Some(size)
}

/// Clamp to `[min, max]` and floor at 0. Min wins when the bounds cross.
fn clamp_size(size: f64, spec: &AxisSpec<'_>, parent: Option<f64>) -> Option<f64> {
    let mut size = size;
    if let Some(max) = clamp_bound(spec.max, parent)? {
        size = size.min(max);
    }
    if let Some(min) = clamp_bound(spec.min, parent)? {
        size = size.max(min);
    }
    Some(size.max(0.0))
}

/// A clamp bound in pixels. `auto` and fractions do not bound anything.
fn clamp_bound(raw: Option<&DimensionValue>, parent: Option<f64>) -> Option<Option<f64>> {
    match raw.map(Dimension::from_value) {
        None | Some(Dimension::Auto | Dimension::FractionOfFreeSpace(_)) => Some(None),
        Some(bound) => bound.offset(parent).map(Some),
    }
}

fn position(spec: &AxisSpec<'_>, size: f64, parent: Option<f64>) -> Option<f64> {
    match AxisPins::from_axis(spec) {
        AxisPins::StartAndEnd { start, .. } | AxisPins::Start(start) => start.offset(parent),
        AxisPins::End(end) => {
            let parent = parent?;
            Some(parent - end.offset(Some(parent))? - size)
        }
        AxisPins::Center(anchor) => Some(anchor.offset(parent)? - size * 0.5),
        AxisPins::Unpinned => Some(0.0),
    }
}
