//! Free-space distribution across a sibling group
//!
//! Siblings sized in `fr` units split whatever their parent has left once the
//! fixed, percentage and auto-sized siblings (and the gaps between them) have
//! been taken out. The pool is built once per parent and axis, handed to the
//! resolver for each sibling, then dropped.

use super::context::ConstraintContext;
use super::dimension::Dimension;
use super::resolver::solve_size;
use super::spec::ConstraintSpec;
use super::types::{Axis, Size};

/// Leftover space of one parent along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeSpacePool {
    pub total_free_space: f64,
    pub total_fraction_units: f64,
}

/// A member of the sibling group a pool is built from
#[derive(Debug, Clone, Copy)]
pub struct Sibling<'a> {
    pub spec: &'a ConstraintSpec,
    pub auto_size: Option<Size>,
}

impl<'a> Sibling<'a> {
    pub fn new(spec: &'a ConstraintSpec, auto_size: Option<Size>) -> Self {
        Self { spec, auto_size }
    }
}

impl FreeSpacePool {
    pub fn new(total_free_space: f64, total_fraction_units: f64) -> Self {
        Self {
            total_free_space,
            total_fraction_units,
        }
    }

    /// Pixels owed to a sibling holding `units` fraction units.
    ///
    /// A pool with no units hands out nothing.
    pub fn share(&self, units: f64) -> f64 {
        if self.total_fraction_units <= 0.0 {
            return 0.0;
        }
        units / self.total_fraction_units * self.total_free_space
    }

    /// Build the pool for a sibling group along `axis`.
    ///
    /// `context` is the context the siblings resolve in, i.e. the one whose
    /// parent size is the distributing container. Fixed-position siblings are
    /// out of flow and ignored. Returns `None` when the container size or a
    /// non-fraction sibling's size is not known.
    pub fn build<'a>(
        siblings: impl IntoIterator<Item = Sibling<'a>>,
        axis: Axis,
        context: &ConstraintContext,
        gap: f64,
    ) -> Option<FreeSpacePool> {
        let parent = context.parent_size.size()?;
        let available = parent.along(axis);

        let mut used = 0.0;
        let mut units = 0.0;
        let mut in_flow = 0usize;

        for sibling in siblings {
            if sibling.spec.position_fixed {
                continue;
            }
            in_flow += 1;

            if let Some(Dimension::FractionOfFreeSpace(fr)) =
                sibling.spec.axis(axis).size.map(Dimension::from_value)
            {
                units += fr;
                continue;
            }

            // Pins and aspect ratio count, so take the full size solve
            let size = solve_size(sibling.spec, Some(parent), sibling.auto_size, None)?;
            used += size.along(axis);
        }

        let gaps = gap * in_flow.saturating_sub(1) as f64;
        let pool = FreeSpacePool::new((available - used - gaps).max(0.0), units);
        tracing::trace!(?axis, ?pool, "built free-space pool");
        Some(pool)
    }
}

/// Free-space pools available to an element, per axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WithFractionOfFreeSpace {
    pub horizontal: Option<FreeSpacePool>,
    pub vertical: Option<FreeSpacePool>,
}

impl WithFractionOfFreeSpace {
    /// A single pool distributing along `axis`
    pub fn along(axis: Axis, pool: FreeSpacePool) -> Self {
        match axis {
            Axis::Horizontal => Self {
                horizontal: Some(pool),
                vertical: None,
            },
            Axis::Vertical => Self {
                horizontal: None,
                vertical: Some(pool),
            },
        }
    }

    pub fn pool(&self, axis: Axis) -> Option<&FreeSpacePool> {
        match axis {
            Axis::Horizontal => self.horizontal.as_ref(),
            Axis::Vertical => self.vertical.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::context::ParentSize;

    fn ctx(width: f64, height: f64) -> ConstraintContext {
        ConstraintContext::new(Size::new(width, height), None)
    }

    #[test]
    fn test_share_splits_by_units() {
        let pool = FreeSpacePool::new(300.0, 3.0);
        assert_eq!(pool.share(1.0), 100.0);
        assert_eq!(pool.share(2.0), 200.0);
    }

    #[test]
    fn test_share_with_zero_units_is_zero() {
        let pool = FreeSpacePool::new(300.0, 0.0);
        assert_eq!(pool.share(1.0), 0.0);
    }

    #[test]
    fn test_build_subtracts_fixed_siblings() {
        let fixed = ConstraintSpec::new().with_width(100);
        let flexible = ConstraintSpec::new().with_width("1fr");
        let pool = FreeSpacePool::build(
            [Sibling::new(&fixed, None), Sibling::new(&flexible, None)],
            Axis::Horizontal,
            &ctx(300.0, 50.0),
            0.0,
        )
        .unwrap();
        assert_eq!(pool, FreeSpacePool::new(200.0, 1.0));
    }

    #[test]
    fn test_build_counts_percentage_auto_and_gaps() {
        let percent = ConstraintSpec::new().with_height("25%");
        let auto = ConstraintSpec::new().with_height("auto");
        let a = ConstraintSpec::new().with_height("1fr");
        let b = ConstraintSpec::new().with_height("3fr");
        let pool = FreeSpacePool::build(
            [
                Sibling::new(&percent, None),
                Sibling::new(&auto, Some(Size::new(0.0, 30.0))),
                Sibling::new(&a, None),
                Sibling::new(&b, None),
            ],
            Axis::Vertical,
            &ctx(100.0, 400.0),
            10.0,
        )
        .unwrap();
        // 400 - 100 (25%) - 30 (auto) - 3 * 10 (gaps)
        assert_eq!(pool, FreeSpacePool::new(240.0, 4.0));
    }

    #[test]
    fn test_build_applies_sibling_clamps() {
        let clamped = ConstraintSpec::new()
            .with_width(500)
            .with_width_bounds(None::<f64>, Some(120));
        let flexible = ConstraintSpec::new().with_width("1fr");
        let pool = FreeSpacePool::build(
            [Sibling::new(&clamped, None), Sibling::new(&flexible, None)],
            Axis::Horizontal,
            &ctx(300.0, 50.0),
            0.0,
        )
        .unwrap();
        assert_eq!(pool.total_free_space, 180.0);
    }

    #[test]
    fn test_build_counts_two_pin_span() {
        let pinned = ConstraintSpec::new().with_left(0).with_right(200);
        let flexible = ConstraintSpec::new().with_width("1fr");
        let pool = FreeSpacePool::build(
            [Sibling::new(&pinned, None), Sibling::new(&flexible, None)],
            Axis::Horizontal,
            &ctx(300.0, 50.0),
            0.0,
        )
        .unwrap();
        assert_eq!(pool, FreeSpacePool::new(200.0, 1.0));
    }

    #[test]
    fn test_build_counts_aspect_ratio_size() {
        let square_ish = ConstraintSpec::new().with_height(50).with_aspect_ratio(2.0);
        let flexible = ConstraintSpec::new().with_width("1fr");
        let pool = FreeSpacePool::build(
            [Sibling::new(&square_ish, None), Sibling::new(&flexible, None)],
            Axis::Horizontal,
            &ctx(300.0, 50.0),
            0.0,
        )
        .unwrap();
        assert_eq!(pool, FreeSpacePool::new(200.0, 1.0));
    }

    #[test]
    fn test_build_floors_at_zero() {
        let wide = ConstraintSpec::new().with_width(500);
        let flexible = ConstraintSpec::new().with_width("1fr");
        let pool = FreeSpacePool::build(
            [Sibling::new(&wide, None), Sibling::new(&flexible, None)],
            Axis::Horizontal,
            &ctx(300.0, 50.0),
            0.0,
        )
        .unwrap();
        assert_eq!(pool.total_free_space, 0.0);
    }

    #[test]
    fn test_build_ignores_fixed_position_siblings() {
        let overlay = ConstraintSpec::new().with_width(200).with_position_fixed(true);
        let flexible = ConstraintSpec::new().with_width("1fr");
        let pool = FreeSpacePool::build(
            [Sibling::new(&overlay, None), Sibling::new(&flexible, None)],
            Axis::Horizontal,
            &ctx(300.0, 50.0),
            20.0,
        )
        .unwrap();
        assert_eq!(pool, FreeSpacePool::new(300.0, 1.0));
    }

    #[test]
    fn test_build_needs_known_parent() {
        let flexible = ConstraintSpec::new().with_width("1fr");
        let unknown = ConstraintContext::new(ParentSize::UNKNOWN, None);
        assert!(FreeSpacePool::build(
            [Sibling::new(&flexible, None)],
            Axis::Horizontal,
            &unknown,
            0.0
        )
        .is_none());
    }

    #[test]
    fn test_build_needs_auto_measurements() {
        let measured_later = ConstraintSpec::new().with_width("auto").with_auto_size(true);
        let flexible = ConstraintSpec::new().with_width("1fr");
        assert!(FreeSpacePool::build(
            [
                Sibling::new(&measured_later, None),
                Sibling::new(&flexible, None)
            ],
            Axis::Horizontal,
            &ctx(300.0, 50.0),
            0.0,
        )
        .is_none());
    }

    #[test]
    fn test_with_fraction_along_axis() {
        let pool = FreeSpacePool::new(10.0, 1.0);
        let free = WithFractionOfFreeSpace::along(Axis::Vertical, pool);
        assert_eq!(free.pool(Axis::Vertical), Some(&pool));
        assert_eq!(free.pool(Axis::Horizontal), None);
    }
}
