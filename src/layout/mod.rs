//! Constraint layout engine
//!
//! This module resolves declarative per-axis constraints into pixel
//! rectangles. It classifies raw dimension values, distributes free space
//! across sibling groups and solves position and size against an explicit
//! parent/viewport context.

pub mod config;
pub mod context;
pub mod dimension;
pub mod free_space;
pub mod properties;
pub mod resolver;
pub mod spec;
pub mod types;

pub use config::ResolveConfig;
pub use context::{ConstraintContext, ParentSize, ParentSizeState};
pub use dimension::{
    classify, fraction, is_fraction_dimension, Dimension, DimensionType, DimensionValue,
};
pub use free_space::{FreeSpacePool, Sibling, WithFractionOfFreeSpace};
pub use properties::{constraints_enabled, Center, CenterAxis, LayoutProperties};
pub use resolver::{resolve, resolve_size};
pub use spec::{AxisPins, AxisSpec, ConstraintSpec};
pub use types::*;
