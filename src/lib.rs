//! Frame Constraints - declarative constraint layout for visual elements
//!
//! This library resolves per-axis pins, sizes and clamps into pixel
//! rectangles, given the parent size and any free space shared between
//! siblings.
//!
//! # Example
//!
//! ```rust
//! use frame_constraints::{resolve, ConstraintContext, ConstraintSpec, Rect, Size};
//!
//! let spec = ConstraintSpec::new()
//!     .with_left(10)
//!     .with_right(10)
//!     .with_center_y("50%")
//!     .with_height(40);
//! let context = ConstraintContext::new(Size::new(320.0, 200.0), None);
//!
//! let rect = resolve(&spec, &context, None, None, false);
//! assert_eq!(rect, Some(Rect::new(10.0, 80.0, 300.0, 40.0)));
//! ```

pub mod error;
pub mod layout;
pub mod scene;

pub use error::SceneError;
pub use layout::{
    resolve, resolve_size, Axis, ConstraintContext, ConstraintSpec, Dimension, DimensionType,
    DimensionValue, FreeSpacePool, LayoutProperties, ParentSize, ParentSizeState, Rect,
    ResolveConfig, Sibling, Size, WithFractionOfFreeSpace,
};
pub use scene::{render_report, NodeOutcome, ResolvedNode, Scene};

/// Load a TOML scene and resolve it into a report with default configuration
///
/// # Example
///
/// ```rust
/// use frame_constraints::render;
///
/// let report = render(r#"
///     width = 320
///     height = 200
///
///     [[nodes]]
///     id = "bar"
///     left = 10
///     right = 10
///     height = 40
/// "#).unwrap();
///
/// assert_eq!(report, "[bar] x=10.0 y=0.0 w=300.0 h=40.0\n");
/// ```
pub fn render(source: &str) -> Result<String, SceneError> {
    render_with_config(source, &ResolveConfig::default())
}

/// Load a TOML scene and resolve it into a report with custom configuration
///
/// # Example
///
/// ```rust
/// use frame_constraints::{render_with_config, ResolveConfig};
///
/// let config = ResolveConfig::new().with_pixel_align(true);
/// let report = render_with_config(r#"
///     width = 300
///     height = 100
///
///     [[nodes]]
///     id = "third"
///     width = "33.3%"
///     height = 10
/// "#, &config).unwrap();
///
/// assert_eq!(report, "[third] x=0.0 y=0.0 w=100.0 h=10.0\n");
/// ```
pub fn render_with_config(source: &str, config: &ResolveConfig) -> Result<String, SceneError> {
    let scene = Scene::from_str(source)?;
    Ok(render_report(&scene.resolve(config)))
}
