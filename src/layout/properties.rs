//! Shorthand layout properties
//!
//! [`LayoutProperties`] is the authoring-side shape: CSS-like edges, a single
//! `size` for square elements and a `center` switch instead of explicit
//! anchors. [`LayoutProperties::into_spec`] lowers it onto a
//! [`ConstraintSpec`].

use serde::Deserialize;

use super::dimension::DimensionValue;
use super::spec::ConstraintSpec;

/// Which axes `center` applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CenterAxis {
    X,
    Y,
}

/// `center = "x"`, `center = "y"` or `center = true`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Center {
    Both(bool),
    Axis(CenterAxis),
}

impl Center {
    fn centers_x(self) -> bool {
        matches!(self, Center::Both(true) | Center::Axis(CenterAxis::X))
    }

    fn centers_y(self) -> bool {
        matches!(self, Center::Both(true) | Center::Axis(CenterAxis::Y))
    }
}

/// Authoring-side constraint properties
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutProperties {
    pub top: Option<DimensionValue>,
    pub right: Option<DimensionValue>,
    pub bottom: Option<DimensionValue>,
    pub left: Option<DimensionValue>,
    pub center: Option<Center>,
    pub width: Option<DimensionValue>,
    pub height: Option<DimensionValue>,
    /// Used for whichever of width/height is not set
    pub size: Option<DimensionValue>,
    pub min_width: Option<DimensionValue>,
    pub max_width: Option<DimensionValue>,
    pub min_height: Option<DimensionValue>,
    pub max_height: Option<DimensionValue>,
    pub aspect_ratio: Option<f64>,
    pub auto_size: bool,
    pub position_fixed: bool,
    /// Use constraint layout for this element at all
    pub enabled: bool,
    pub intrinsic_width: Option<f64>,
    pub intrinsic_height: Option<f64>,
}

impl Default for LayoutProperties {
    fn default() -> Self {
        Self {
            top: None,
            right: None,
            bottom: None,
            left: None,
            center: None,
            width: None,
            height: None,
            size: None,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
            aspect_ratio: None,
            auto_size: false,
            position_fixed: false,
            enabled: true,
            intrinsic_width: None,
            intrinsic_height: None,
        }
    }
}

/// Whether the properties opt into constraint layout
pub fn constraints_enabled(props: &LayoutProperties) -> bool {
    props.enabled
}

impl LayoutProperties {
    /// Lower onto a [`ConstraintSpec`]
    pub fn into_spec(self) -> ConstraintSpec {
        let half = || Some(DimensionValue::from("50%"));
        let center = self.center.unwrap_or(Center::Both(false));

        ConstraintSpec {
            left: self.left,
            right: self.right,
            top: self.top,
            bottom: self.bottom,
            center_x: if center.centers_x() { half() } else { None },
            center_y: if center.centers_y() { half() } else { None },
            width: self.width.or_else(|| self.size.clone()),
            height: self.height.or(self.size),
            aspect_ratio: self.aspect_ratio,
            auto_size: self.auto_size,
            min_width: self.min_width,
            max_width: self.max_width,
            min_height: self.min_height,
            max_height: self.max_height,
            intrinsic_width: self.intrinsic_width,
            intrinsic_height: self.intrinsic_height,
            position_fixed: self.position_fixed,
        }
    }
}
