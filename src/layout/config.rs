//! Configuration for constraint resolution

use super::types::Size;

/// Configuration options for a resolution pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolveConfig {
    /// Snap resolved rectangles to whole pixels
    pub pixel_align: bool,

    /// Viewport that fixed-position elements resolve against
    pub viewport_size: Option<Size>,
}

impl ResolveConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable pixel alignment
    pub fn with_pixel_align(mut self, pixel_align: bool) -> Self {
        self.pixel_align = pixel_align;
        self
    }

    /// Set the viewport size
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport_size = Some(Size::new(width, height));
        self
    }
}
