//! Parent size context threaded down the element tree
//!
//! Each element reads the [`ConstraintContext`] handed to it by its parent and
//! derives the one it hands to its own children. The value is passed
//! explicitly, so resolving unrelated subtrees never shares state.

use super::types::Size;

/// Why no concrete parent size is available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentSizeState {
    /// Not measured yet; anything that needs it is indeterminate
    Unknown,
    /// Constraint resolution is off for the whole subtree
    Disabled,
    /// Off for the immediate children only; grandchildren may resolve again
    DisabledForCurrentLevel,
}

/// The parent's pixel size, or the reason it is missing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParentSize {
    Size(Size),
    State(ParentSizeState),
}

impl ParentSize {
    pub const UNKNOWN: ParentSize = ParentSize::State(ParentSizeState::Unknown);
    pub const DISABLED: ParentSize = ParentSize::State(ParentSizeState::Disabled);
    pub const DISABLED_FOR_CURRENT_LEVEL: ParentSize =
        ParentSize::State(ParentSizeState::DisabledForCurrentLevel);

    pub fn is_size(&self) -> bool {
        matches!(self, ParentSize::Size(_))
    }

    /// The concrete size, if any. Every state reads as `None`.
    pub fn size(&self) -> Option<Size> {
        match self {
            ParentSize::Size(size) => Some(*size),
            ParentSize::State(_) => None,
        }
    }

    /// Whether children of this context take part in constraint resolution
    pub fn is_enabled(&self) -> bool {
        !matches!(
            self,
            ParentSize::State(ParentSizeState::Disabled | ParentSizeState::DisabledForCurrentLevel)
        )
    }
}

impl From<Size> for ParentSize {
    fn from(size: Size) -> Self {
        ParentSize::Size(size)
    }
}

impl From<Option<Size>> for ParentSize {
    fn from(size: Option<Size>) -> Self {
        size.map_or(ParentSize::UNKNOWN, ParentSize::Size)
    }
}

/// Ambient sizes an element resolves against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintContext {
    pub parent_size: ParentSize,
    pub viewport_size: Option<Size>,
}

impl ConstraintContext {
    pub fn new(parent_size: impl Into<ParentSize>, viewport_size: Option<Size>) -> Self {
        Self {
            parent_size: parent_size.into(),
            viewport_size,
        }
    }

    /// Context for a root whose size is not known yet
    pub fn unknown() -> Self {
        Self::new(ParentSize::UNKNOWN, None)
    }

    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport_size = Some(viewport);
        self
    }

    /// Context an element provides to its children.
    ///
    /// A disabled subtree stays disabled. Otherwise the element's own size
    /// becomes the children's parent size, or `Unknown` if it has none.
    pub fn for_children(&self, own_size: Option<Size>) -> ConstraintContext {
        let parent_size = match self.parent_size {
            ParentSize::State(ParentSizeState::Disabled) => ParentSize::DISABLED,
            _ => ParentSize::from(own_size),
        };
        ConstraintContext {
            parent_size,
            viewport_size: self.viewport_size,
        }
    }

    /// Context that switches resolution off for the next level only
    pub fn for_children_disabled_level(&self) -> ConstraintContext {
        let parent_size = match self.parent_size {
            ParentSize::State(ParentSizeState::Disabled) => ParentSize::DISABLED,
            _ => ParentSize::DISABLED_FOR_CURRENT_LEVEL,
        };
        ConstraintContext {
            parent_size,
            viewport_size: self.viewport_size,
        }
    }

    /// The size pins and percentages are measured against.
    ///
    /// Fixed-position elements use the viewport; everything else uses the
    /// parent. `None` means the reference is not known.
    pub fn reference_size(&self, position_fixed: bool) -> Option<Size> {
        if position_fixed {
            self.viewport_size
        } else {
            self.parent_size.size()
        }
    }
}

impl Default for ConstraintContext {
    fn default() -> Self {
        Self::unknown()
    }
}
