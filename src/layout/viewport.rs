/// Widths below this render section images full width above their text.
pub const NARROW_MAX_WIDTH: u32 = 600;
/// Widths below this stack the sidebar under the article.
pub const STACKED_MAX_WIDTH: u32 = 1200;

/// Viewport classification computed once per observation and handed to the
/// layout walk by value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutContext {
    pub narrow: bool,
    pub stacked_sidebar: bool,
}

impl LayoutContext {
    pub const WIDE: Self = Self {
        narrow: false,
        stacked_sidebar: false,
    };

    pub const NARROW: Self = Self {
        narrow: true,
        stacked_sidebar: true,
    };

    pub fn from_width(px: u32) -> Self {
        Self {
            narrow: px < NARROW_MAX_WIDTH,
            stacked_sidebar: px < STACKED_MAX_WIDTH,
        }
    }

    /// No observation means the wide layout.
    pub fn from_observation(width: Option<u32>) -> Self {
        width.map(Self::from_width).unwrap_or_default()
    }
}
