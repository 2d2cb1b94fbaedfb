//! Sizing sentinels and width/height presets.

/// Fill the parent container.
pub const FILL_PARENT: i32 = -1;

/// Same value and meaning as [`FILL_PARENT`].
pub const MATCH_PARENT: i32 = -1;

/// Size to content.
pub const WRAP_CONTENT: i32 = -2;

/// A width/height pair, in pixels or one of the sentinels above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl Dimensions {
    pub const FILL_FILL: Dimensions = Dimensions::new(FILL_PARENT, FILL_PARENT);
    pub const FILL_WRAP: Dimensions = Dimensions::new(FILL_PARENT, WRAP_CONTENT);
    pub const WRAP_WRAP: Dimensions = Dimensions::new(WRAP_CONTENT, WRAP_CONTENT);
    pub const WRAP_FILL: Dimensions = Dimensions::new(WRAP_CONTENT, FILL_PARENT);
    pub const MATCH_MATCH: Dimensions = Dimensions::new(MATCH_PARENT, MATCH_PARENT);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Fixed pixel size.
    pub const fn fixed(width: i32, height: i32) -> Self {
        Self::new(width, height)
    }
}

impl From<(i32, i32)> for Dimensions {
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(width, height)
    }
}
