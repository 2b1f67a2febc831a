use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatSide {
    Left,
    Right,
}

impl FloatSide {
    /// Even positions float left, odd positions float right.
    pub fn alternating(position: usize) -> Self {
        if position % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for FloatSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One unit of the blog-detail body, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderBlock {
    CoverImage {
        url: String,
        alt: Option<String>,
    },
    Heading {
        text: String,
    },
    /// Full-width section image (narrow viewport).
    Image {
        url: String,
    },
    /// Section image floated beside its own paragraphs (wide viewport).
    FloatedImage {
        url: String,
        side: FloatSide,
        paragraphs: Vec<String>,
    },
    Paragraph {
        text: String,
    },
    CallToAction {
        text: Option<String>,
        button_label: String,
    },
}

impl RenderBlock {
    pub fn is_call_to_action(&self) -> bool {
        matches!(self, Self::CallToAction { .. })
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Self::Heading { .. })
    }

    pub fn float_side(&self) -> Option<FloatSide> {
        match self {
            Self::FloatedImage { side, .. } => Some(*side),
            _ => None,
        }
    }
}
