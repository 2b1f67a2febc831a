//! Blog-detail body layout: turns an article into an ordered list of render
//! blocks for a given viewport class.

mod block;
mod viewport;
mod walk;

pub use block::{FloatSide, RenderBlock};
pub use viewport::{LayoutContext, NARROW_MAX_WIDTH, STACKED_MAX_WIDTH};
pub use walk::{layout_article, layout_sections};
