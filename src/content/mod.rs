//! Content module - markdown rendering and code highlighting

mod highlight;
mod markdown;

pub use highlight::{CodeHighlighter, SyntectHighlighter};
pub use markdown::{CmarkRenderer, MarkdownRenderer};
