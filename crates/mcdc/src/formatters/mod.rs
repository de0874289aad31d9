//! Coverage Report Formatters
//!
//! Plain-text (the classic MC/DC table layout) and JSON renderers for a
//! [`McdcReport`](crate::McdcReport).

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
