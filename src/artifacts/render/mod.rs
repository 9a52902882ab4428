//! Text forms of an edit script
//!
//! - `inline`: one line of quoted spans, used as a compact golden format
//! - `lines`: one output line per input line, prefixed with ` `, `-` or `+`
//! - `symbol_table`: line interning used by the line renderer

pub mod inline;
pub mod lines;
pub mod symbol_table;

pub use inline::render_inline;
pub use lines::{LineDiff, render_lines};
