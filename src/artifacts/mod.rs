//! Diff engine and its output forms
//!
//! - `core`: Shared utilities (pager wrapper, etc.)
//! - `diff`: Shortest edit scripts (Myers' diff) with trimming, splitting and cleanup
//! - `render`: Inline and line-oriented renderers

pub mod core;
pub mod diff;
pub mod render;
