//! Components that sit around the diff engine
//!
//! - `session`: Output sink, operand loading, colour and paging decisions
//! - `snapshot`: Expected-vs-actual comparison that reports mismatches as a line diff

pub mod session;
pub mod snapshot;
