//! Porcelain commands (human-oriented output)
//!
//! ## Commands
//!
//! - `lines`: Show a coloured line-by-line diff
//! - `check`: Compare actual text against an expected snapshot

pub mod check;
pub mod lines;
