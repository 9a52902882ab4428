//! Plumbing commands (machine-oriented output)
//!
//! ## Commands
//!
//! - `inline`: Print the quoted inline form of a character diff

pub mod inline;
