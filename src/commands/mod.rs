//! Command implementations
//!
//! Commands are split the way the output is meant to be consumed:
//!
//! - `plumbing`: Machine-oriented output (the inline golden form)
//! - `porcelain`: Human-oriented output (coloured line diffs, snapshot checks)
//!
//! Every command is an `impl Session` block so it writes through the session's
//! writer and reads operands the way the session was configured.

pub mod plumbing;
pub mod porcelain;
