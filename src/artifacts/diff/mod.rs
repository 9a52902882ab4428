//! Shortest-edit-script engine
//!
//! This module turns two symbol sequences into the minimal list of
//! retain/delete/insert spans that rewrites one into the other:
//!
//! - `edit`: `Edit`, `EditKind` and `EditScript`
//! - `affix`: prefix/suffix/substring helpers
//! - `splitter`: affix trimming, trivial shapes and divide and conquer
//! - `myers`: Myers' O(N·D) solver
//! - `cleanup`: merge + shift post-processing
//! - `differ`: `Differ`, the text-facing entry point
//!
//! Symbols only need `PartialEq + Clone`; text is diffed per `char` and the
//! line renderer diffs whole lines through interned ids.

pub mod affix;
pub mod cleanup;
pub mod differ;
pub mod edit;
pub(crate) mod invariant;
pub mod myers;
pub mod splitter;

pub use differ::Differ;
pub use edit::{Edit, EditKind, EditScript};
pub use myers::raw_solve;

/// Full pipeline: trim, split, solve, then clean up.
pub fn diff<T: PartialEq + Clone>(old: &[T], new: &[T]) -> EditScript<T> {
    let raw = splitter::optimized_diff(old, new);
    invariant::check_round_trip("optimized diff", &raw, old, new);

    let cleaned = cleanup::merge_shift_cleanup(raw);
    invariant::check_round_trip("cleanup", &cleaned, old, new);
    invariant::check_normalized("cleanup", &cleaned);

    cleaned
}
