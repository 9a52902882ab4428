//! Cheap preprocessing in front of the solver.
//!
//! The common prefix and suffix are peeled off first, then the remainder is
//! checked for trivial shapes (one side empty, one side nested in the other).
//! Whatever is left is cut around long shared runs until each piece has no
//! profitable anchor, and only those pieces reach the O(N·D) solver.

use crate::artifacts::diff::affix::{
    common_prefix_len, common_suffix_len, find_subslice, locate_common_substring,
};
use crate::artifacts::diff::edit::{Edit, EditScript};
use crate::artifacts::diff::myers::{DiffAlgorithm, MyersDiff};
use std::ops::Range;

enum Task {
    Diff { old: Range<usize>, new: Range<usize> },
    Retain { old: Range<usize> },
}

/// Computes a raw script: correct and minimal per piece, but not cleaned up.
pub fn optimized_diff<T: PartialEq + Clone>(old: &[T], new: &[T]) -> EditScript<T> {
    let mut script = EditScript::new();

    let prefix = common_prefix_len(old, new);
    script.push(Edit::retain(&old[..prefix]));
    let (old_rest, new_rest) = (&old[prefix..], &new[prefix..]);

    let suffix = common_suffix_len(old_rest, new_rest);
    let old_mid = &old_rest[..old_rest.len() - suffix];
    let new_mid = &new_rest[..new_rest.len() - suffix];

    script.extend(diff_trimmed(old_mid, new_mid));
    script.push(Edit::retain(&old_rest[old_rest.len() - suffix..]));

    script
}

/// Handles inputs that share no prefix or suffix.
fn diff_trimmed<T: PartialEq + Clone>(old: &[T], new: &[T]) -> EditScript<T> {
    let mut script = EditScript::new();

    if old.is_empty() || new.is_empty() {
        script.push(Edit::delete(old));
        script.push(Edit::insert(new));
        return script;
    }

    if let Some(at) = find_subslice(old, new) {
        debug_log!("splitter: new side nested in old at {at}");
        script.push(Edit::delete(&old[..at]));
        script.push(Edit::retain(&old[at..at + new.len()]));
        script.push(Edit::delete(&old[at + new.len()..]));
        return script;
    }
    if let Some(at) = find_subslice(new, old) {
        debug_log!("splitter: old side nested in new at {at}");
        script.push(Edit::insert(&new[..at]));
        script.push(Edit::retain(&new[at..at + old.len()]));
        script.push(Edit::insert(&new[at + old.len()..]));
        return script;
    }

    split_and_solve(old, new)
}

/// Divide and conquer on an explicit stack so adversarial inputs cannot
/// exhaust the call stack.
fn split_and_solve<T: PartialEq + Clone>(old: &[T], new: &[T]) -> EditScript<T> {
    let mut script = EditScript::new();
    let mut stack = vec![Task::Diff {
        old: 0..old.len(),
        new: 0..new.len(),
    }];

    while let Some(task) = stack.pop() {
        let (old_range, new_range) = match task {
            Task::Retain { old: range } => {
                script.push(Edit::retain(&old[range]));
                continue;
            }
            Task::Diff { old, new } => (old, new),
        };
        let (old_part, new_part) = (&old[old_range.clone()], &new[new_range.clone()]);

        if old_part.is_empty() || new_part.is_empty() {
            script.push(Edit::delete(old_part));
            script.push(Edit::insert(new_part));
            continue;
        }

        match locate_common_substring(old_part, new_part) {
            Some(run) => {
                debug_log!(
                    "splitter: anchor of {} at old {} / new {}",
                    run.len,
                    old_range.start + run.a_start,
                    new_range.start + run.b_start
                );
                let old_anchor = old_range.start + run.a_start;
                let new_anchor = new_range.start + run.b_start;

                // pushed in reverse so the left half is processed first
                stack.push(Task::Diff {
                    old: old_anchor + run.len..old_range.end,
                    new: new_anchor + run.len..new_range.end,
                });
                stack.push(Task::Retain {
                    old: old_anchor..old_anchor + run.len,
                });
                stack.push(Task::Diff {
                    old: old_range.start..old_anchor,
                    new: new_range.start..new_anchor,
                });
            }
            None => {
                debug_log!(
                    "splitter: solving {} x {} symbols",
                    old_part.len(),
                    new_part.len()
                );
                script.extend(MyersDiff::new(old_part, new_part).diff());
            }
        }
    }

    script
}
