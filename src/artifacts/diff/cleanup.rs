//! Post-processing that makes a raw script readable without changing what it
//! reconstructs.
//!
//! ## Merge
//!
//! Deletes and inserts between two retains are coalesced into at most one
//! delete followed by one insert. When both are present, their shared prefix
//! joins the retain before them and their shared suffix joins the retain after
//! them. Adjacent retains are fused.
//!
//! ## Shift
//!
//! A lone delete or insert sitting between two retains slides across one of its
//! neighbours when the data allows it:
//!
//! ```text
//!  "A"+"xA" "B"   ->  +"Ax" "AB"     (edit ends with the retain before it)
//!  "A"+"Bx" "B"   ->   "AB"+"xB"     (edit starts with the retain after it)
//! ```
//!
//! Every shift removes one retain boundary, so repeating merge + shift until no
//! shift fires always terminates.

use crate::artifacts::diff::affix::{common_prefix_len, common_suffix_len, has_prefix, has_suffix};
use crate::artifacts::diff::edit::{Edit, EditKind, EditScript};

pub fn merge_shift_cleanup<T: PartialEq + Clone>(script: EditScript<T>) -> EditScript<T> {
    let mut edits: Vec<Edit<T>> = script
        .into_iter()
        .filter(|edit| !edit.is_empty())
        .collect();
    loop {
        edits = merge(edits);
        if edits.len() < 3 {
            return EditScript::from(edits);
        }

        let (shifted, shifts) = shift(edits);
        edits = shifted;

        debug_log!("cleanup: shifted {shifts} edit(s)");
        if shifts == 0 {
            return EditScript::from(edits);
        }
    }
}

fn merge<T: PartialEq + Clone>(edits: Vec<Edit<T>>) -> Vec<Edit<T>> {
    let mut result: Vec<Edit<T>> = Vec::with_capacity(edits.len() + 2);
    let mut to_delete: Vec<T> = Vec::new();
    let mut to_insert: Vec<T> = Vec::new();

    let needs_head = edits.first().is_some_and(|edit| edit.kind != EditKind::Retain);
    let needs_tail = edits.last().is_some_and(|edit| edit.kind != EditKind::Retain);

    let head = needs_head.then(|| Edit::new(EditKind::Retain, Vec::new()));
    let tail = needs_tail.then(|| Edit::new(EditKind::Retain, Vec::new()));

    for edit in head.into_iter().chain(edits).chain(tail) {
        match edit.kind {
            EditKind::Delete => to_delete.extend(edit.data),
            EditKind::Insert => to_insert.extend(edit.data),
            EditKind::Retain => {
                let mut retain = edit;

                if !to_delete.is_empty() && !to_insert.is_empty() {
                    let prefix = common_prefix_len(&to_insert, &to_delete);
                    // the head sentinel guarantees a retain precedes every run
                    if let Some(before) = result.last_mut().filter(|_| prefix > 0) {
                        debug_assert_eq!(before.kind, EditKind::Retain);
                        before.data.extend(to_delete.drain(..prefix));
                        to_insert.drain(..prefix);
                    }

                    let suffix = common_suffix_len(&to_insert, &to_delete);
                    if suffix > 0 {
                        let shared = to_delete.split_off(to_delete.len() - suffix);
                        to_insert.truncate(to_insert.len() - suffix);
                        prepend(&mut retain.data, &shared);
                    }
                }

                if !to_delete.is_empty() {
                    result.push(Edit::new(EditKind::Delete, std::mem::take(&mut to_delete)));
                }
                if !to_insert.is_empty() {
                    result.push(Edit::new(EditKind::Insert, std::mem::take(&mut to_insert)));
                }

                match result.last_mut() {
                    Some(last) if last.kind == EditKind::Retain => last.data.extend(retain.data),
                    _ => result.push(retain),
                }
            }
        }
    }

    result.retain(|edit| !edit.is_empty());
    result
}

fn shift<T: PartialEq + Clone>(mut edits: Vec<Edit<T>>) -> (Vec<Edit<T>>, usize) {
    if edits.len() < 3 {
        return (edits, 0);
    }

    let last = edits.len() - 1;
    let mut shifts = 0usize;
    let mut result: Vec<Edit<T>> = Vec::with_capacity(edits.len());
    result.push(edits[0].clone());

    for i in 1..last {
        let kind = edits[i].kind;
        let data = std::mem::take(&mut edits[i].data);
        let prev_at = result.len() - 1;
        let prev = &mut result[prev_at];
        let next = &mut edits[i + 1];

        if prev.kind == EditKind::Retain && next.kind == EditKind::Retain {
            debug_assert_ne!(kind, EditKind::Retain, "merged retains never touch");

            if has_suffix(&data, &prev.data) {
                // "A"+"xA" "B" -> +"Ax" "AB"
                prepend(&mut next.data, &prev.data);
                prev.data.extend_from_slice(&data[..data.len() - prev.data.len()]);
                prev.kind = kind;
                shifts += 1;
                continue;
            }
            if has_prefix(&data, &next.data) {
                // "A"+"Bx" "B" -> "AB"+"xB"
                prev.data.extend_from_slice(&next.data);
                let moved = data[next.data.len()..].to_vec();
                prepend(&mut next.data, &moved);
                next.kind = kind;
                shifts += 1;
                continue;
            }
        }

        result.push(Edit::new(kind, data));
    }

    result.push(edits[last].clone());
    (result, shifts)
}

fn prepend<T: Clone>(target: &mut Vec<T>, front: &[T]) {
    let mut joined = Vec::with_capacity(front.len() + target.len());
    joined.extend_from_slice(front);
    joined.append(target);
    *target = joined;
}
