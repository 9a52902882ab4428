//! Internal consistency checks.
//!
//! A failed check is a defect in the engine, never a property of the input, so
//! it panics instead of returning an error. The checks cost a full rebuild of
//! both sides and only run in debug builds or with `strict_invariants`.

use crate::artifacts::diff::edit::EditScript;

pub const ENABLED: bool = cfg!(any(debug_assertions, feature = "strict_invariants"));

pub fn check_round_trip<T: PartialEq + Clone>(
    stage: &str,
    script: &EditScript<T>,
    old: &[T],
    new: &[T],
) {
    if ENABLED {
        assert!(
            script.rebuild_old() == old,
            "{stage}: retained and deleted data no longer spell the old input"
        );
        assert!(
            script.rebuild_new() == new,
            "{stage}: retained and inserted data no longer spell the new input"
        );
    }
}

pub fn check_normalized<T: PartialEq + Clone>(stage: &str, script: &EditScript<T>) {
    if ENABLED {
        assert!(
            script.is_normalized(),
            "{stage}: script holds an empty edit or two neighbours of the same kind"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::edit::Edit;

    #[test]
    #[cfg_attr(not(any(debug_assertions, feature = "strict_invariants")), ignore)]
    #[should_panic(expected = "old input")]
    fn broken_round_trip_panics() {
        let script = EditScript::from(vec![Edit::retain(&['a'])]);

        check_round_trip("test", &script, &['b'], &['a']);
    }

    #[test]
    #[cfg_attr(not(any(debug_assertions, feature = "strict_invariants")), ignore)]
    #[should_panic(expected = "same kind")]
    fn unmerged_script_panics() {
        let script = EditScript::from(vec![Edit::delete(&['a']), Edit::delete(&['b'])]);

        check_normalized("test", &script);
    }
}
