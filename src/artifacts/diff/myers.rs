//! Greedy shortest-edit-script search over the edit graph.
//!
//! For every depth `d` (edits spent so far) and diagonal `k = x - y` the solver
//! records the furthest `x` reachable with exactly `d` edits. Each depth's
//! frontier is kept so the path can be walked back from the bottom-right corner
//! once some diagonal reaches it.

use crate::artifacts::diff::edit::{Edit, EditKind, EditScript};
use derive_new::new;
use std::ops::{Index, IndexMut};

pub trait DiffAlgorithm<'d, T> {
    type Trace;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self, trace: &Self::Trace) -> EditScript<T>;

    fn diff(&self) -> EditScript<T> {
        let trace = self.compute_shortest_edit();
        self.backtrack(&trace)
    }
}

/// Furthest-reaching `x` per diagonal, addressable by a negative `k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    offset: isize,
    v: Vec<isize>,
}

impl Frontier {
    fn new(max_edits: usize) -> Self {
        // one spare slot on each side so k = ±(d + 1) can be read at d = max
        Self {
            offset: max_edits as isize + 1,
            v: vec![0; 2 * max_edits + 3],
        }
    }

    /// Whether the step onto diagonal `k` at depth `d` comes from `k + 1`.
    fn comes_from_insert(&self, k: isize, d: isize) -> bool {
        k == -d || (k != d && self[k + 1] > self[k - 1])
    }
}

impl Index<isize> for Frontier {
    type Output = isize;

    fn index(&self, k: isize) -> &Self::Output {
        &self.v[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut Self::Output {
        &mut self.v[(k + self.offset) as usize]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    old: &'d [T],
    new: &'d [T],
}

impl<'d, T: PartialEq + Clone> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    /// Frontier snapshot after each depth; the last entry reached the corner.
    type Trace = Vec<Frontier>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m) = (self.old.len() as isize, self.new.len() as isize);
        let max_edits = self.old.len() + self.new.len();

        let mut frontier = Frontier::new(max_edits);
        let mut trace = Vec::new();

        for d in 0..=max_edits as isize {
            let mut reached_corner = false;

            for k in (-d..=d).step_by(2) {
                let mut x = if frontier.comes_from_insert(k, d) {
                    frontier[k + 1]
                } else {
                    frontier[k - 1] + 1
                };
                let mut y = x - k;

                debug_assert!(x >= k, "furthest x on diagonal {k} is behind the diagonal");

                while x < n && y < m && self.old[x as usize] == self.new[y as usize] {
                    x += 1;
                    y += 1;
                }

                frontier[k] = x;
                if x >= n && y >= m {
                    reached_corner = true;
                    break;
                }
            }

            trace.push(frontier.clone());
            if reached_corner {
                break;
            }
        }

        trace
    }

    fn backtrack(&self, trace: &Self::Trace) -> EditScript<T> {
        let (mut x, mut y) = (self.old.len() as isize, self.new.len() as isize);
        let mut edits = Vec::with_capacity(trace.len() * 2);

        for (d, frontier) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;

            if d == 0 {
                // the opening snake runs straight from the origin
                debug_assert_eq!(k, 0, "depth zero lies on the main diagonal");
                if x > 0 {
                    edits.push(Edit::retain(&self.old[..x as usize]));
                }
                break;
            }

            let (kind, prev_k) = if frontier.comes_from_insert(k, d) {
                (EditKind::Insert, k + 1)
            } else {
                (EditKind::Delete, k - 1)
            };
            let prev_x = frontier[prev_k];
            let prev_y = prev_x - prev_k;

            let snake_end = x;
            while x > prev_x && y > prev_y {
                x -= 1;
                y -= 1;
            }
            if x < snake_end {
                edits.push(Edit::retain(&self.old[x as usize..snake_end as usize]));
            }

            match kind {
                EditKind::Insert => {
                    let at = prev_y as usize;
                    edits.push(Edit::insert(&self.new[at..at + 1]));
                }
                _ => {
                    let at = prev_x as usize;
                    edits.push(Edit::delete(&self.old[at..at + 1]));
                }
            }

            (x, y) = (prev_x, prev_y);
        }

        edits.reverse();
        EditScript::from(edits)
    }
}

/// Runs the solver alone: no trimming, splitting or cleanup.
pub fn raw_solve<T: PartialEq + Clone>(old: &[T], new: &[T]) -> EditScript<T> {
    if old.is_empty() && new.is_empty() {
        return EditScript::new();
    }
    MyersDiff::new(old, new).diff()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::render::inline::render_inline;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn solve(old: &str, new: &str) -> String {
        render_inline(&raw_solve(&chars(old), &chars(new)))
    }

    #[rstest]
    #[case("", "", r#""#)]
    #[case("", "x", r#"+"x""#)]
    #[case("x", "", r#"-"x""#)]
    #[case("x", "x", r#" "x""#)]
    #[case("x", "xx", r#" "x"+"x""#)]
    #[case("xx", "x", r#" "x"-"x""#)]
    #[case("xx", "xy", r#" "x"-"x"+"y""#)]
    #[case("xy", "xx", r#" "x"-"y"+"x""#)]
    #[case("xx", "yx", r#"+"y" "x"-"x""#)]
    #[case("yx", "xx", r#"-"y" "x"+"x""#)]
    #[case("xy", "xz", r#" "x"-"y"+"z""#)]
    #[case("meee", "eeek", r#"-"m" "eee"+"k""#)]
    #[case("xyzz", "ikzz", r#"-"x"-"y"+"i"+"k" "zz""#)]
    fn solves_small_inputs(#[case] old: &str, #[case] new: &str, #[case] expected: &str) {
        assert_eq!(solve(old, new), expected);
    }

    #[rstest]
    #[case(
        "The dog in the hat.",
        "The cat in the hat.",
        r#" "The "-"d"-"o"-"g"+"c"+"a"+"t" " in the hat.""#
    )]
    #[case(
        "The cat in the hat.",
        "The furry cat in the hat.",
        r#" "The "+"f"+"u"+"r"+"r"+"y"+" " "cat in the hat.""#
    )]
    #[case(
        "The cat in the hat.",
        "The cat.",
        r#" "The cat"-" "-"i"-"n"-" "-"t"-"h"-"e"-" "-"h"-"a"-"t" ".""#
    )]
    fn emits_single_symbol_edits_between_snakes(
        #[case] old: &str,
        #[case] new: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(solve(old, new), expected);
    }

    #[test]
    fn textbook_example_has_edit_distance_five() {
        let (old, new) = (chars("abcabba"), chars("cbabac"));
        let myers = MyersDiff::new(&old, &new);

        let trace = myers.compute_shortest_edit();
        let script = myers.backtrack(&trace);

        assert_eq!(trace.len() - 1, 5);
        assert!(script.is_round_trip(&old, &new));
        let edits = script
            .iter()
            .filter(|edit| edit.kind != EditKind::Retain)
            .count();
        assert_eq!(edits, 5);
    }

    #[test]
    fn solves_arbitrary_tokens() {
        let old = vec!["line1", "line2", "line3", "line4"];
        let new = vec!["line2", "line3_modified", "line4", "line5"];

        let script = raw_solve(&old, &new);

        assert!(script.is_round_trip(&old, &new));
        assert_eq!(
            script.kinds(),
            vec![
                EditKind::Delete,
                EditKind::Retain,
                EditKind::Delete,
                EditKind::Insert,
                EditKind::Retain,
                EditKind::Insert,
            ]
        );
    }
}
