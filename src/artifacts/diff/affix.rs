//! Sequence helpers shared by the trimmer, the splitter and the cleanup pass.

/// Position of a run shared by two sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonRun {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

pub fn common_prefix_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

pub fn common_suffix_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Like `starts_with`, but an empty needle never matches.
pub fn has_prefix<T: PartialEq>(haystack: &[T], needle: &[T]) -> bool {
    !needle.is_empty() && haystack.starts_with(needle)
}

/// Like `ends_with`, but an empty needle never matches.
pub fn has_suffix<T: PartialEq>(haystack: &[T], needle: &[T]) -> bool {
    !needle.is_empty() && haystack.ends_with(needle)
}

/// Index of the first occurrence of `needle` in `haystack`.
pub fn find_subslice<T: PartialEq>(haystack: &[T], needle: &[T]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Longest run shared by `a` and `b` that is worth splitting on.
///
/// The longer input is the search space and the shorter one the pattern. A run
/// only qualifies when it covers at least half (rounded up) of the shorter
/// input. Ties go to the earliest start in the longer input, then the earliest
/// start in the shorter one, so both starts are also first occurrences.
pub fn locate_common_substring<T: PartialEq>(a: &[T], b: &[T]) -> Option<CommonRun> {
    let swapped = a.len() < b.len();
    let (long, short) = if swapped { (b, a) } else { (a, b) };

    if short.is_empty() {
        return None;
    }
    let min_len = short.len().div_ceil(2);

    // lengths[j + 1] is the length of the common run ending at long[i], short[j]
    let mut lengths = vec![0usize; short.len() + 1];
    let mut best: Option<CommonRun> = None;

    for (i, long_symbol) in long.iter().enumerate() {
        for j in (0..short.len()).rev() {
            lengths[j + 1] = if *long_symbol == short[j] {
                lengths[j] + 1
            } else {
                0
            };

            let len = lengths[j + 1];
            if len < min_len {
                continue;
            }
            let candidate = CommonRun {
                a_start: i + 1 - len,
                b_start: j + 1 - len,
                len,
            };
            let is_better = match best {
                None => true,
                Some(current) => {
                    len > current.len
                        || (len == current.len
                            && (candidate.a_start, candidate.b_start)
                                < (current.a_start, current.b_start))
                }
            };
            if is_better {
                best = Some(candidate);
            }
        }
    }

    best.map(|run| {
        if swapped {
            CommonRun {
                a_start: run.b_start,
                b_start: run.a_start,
                len: run.len,
            }
        } else {
            run
        }
    })
}

/// Symbols of the run picked by [`locate_common_substring`], or an empty slice.
pub fn find_common_substring<'s, T: PartialEq>(a: &'s [T], b: &'s [T]) -> &'s [T] {
    match locate_common_substring(a, b) {
        Some(run) => &a[run.a_start..run.a_start + run.len],
        None => &a[..0],
    }
}
