use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditKind {
    #[default]
    Retain,
    Delete,
    Insert,
}

impl EditKind {
    /// Single-character marker used by both renderers.
    pub fn indicator(&self) -> char {
        match self {
            EditKind::Retain => ' ',
            EditKind::Delete => '-',
            EditKind::Insert => '+',
        }
    }

    pub fn touches_old(&self) -> bool {
        matches!(self, EditKind::Retain | EditKind::Delete)
    }

    pub fn touches_new(&self) -> bool {
        matches!(self, EditKind::Retain | EditKind::Insert)
    }
}

impl Display for EditKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.indicator())
    }
}

/// A contiguous span of symbols tagged with what happens to it.
#[derive(Debug, Clone, PartialEq, Eq, Default, new)]
pub struct Edit<T> {
    pub kind: EditKind,
    pub data: Vec<T>,
}

impl<T: Clone> Edit<T> {
    pub fn retain(data: &[T]) -> Self {
        Self::new(EditKind::Retain, data.to_vec())
    }

    pub fn delete(data: &[T]) -> Self {
        Self::new(EditKind::Delete, data.to_vec())
    }

    pub fn insert(data: &[T]) -> Self {
        Self::new(EditKind::Insert, data.to_vec())
    }
}

impl<T> Edit<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// Ordered list of edits turning an old sequence into a new one.
///
/// Concatenating the data of every `Retain` and `Delete` edit yields the old
/// sequence; concatenating `Retain` and `Insert` yields the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript<T>(Vec<Edit<T>>);

// no `T: Default` bound, unlike the derive
impl<T> Default for EditScript<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> EditScript<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edit<T>> {
        self.0.iter()
    }

    pub fn edits(&self) -> &[Edit<T>] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Appends an edit, dropping it when it carries no data.
    pub fn push(&mut self, edit: Edit<T>) {
        if !edit.is_empty() {
            self.0.push(edit);
        }
    }

    pub fn extend(&mut self, other: EditScript<T>) {
        self.0.extend(other.0);
    }

    pub fn kinds(&self) -> Vec<EditKind> {
        self.0.iter().map(|edit| edit.kind).collect()
    }
}

impl<T: Clone> EditScript<T> {
    pub fn rebuild_old(&self) -> Vec<T> {
        self.rebuild(EditKind::touches_old)
    }

    pub fn rebuild_new(&self) -> Vec<T> {
        self.rebuild(EditKind::touches_new)
    }

    fn rebuild(&self, side: impl Fn(&EditKind) -> bool) -> Vec<T> {
        self.0
            .iter()
            .filter(|edit| side(&edit.kind))
            .flat_map(|edit| edit.data.iter().cloned())
            .collect()
    }
}

impl<T: Clone + PartialEq> EditScript<T> {
    pub fn is_round_trip(&self, old: &[T], new: &[T]) -> bool {
        self.rebuild_old() == old && self.rebuild_new() == new
    }

    /// True when no edit is empty and no two neighbours share a kind.
    pub fn is_normalized(&self) -> bool {
        self.0.iter().all(|edit| !edit.is_empty())
            && self.0.windows(2).all(|pair| pair[0].kind != pair[1].kind)
    }
}

impl<T> From<Vec<Edit<T>>> for EditScript<T> {
    fn from(edits: Vec<Edit<T>>) -> Self {
        Self(edits)
    }
}

impl<T> IntoIterator for EditScript<T> {
    type Item = Edit<T>;
    type IntoIter = std::vec::IntoIter<Edit<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'s, T> IntoIterator for &'s EditScript<T> {
    type Item = &'s Edit<T>;
    type IntoIter = std::slice::Iter<'s, Edit<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> FromIterator<Edit<T>> for EditScript<T> {
    fn from_iter<I: IntoIterator<Item = Edit<T>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
