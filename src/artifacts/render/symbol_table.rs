use std::collections::HashMap;
use std::fmt::Display;

/// Stand-in symbol for one distinct line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(usize);

impl LineId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Two-way mapping between lines and ids, shared by both sides of one diff.
///
/// Ids are issued in first-seen order, starting at zero, so an id is always a
/// valid index into the reverse table.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable<'t> {
    ids: HashMap<&'t str, LineId>,
    lines: Vec<&'t str>,
}

impl<'t> SymbolTable<'t> {
    pub fn intern(&mut self, line: &'t str) -> LineId {
        if let Some(&id) = self.ids.get(line) {
            return id;
        }

        let id = LineId(self.lines.len());
        self.ids.insert(line, id);
        self.lines.push(line);
        id
    }

    /// Splits `text` on `'\n'` and interns every piece.
    pub fn encode(&mut self, text: &'t str) -> Vec<LineId> {
        text.split('\n').map(|line| self.intern(line)).collect()
    }

    pub fn line(&self, id: LineId) -> Option<&'t str> {
        self.lines.get(id.index()).copied()
    }

    /// Line behind an id issued by this table.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from another table.
    pub fn resolve(&self, id: LineId) -> &'t str {
        self.lines[id.index()]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
