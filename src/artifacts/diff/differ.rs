use crate::artifacts::diff::edit::{Edit, EditScript};
use crate::artifacts::render::inline::render_inline;
use crate::artifacts::render::lines::LineDiff;
use crate::artifacts::render::symbol_table::LineId;
use std::fmt::Display;

/// Text-facing entry point: owns both inputs and the last computed script.
///
/// A `Differ` can be reloaded with [`Differ::reset_with`] to diff another pair
/// without giving back its buffers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Differ {
    old_text: String,
    new_text: String,
    old: Vec<char>,
    new: Vec<char>,
    edits: EditScript<char>,
    line_edits: EditScript<LineId>,
}

impl Differ {
    pub fn new(old: &str, new: &str) -> Self {
        let mut differ = Self::default();
        differ.reset_with(old, new);
        differ
    }

    pub fn old_text(&self) -> &str {
        &self.old_text
    }

    pub fn new_text(&self) -> &str {
        &self.new_text
    }

    /// Script computed by the last call to `diff` or `raw_solve`.
    pub fn edits(&self) -> &EditScript<char> {
        &self.edits
    }

    /// Line-level script computed by the last call to `render_lines`.
    pub fn line_edits(&self) -> &EditScript<LineId> {
        &self.line_edits
    }

    pub fn diff(&mut self) -> &EditScript<char> {
        self.edits = if self.old_text == self.new_text {
            let mut same = EditScript::new();
            same.push(Edit::retain(&self.old));
            same
        } else {
            super::diff(&self.old, &self.new)
        };

        &self.edits
    }

    pub fn raw_solve(&mut self) -> &EditScript<char> {
        self.edits = super::raw_solve(&self.old, &self.new);
        &self.edits
    }

    pub fn render_lines(&mut self) -> String {
        let line_diff = LineDiff::new(&self.old_text, &self.new_text);
        let rendered = line_diff.render();
        self.line_edits = line_diff.into_script();
        rendered
    }

    pub fn reset(&mut self) {
        self.old_text.clear();
        self.new_text.clear();
        self.old.clear();
        self.new.clear();
        self.edits.clear();
        self.line_edits.clear();
    }

    pub fn reset_with(&mut self, old: &str, new: &str) {
        self.reset();
        self.old_text.push_str(old);
        self.new_text.push_str(new);
        self.old.extend(old.chars());
        self.new.extend(new.chars());
    }
}

impl Display for Differ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_inline(&self.edits))
    }
}
