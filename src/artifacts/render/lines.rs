use crate::artifacts::diff::diff;
use crate::artifacts::diff::edit::EditScript;
use crate::artifacts::render::symbol_table::{LineId, SymbolTable};

/// Line-granularity diff of two texts.
///
/// Every distinct line is interned once, the full pipeline runs over the ids
/// and the result is expanded back to one output line per input line.
#[derive(Debug, Clone)]
pub struct LineDiff<'t> {
    old: &'t str,
    new: &'t str,
    table: SymbolTable<'t>,
    script: EditScript<LineId>,
}

impl<'t> LineDiff<'t> {
    pub fn new(old: &'t str, new: &'t str) -> Self {
        let mut table = SymbolTable::default();

        // whole-text fast paths in `render` never look at the script
        let script = if old.is_empty() || new.is_empty() {
            EditScript::new()
        } else {
            let old_ids = table.encode(old);
            let new_ids = table.encode(new);
            diff(&old_ids, &new_ids)
        };

        Self {
            old,
            new,
            table,
            script,
        }
    }

    pub fn script(&self) -> &EditScript<LineId> {
        &self.script
    }

    pub fn into_script(self) -> EditScript<LineId> {
        self.script
    }

    pub fn render(&self) -> String {
        if self.old == self.new {
            return if self.old.is_empty() {
                String::new()
            } else {
                format!(" {}", self.old)
            };
        }
        if self.old.is_empty() {
            return format!("+{}", self.new);
        }
        if self.new.is_empty() {
            return format!("-{}", self.old);
        }

        let mut rendered = Vec::new();
        for edit in &self.script {
            let indicator = edit.kind.indicator();
            for &id in &edit.data {
                rendered.push(format!("{indicator}{}", self.table.resolve(id)));
            }
        }

        rendered.join("\n")
    }
}

/// Renders the line diff of `old` against `new` as ` `/`-`/`+` prefixed lines.
pub fn render_lines(old: &str, new: &str) -> String {
    LineDiff::new(old, new).render()
}
