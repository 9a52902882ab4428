use crate::artifacts::diff::edit::EditScript;

/// Renders each edit as `<indicator>"<data>"` with no separator.
///
/// Double quotes inside the data are escaped as `\"`. Empty edits are skipped.
pub fn render_inline(script: &EditScript<char>) -> String {
    let mut out = String::new();

    for edit in script.iter().filter(|edit| !edit.is_empty()) {
        out.push(edit.kind.indicator());
        out.push('"');
        for &symbol in &edit.data {
            if symbol == '"' {
                out.push('\\');
            }
            out.push(symbol);
        }
        out.push('"');
    }

    out
}
