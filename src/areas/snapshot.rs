use crate::areas::session::Session;
use crate::artifacts::render::lines::render_lines;
use colored::Colorize;
use derive_new::new;
use std::io::Write;

/// Colours one rendered diff line by its indicator.
pub fn paint_line(line: &str) -> String {
    match line.chars().next() {
        Some('+') => line.green().to_string(),
        Some('-') => line.red().to_string(),
        _ => line.to_string(),
    }
}

/// An expected text that actual output is checked against.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Snapshot {
    expected: String,
    #[new(into)]
    label: String,
}

impl Snapshot {
    pub fn is_equal(&self, actual: &str) -> bool {
        self.expected == actual
    }

    /// Compares `actual` against the snapshot.
    ///
    /// On a mismatch the line diff from expected to actual is written to the
    /// session, with `-` lines in red and `+` lines in green, and `false` is
    /// returned.
    pub fn check(&self, actual: &str, session: &Session) -> anyhow::Result<bool> {
        if self.is_equal(actual) {
            return Ok(true);
        }

        let report = render_lines(&self.expected, actual);
        let mut writer = session.writer();

        writeln!(writer, "{}", format!("Snapshot mismatch {}", self.label).bold())?;
        for line in report.split('\n') {
            writeln!(writer, "{}", paint_line(line))?;
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::session::test_support::SharedBuffer;
    use pretty_assertions::assert_eq;

    fn session(buffer: &SharedBuffer) -> Session {
        colored::control::set_override(false);
        Session::new(Box::new(buffer.clone()), true)
    }

    #[test]
    fn matching_snapshot_writes_nothing() -> anyhow::Result<()> {
        let buffer = SharedBuffer::default();
        let snapshot = Snapshot::new("same\ntext".to_string(), "identity");

        assert!(snapshot.check("same\ntext", &session(&buffer))?);
        assert_eq!(buffer.contents(), "");

        Ok(())
    }

    #[test]
    fn mismatch_reports_line_diff() -> anyhow::Result<()> {
        let buffer = SharedBuffer::default();
        let snapshot = Snapshot::new("Header\nBody\nFooter".to_string(), "page");

        assert!(!snapshot.check("Header\n\nFooter", &session(&buffer))?);
        assert_eq!(
            buffer.contents(),
            "Snapshot mismatch page\n Header\n-Body\n+\n Footer\n"
        );

        Ok(())
    }

    #[test]
    fn mismatch_against_empty_actual_deletes_everything() -> anyhow::Result<()> {
        let buffer = SharedBuffer::default();
        let snapshot = Snapshot::new("x".to_string(), "gone");

        assert!(!snapshot.check("", &session(&buffer))?);
        assert_eq!(buffer.contents(), "Snapshot mismatch gone\n-x\n");

        Ok(())
    }

    #[test]
    fn plain_lines_are_left_unpainted() {
        assert_eq!(paint_line(" kept"), " kept");
        assert_eq!(paint_line(""), "");
    }
}
