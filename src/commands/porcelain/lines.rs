use crate::areas::session::Session;
use crate::areas::snapshot::paint_line;
use crate::artifacts::render::lines::render_lines;

impl Session {
    pub fn lines(&self, old: &str, new: &str) -> anyhow::Result<()> {
        let old = self.read_operand(old)?;
        let new = self.read_operand(new)?;

        let report = render_lines(&old, &new);
        if report.is_empty() {
            return Ok(());
        }

        for line in report.split('\n') {
            writeln!(self.writer(), "{}", paint_line(line))?;
        }

        Ok(())
    }
}
