use crate::areas::session::Session;
use crate::artifacts::diff::Differ;

impl Session {
    /// Prints the inline form of the character diff between two operands.
    ///
    /// With `raw` set only the solver runs, so every change shows up as
    /// single-symbol edits.
    pub fn inline(&self, old: &str, new: &str, raw: bool) -> anyhow::Result<()> {
        let old = self.read_operand(old)?;
        let new = self.read_operand(new)?;

        let mut differ = Differ::new(&old, &new);
        if raw {
            differ.raw_solve();
        } else {
            differ.diff();
        }

        writeln!(self.writer(), "{differ}")?;

        Ok(())
    }
}
