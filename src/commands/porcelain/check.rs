use crate::areas::session::Session;
use crate::areas::snapshot::Snapshot;

impl Session {
    /// Checks `actual` against the `expected` snapshot.
    ///
    /// Returns whether they matched; a mismatch report has already been
    /// written when this returns `false`.
    pub fn check(&self, expected: &str, actual: &str) -> anyhow::Result<bool> {
        let label = expected;
        let expected = self.read_operand(expected)?;
        let actual = self.read_operand(actual)?;

        let snapshot = Snapshot::new(expected, label);
        snapshot.check(&actual, self)
    }
}
