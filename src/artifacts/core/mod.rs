//! Core utilities and shared types
//!
//! This module contains output plumbing used by the CLI session.

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Wrapper that implements `Write` for the minus pager
///
/// Rendered diffs are written into the pager's buffer line by line; nothing
/// is shown until [`PagerWriter::page`] hands the buffer over to minus.
///
/// ## Usage
///
/// ```ignore
/// let mut writer = PagerWriter::new(Pager::new());
/// writeln!(writer, " Header\n-Body\n+BODY")?;
/// writer.page()?;
/// ```
#[derive(new, Clone)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    /// Shows everything written so far and blocks until the user quits.
    pub fn page(self) -> anyhow::Result<()> {
        self.pager.set_prompt("snapdiff")?;
        minus::page_all(self.pager)?;
        Ok(())
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
