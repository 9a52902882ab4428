use crate::artifacts::core::PagerWriter;
use anyhow::Context;
use clap::ValueEnum;
use is_terminal::IsTerminal;
use minus::Pager;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::Path;

/// When to emit ANSI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves the choice against the current stdout.
    pub fn enabled(&self) -> bool {
        match self {
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }

    /// Applies the choice process-wide for `colored`.
    pub fn apply(&self) {
        match self {
            // leave NO_COLOR / CLICOLOR handling to colored on a terminal
            ColorChoice::Auto if self.enabled() => colored::control::unset_override(),
            _ => colored::control::set_override(self.enabled()),
        }
    }
}

/// One CLI invocation: where output goes and how operands are read.
pub struct Session {
    writer: RefCell<Box<dyn Write>>,
    pager: Option<PagerWriter>,
    literal: bool,
}

impl Session {
    pub fn new(writer: Box<dyn Write>, literal: bool) -> Self {
        Session {
            writer: RefCell::new(writer),
            pager: None,
            literal,
        }
    }

    /// Buffers all output in a minus pager until [`Session::finish`].
    pub fn paged(literal: bool) -> Self {
        let pager = PagerWriter::new(Pager::new());

        Session {
            writer: RefCell::new(Box::new(pager.clone())),
            pager: Some(pager),
            literal,
        }
    }

    /// Whether paging makes sense for this process.
    ///
    /// Paging is skipped when stdout is not a terminal or `NO_PAGER` is set.
    pub fn wants_pager(requested: bool) -> bool {
        requested && std::env::var_os("NO_PAGER").is_none() && std::io::stdout().is_terminal()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    /// Reads an operand as a file path, or returns it as-is in literal mode.
    pub fn read_operand(&self, operand: &str) -> anyhow::Result<String> {
        if self.literal {
            return Ok(operand.to_string());
        }

        let path = Path::new(operand);
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }

    /// Flushes the writer and, for a paged session, shows the pager.
    pub fn finish(self) -> anyhow::Result<()> {
        self.writer.borrow_mut().flush()?;

        if let Some(pager) = self.pager {
            pager.page()?;
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::io::Write;
    use std::rc::Rc;

    /// Writer whose contents stay readable after it is boxed into a session.
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
