//! Console output of a simulation.

use std::cell::RefCell;
use std::rc::Rc;

/// Ordered record of the lines produced by a car and its services.
///
/// Clones share the same record, so a car and the code running it can hold separate handles.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
    echo: bool,
}

impl Transcript {
    /// Creates a transcript which only records lines.
    pub fn recording() -> Self {
        Self::default()
    }

    /// Creates a transcript which also prints every line to stdout as it is produced.
    pub fn echo() -> Self {
        Self {
            lines: Rc::default(),
            echo: true,
        }
    }

    /// Appends a line.
    pub fn say(&self, line: impl Into<String>) {
        let line = line.into();
        log::debug!("{}", line);
        if self.echo {
            println!("{}", line);
        }
        self.lines.borrow_mut().push(line);
    }

    /// Returns a copy of the recorded lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Removes and returns the recorded lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }

    /// Returns the number of recorded lines.
    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}
