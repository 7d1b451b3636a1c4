use crate::format::Format;
use crate::record::Record;
use crate::stack::Stack;
use crate::History;
use std::fmt;

/// Configurable display formatting for the [`History`].
///
/// Both stacks are listed most recent first. The position of a record is the
/// number of undos (or redos) needed to run it.
///
/// # Examples
/// ```
/// # use rewind::History;
/// let mut history = History::<()>::new();
/// history.push(|_, _, _| Ok(()), (), "a");
/// history.push(|_, _, _| Ok(()), (), "b");
///
/// let mut display = history.display();
/// display.detailed(false);
/// # #[cfg(feature = "colored")]
/// # display.colored(false);
/// assert_eq!(display.to_string(), "undo:\n* 1 [HEAD] b\n* 2 a\nredo:\n");
/// ```
pub struct Display<'a, T, S> {
    history: &'a History<T, S>,
    format: Format,
}

impl<T, S> Display<'_, T, S> {
    /// Show colored output (on by default).
    ///
    /// Requires the `colored` feature to be enabled.
    #[cfg(feature = "colored")]
    pub fn colored(&mut self, on: bool) -> &mut Self {
        self.format.colored = on;
        self
    }

    /// Show the records inside transactions and the timestamps (on by default).
    pub fn detailed(&mut self, on: bool) -> &mut Self {
        self.format.detailed = on;
        self
    }

    /// Mark the record at the head of each stack (on by default).
    pub fn head(&mut self, on: bool) -> &mut Self {
        self.format.head = on;
        self
    }

    /// Show the position of the records (on by default).
    pub fn position(&mut self, on: bool) -> &mut Self {
        self.format.position = on;
        self
    }

    /// Show when the records were created (on by default).
    ///
    /// Requires the `chrono` feature to be enabled.
    #[cfg(feature = "chrono")]
    pub fn timestamps(&mut self, on: bool) -> &mut Self {
        self.format.timestamps = on;
        self
    }

    fn fmt_stack(&self, f: &mut fmt::Formatter, title: &str, stack: &Stack<T, S>) -> fmt::Result {
        self.format.title(f, title)?;
        for (i, record) in stack.iter().enumerate() {
            self.fmt_record(f, record, Some(i + 1), 0)?;
        }
        Ok(())
    }

    fn fmt_record(
        &self,
        f: &mut fmt::Formatter,
        record: &Record<T, S>,
        position: Option<usize>,
        level: usize,
    ) -> fmt::Result {
        for i in 0..level {
            self.format.edge(f, i)?;
        }
        self.format.mark(f, level)?;
        if let Some(position) = position {
            self.format.position(f, position)?;
            if position == 1 {
                self.format.head(f)?;
            }
        }

        #[cfg(feature = "chrono")]
        if self.format.detailed {
            self.format.timestamp(f, &record.timestamp())?;
        }

        self.format.text(f, record.name(), level)?;

        if let Record::Transaction(transaction) = record {
            if self.format.detailed {
                for child in transaction.children() {
                    self.fmt_record(f, child, None, level + 1)?;
                }
            }
        }
        Ok(())
    }
}

impl<'a, T, S> From<&'a History<T, S>> for Display<'a, T, S> {
    fn from(history: &'a History<T, S>) -> Self {
        Display {
            history,
            format: Format::default(),
        }
    }
}

impl<T, S> fmt::Display for Display<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_stack(f, "undo:", &self.history.undo)?;
        self.fmt_stack(f, "redo:", &self.history.redo)
    }
}
