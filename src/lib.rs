//! An undo-redo manager with bounded stacks and transactions.
//!
//! Every time the host changes its state, it pushes an operation that reverses
//! the change onto a [`History`], together with the data the operation needs.
//! Undoing pops the most recent operation and runs it. While it runs, any
//! operation it pushes lands on the redo stack, so an operation that pushes
//! its own inverse becomes redoable, and the other way around.
//!
//! # Features
//!
//! * [`History`] keeps an undo stack and a redo stack, both ordered most recent first.
//! * The amount of records kept in each stack is configurable, the oldest ones
//!   are evicted first.
//! * Pushes can be grouped into a [transaction](History::transaction) that is
//!   undone and redone in one step.
//! * The history notifies a [`Slot`] every time the stacks change, e.g. to
//!   enable and disable buttons in an editor.
//! * Configurable display formatting of both stacks, colored when the
//!   `colored` feature is enabled.
//! * Time stamps on every record when the `chrono` feature is enabled.
//!
//! # Examples
//!
//! Add this to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rewind = "0.1"
//! ```
//!
//! And this to `main.rs`:
//!
//! ```
//! use rewind::History;
//!
//! fn add(history: &mut History<String>, s: &mut String, c: char) -> rewind::Result {
//!     s.push(c);
//!     history.push(remove, (), format!("add {c}"));
//!     Ok(())
//! }
//!
//! fn remove(history: &mut History<String>, s: &mut String, _: ()) -> rewind::Result {
//!     let c = s.pop().ok_or("`s` is empty")?;
//!     history.push(add, c, format!("remove {c}"));
//!     Ok(())
//! }
//!
//! fn main() -> Result<(), rewind::Error> {
//!     let mut target = String::new();
//!     let mut history = History::new();
//!     add(&mut history, &mut target, 'a').unwrap();
//!     add(&mut history, &mut target, 'b').unwrap();
//!     add(&mut history, &mut target, 'c').unwrap();
//!     assert_eq!(target, "abc");
//!     history.undo(&mut target)?;
//!     history.undo(&mut target)?;
//!     history.undo(&mut target)?;
//!     assert_eq!(target, "");
//!     history.redo(&mut target)?;
//!     history.redo(&mut target)?;
//!     history.redo(&mut target)?;
//!     assert_eq!(target, "abc");
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/rewind")]
#![deny(missing_docs)]

mod display;
mod error;
mod format;
mod history;
mod record;
mod scope;
mod socket;
mod stack;

pub use self::{
    display::Display,
    error::Error,
    history::{Builder, History, DEFAULT_LIMIT},
    record::TransactionId,
    scope::Scope,
    socket::{Signal, Slot},
};

/// The result of an operation stored in a [`History`].
pub type Result = std::result::Result<(), Box<dyn std::error::Error>>;
