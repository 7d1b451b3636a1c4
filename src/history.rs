//! The undo-redo manager.

mod builder;

pub use builder::Builder;

use crate::record::{Leaf, Record, Transaction, TransactionId};
use crate::socket::{Signal, Slot, Socket};
use crate::stack::Stack;
use crate::{Display, Error, Result, Scope};
use std::fmt::{self, Debug, Formatter};
use std::num::NonZeroUsize;
use tracing::{debug, warn};

/// The default number of records kept in each stack.
pub const DEFAULT_LIMIT: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(limit) => limit,
    None => panic!("the default limit can not be `0`"),
};

/// A manager of two bounded stacks of reversible operations.
///
/// Each time the host changes its target, it pushes an operation that reverses
/// the change onto the history. Calling [`undo`] pops and runs the most recent
/// operation. While an undo is in progress, every operation pushed lands on the
/// redo stack instead, so an operation that pushes its own inverse makes
/// itself redoable. [`redo`] mirrors this.
///
/// A fresh push that is not part of an undo or redo invalidates the redo stack.
/// When a stack grows past the [`limit`], its oldest records are evicted.
///
/// # Examples
/// ```
/// use rewind::History;
///
/// fn set(history: &mut History<i32>, target: &mut i32, value: i32) -> rewind::Result {
///     history.push(set, *target, "set");
///     *target = value;
///     Ok(())
/// }
///
/// let mut target = 0;
/// let mut history = History::new();
/// set(&mut history, &mut target, 1).unwrap();
/// set(&mut history, &mut target, 2).unwrap();
/// assert_eq!(target, 2);
///
/// history.undo(&mut target).unwrap();
/// history.undo(&mut target).unwrap();
/// assert_eq!(target, 0);
///
/// history.redo(&mut target).unwrap();
/// history.redo(&mut target).unwrap();
/// assert_eq!(target, 2);
/// ```
///
/// [`undo`]: History::undo
/// [`redo`]: History::redo
/// [`limit`]: History::limit
pub struct History<T, S = ()> {
    pub(crate) undo: Stack<T, S>,
    pub(crate) redo: Stack<T, S>,
    current: Option<Open>,
    next_id: u64,
    undoing: bool,
    redoing: bool,
    limit: NonZeroUsize,
    socket: Socket<S>,
}

/// The transaction currently accumulating records.
#[derive(Debug)]
struct Open {
    id: TransactionId,
    name: String,
}

impl<T> History<T> {
    /// Returns a new history with the [default limit](DEFAULT_LIMIT).
    pub fn new() -> History<T> {
        Builder::default().finish(DEFAULT_LIMIT)
    }
}

impl<T, S> History<T, S> {
    /// Returns a new history builder.
    pub fn builder() -> Builder<T, S> {
        Builder::default()
    }

    /// Returns the maximum number of records kept in each stack.
    pub fn limit(&self) -> usize {
        self.limit.get()
    }

    /// Returns the number of records in the undo stack.
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Returns the number of records in the redo stack.
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Returns `true` if the undo stack has records.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns `true` if the redo stack has records.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Returns `true` while an undo is being executed.
    pub fn is_undoing(&self) -> bool {
        self.undoing
    }

    /// Returns `true` while a redo is being executed.
    pub fn is_redoing(&self) -> bool {
        self.redoing
    }

    /// Returns `true` if a transaction is open.
    pub fn is_in_transaction(&self) -> bool {
        self.current.is_some()
    }

    pub(crate) fn current_id(&self) -> Option<TransactionId> {
        self.current.as_ref().map(|open| open.id)
    }

    /// Sets how the signal should be handled when the state changes.
    ///
    /// The previous slot is returned if it exists.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.socket.connect(Some(slot))
    }

    /// Removes and returns the slot if it exists.
    pub fn disconnect(&mut self) -> Option<S> {
        self.socket.disconnect()
    }

    /// Returns the names of the records in the undo stack, most recent first.
    ///
    /// Records pushed without a name show up as an empty string.
    pub fn undo_descriptions(&self) -> Vec<String> {
        self.undo.names()
    }

    /// Returns the names of the records in the redo stack, most recent first.
    pub fn redo_descriptions(&self) -> Vec<String> {
        self.redo.names()
    }

    /// Returns a structure for configurable formatting of the history.
    pub fn display(&self) -> Display<T, S> {
        Display::from(self)
    }

    /// Starts a transaction that groups all following pushes into one record.
    ///
    /// Only one transaction can be open at a time. If one is already open,
    /// the returned id never becomes current and ending it does nothing.
    ///
    /// Prefer [`transaction`](History::transaction), which ends the
    /// transaction when it goes out of scope.
    pub fn start_transaction(&mut self, name: impl Into<String>) -> TransactionId {
        let id = TransactionId(self.next_id);
        self.next_id += 1;
        if let Some(open) = &self.current {
            debug!(open = %open.name, "transaction already open, ignoring new one");
            return id;
        }
        let name = name.into();
        debug!(%name, "starting transaction");
        // Reserve the head of both stacks for the records of the transaction.
        self.undo
            .push(Record::Transaction(Transaction::new(id, name.clone())));
        self.redo
            .push(Record::Transaction(Transaction::new(id, name.clone())));
        self.current = Some(Open { id, name });
        id
    }

    /// Ends the transaction with the given id.
    ///
    /// Does nothing unless `id` is the open transaction. Placeholders that
    /// did not receive any records are removed from the stacks.
    pub fn end_transaction(&mut self, id: TransactionId) {
        match &self.current {
            Some(open) if open.id == id => debug!(name = %open.name, "ending transaction"),
            _ => return,
        }
        self.current = None;
        self.undo.pop_empty_placeholder(id);
        self.redo.pop_empty_placeholder(id);
    }

    /// Starts a transaction that ends when the returned scope is dropped.
    ///
    /// The scope dereferences to the history, so operations are pushed
    /// through it while it is alive.
    ///
    /// # Examples
    /// ```
    /// # use rewind::History;
    /// let mut history = History::<()>::new();
    /// {
    ///     let mut scope = history.transaction("group");
    ///     scope.push(|_, _, _| Ok(()), (), "a");
    ///     scope.push(|_, _, _| Ok(()), (), "b");
    /// }
    /// assert_eq!(history.undo_descriptions(), ["group"]);
    /// ```
    pub fn transaction(&mut self, name: impl Into<String>) -> Scope<T, S> {
        let id = self.start_transaction(name);
        Scope::new(self, id)
    }
}

impl<T, S: Slot> History<T, S> {
    /// Sets the maximum number of records kept in each stack.
    ///
    /// Records beyond the new limit are evicted right away, oldest first.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLimit`] if `limit` is `0`.
    pub fn set_limit(&mut self, limit: usize) -> std::result::Result<(), Error> {
        self.limit = NonZeroUsize::new(limit).ok_or(Error::InvalidLimit)?;
        let undo_evicted = self.undo.truncate(limit);
        let redo_evicted = self.redo.truncate(limit);
        self.socket
            .emit_if(undo_evicted > 0, || Signal::Undo(!self.undo.is_empty()));
        self.socket
            .emit_if(redo_evicted > 0, || Signal::Redo(!self.redo.is_empty()));
        Ok(())
    }

    /// Pushes an operation that reverses a change the host just made.
    ///
    /// `operation` is called with `data` when the record is undone or redone.
    /// It must fully reverse the change, and push the operation that reverses
    /// it in turn to make the record redoable.
    ///
    /// If no undo or redo is in progress the redo stack is cleared first.
    /// If a transaction is open the record is added to it instead of being
    /// pushed as a record of its own.
    ///
    /// Pass `""` as `name` for a record without a label, it then shows up as
    /// an empty string in the descriptions.
    ///
    /// `data` is owned by the record. If it is a handle to live state, e.g. an
    /// `Rc<RefCell<_>>` or an entity id, the caller must make sure the handle is
    /// still valid when the record runs.
    pub fn push<D, F>(&mut self, operation: F, data: D, name: impl Into<String>)
    where
        D: 'static,
        F: FnOnce(&mut History<T, S>, &mut T, D) -> Result + 'static,
    {
        let leaf = Record::Leaf(Leaf::new(
            Box::new(move |history: &mut History<T, S>, target: &mut T| {
                operation(history, target, data)
            }),
            name.into(),
        ));

        if !self.undoing && !self.redoing {
            self.redo.clear();
            self.socket.emit(|| Signal::Redo(false));
        }

        let undoing = self.undoing;
        let stack = if undoing {
            &mut self.redo
        } else {
            &mut self.undo
        };
        match &self.current {
            Some(open) => stack.push_into(open.id, &open.name, leaf),
            None => stack.push(leaf),
        }
        stack.truncate(self.limit.get());

        let has_items = !stack.is_empty();
        self.socket.emit(|| {
            if undoing {
                Signal::Redo(has_items)
            } else {
                Signal::Undo(has_items)
            }
        });
    }

    /// Pops the most recent record from the undo stack and runs it.
    ///
    /// If the record is a transaction, it is run inside a transaction of the
    /// same name, so the operations it pushes are grouped again on the redo
    /// stack. Whatever the outcome, the undo flag is cleared, any open
    /// transaction is ended and an undo signal is emitted.
    ///
    /// # Errors
    /// Returns [`Error::EmptyUndo`] if there is nothing to undo,
    /// [`Error::Busy`] if called from inside an undo or redo, and
    /// [`Error::Operation`] if the operation fails. Errors are also logged,
    /// so callers that ignore them still leave a trace.
    pub fn undo(&mut self, target: &mut T) -> std::result::Result<(), Error> {
        self.replay(target, Direction::Undo)
    }

    /// Pops the most recent record from the redo stack and runs it.
    ///
    /// Works like [`undo`](History::undo) with the stacks swapped.
    ///
    /// # Errors
    /// Returns [`Error::EmptyRedo`] if there is nothing to redo,
    /// [`Error::Busy`] if called from inside an undo or redo, and
    /// [`Error::Operation`] if the operation fails.
    pub fn redo(&mut self, target: &mut T) -> std::result::Result<(), Error> {
        self.replay(target, Direction::Redo)
    }

    /// Removes all records from both stacks without running them.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
        self.socket.emit(|| Signal::Undo(false));
        self.socket.emit(|| Signal::Redo(false));
    }

    fn replay(&mut self, target: &mut T, direction: Direction) -> std::result::Result<(), Error> {
        if self.undoing || self.redoing {
            warn!(?direction, "replay requested while another is in progress");
            return Err(Error::Busy);
        }
        match direction {
            Direction::Undo => self.undoing = true,
            Direction::Redo => self.redoing = true,
        }

        let result = Replay {
            history: self,
            direction,
        }
        .execute_head(target);

        if let Err(err) = &result {
            warn!(?direction, %err, "replay failed");
        }
        result
    }
}

#[derive(Copy, Clone, Debug)]
enum Direction {
    Undo,
    Redo,
}

/// Runs the cleanup of a replay when dropped, also when the operation panics.
struct Replay<'a, T, S: Slot> {
    history: &'a mut History<T, S>,
    direction: Direction,
}

impl<T, S: Slot> Replay<'_, T, S> {
    fn execute_head(&mut self, target: &mut T) -> std::result::Result<(), Error> {
        let history = &mut *self.history;
        let record = match self.direction {
            Direction::Undo => history.undo.pop().ok_or(Error::EmptyUndo)?,
            Direction::Redo => history.redo.pop().ok_or(Error::EmptyRedo)?,
        };
        if let Record::Transaction(transaction) = &record {
            history.start_transaction(transaction.name());
        }
        record.execute(history, target).map_err(Error::Operation)
    }
}

impl<T, S: Slot> Drop for Replay<'_, T, S> {
    fn drop(&mut self) {
        let history = &mut *self.history;
        history.undoing = false;
        history.redoing = false;
        if let Some(id) = history.current_id() {
            history.end_transaction(id);
        }
        match self.direction {
            Direction::Undo => {
                let has_items = !history.undo.is_empty();
                history.socket.emit(|| Signal::Undo(has_items));
            }
            Direction::Redo => {
                let has_items = !history.redo.is_empty();
                history.socket.emit(|| Signal::Redo(has_items));
            }
        }
    }
}

impl<T> Default for History<T> {
    fn default() -> History<T> {
        History::new()
    }
}

impl<T, S> Debug for History<T, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("History")
            .field("undo", &self.undo)
            .field("redo", &self.redo)
            .field("current", &self.current)
            .field("undoing", &self.undoing)
            .field("redoing", &self.redoing)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}
