use crate::{History, TransactionId};
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

/// Keeps a transaction open while it is alive.
///
/// Created by [`History::transaction`]. Everything pushed through the scope
/// is grouped into a single record that is undone and redone in one step.
/// Dropping the scope ends the transaction; a transaction that received no
/// records leaves no trace in the history.
///
/// Only one transaction can be open at a time, so a scope started while
/// another transaction is open has no effect of its own and its records
/// join the open transaction.
///
/// # Examples
/// ```
/// # use rewind::History;
/// fn push(history: &mut History<String>, s: &mut String, c: char) -> rewind::Result {
///     s.push(c);
///     history.push(pop, (), "push");
///     Ok(())
/// }
///
/// fn pop(history: &mut History<String>, s: &mut String, _: ()) -> rewind::Result {
///     let c = s.pop().ok_or("`s` is empty")?;
///     history.push(push, c, "pop");
///     Ok(())
/// }
///
/// let mut target = String::new();
/// let mut history = History::new();
/// {
///     let mut scope = history.transaction("abc");
///     push(&mut scope, &mut target, 'a').unwrap();
///     push(&mut scope, &mut target, 'b').unwrap();
///     push(&mut scope, &mut target, 'c').unwrap();
/// }
/// assert_eq!(history.undo_len(), 1);
///
/// history.undo(&mut target).unwrap();
/// assert_eq!(target, "");
/// history.redo(&mut target).unwrap();
/// assert_eq!(target, "abc");
/// ```
pub struct Scope<'a, T, S> {
    history: &'a mut History<T, S>,
    id: TransactionId,
}

impl<'a, T, S> Scope<'a, T, S> {
    pub(crate) fn new(history: &'a mut History<T, S>, id: TransactionId) -> Scope<'a, T, S> {
        Scope { history, id }
    }

    /// Returns the id of the transaction started by this scope.
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Returns `false` if the scope was started while another transaction
    /// was open, or if its transaction has been ended early.
    pub fn is_current(&self) -> bool {
        self.history.current_id() == Some(self.id)
    }
}

impl<T, S> Deref for Scope<'_, T, S> {
    type Target = History<T, S>;

    fn deref(&self) -> &Self::Target {
        self.history
    }
}

impl<T, S> DerefMut for Scope<'_, T, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.history
    }
}

impl<T, S> Drop for Scope<'_, T, S> {
    fn drop(&mut self) {
        self.history.end_transaction(self.id);
    }
}

impl<T, S> Debug for Scope<'_, T, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Scope")
            .field("id", &self.id)
            .field("current", &self.is_current())
            .finish()
    }
}
