//! The records stored in the stacks.

use crate::{History, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::fmt::{self, Debug, Formatter};
use tracing::trace;

/// The type-erased operation of a leaf record together with its captured data.
pub(crate) type Operation<T, S> = Box<dyn FnOnce(&mut History<T, S>, &mut T) -> Result>;

/// Identifies a transaction started on a [`History`].
///
/// Returned by [`History::start_transaction`] and used to end it again.
#[derive(Copy, Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub struct TransactionId(pub(crate) u64);

/// A reversible unit of work stored in one of the stacks.
pub(crate) enum Record<T, S> {
    Leaf(Leaf<T, S>),
    Transaction(Transaction<T, S>),
}

impl<T, S> Record<T, S> {
    pub fn name(&self) -> &str {
        match self {
            Record::Leaf(leaf) => &leaf.name,
            Record::Transaction(transaction) => &transaction.name,
        }
    }

    #[cfg(feature = "chrono")]
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Record::Leaf(leaf) => leaf.timestamp,
            Record::Transaction(transaction) => transaction.timestamp,
        }
    }

    /// Consumes the record and runs it.
    pub fn execute(self, history: &mut History<T, S>, target: &mut T) -> Result {
        match self {
            Record::Leaf(leaf) => leaf.execute(history, target),
            Record::Transaction(transaction) => transaction.execute(history, target),
        }
    }

    /// Returns the transaction if this is the placeholder of `id`.
    pub fn placeholder_mut(&mut self, id: TransactionId) -> Option<&mut Transaction<T, S>> {
        match self {
            Record::Transaction(transaction) if transaction.id == id => Some(transaction),
            _ => None,
        }
    }
}

impl<T, S> Debug for Record<T, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Record::Leaf(leaf) => leaf.fmt(f),
            Record::Transaction(transaction) => transaction.fmt(f),
        }
    }
}

/// A single operation and the data it was called with.
pub(crate) struct Leaf<T, S> {
    operation: Operation<T, S>,
    name: String,
    #[cfg(feature = "chrono")]
    timestamp: DateTime<Utc>,
}

impl<T, S> Leaf<T, S> {
    pub fn new(operation: Operation<T, S>, name: String) -> Leaf<T, S> {
        Leaf {
            operation,
            name,
            #[cfg(feature = "chrono")]
            timestamp: Utc::now(),
        }
    }

    fn execute(self, history: &mut History<T, S>, target: &mut T) -> Result {
        trace!(name = %self.name, "executing operation");
        (self.operation)(history, target)
    }
}

impl<T, S> Debug for Leaf<T, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A group of records that are undone and redone in one step.
///
/// The children are stored most-recent-first.
pub(crate) struct Transaction<T, S> {
    id: TransactionId,
    children: VecDeque<Record<T, S>>,
    name: String,
    #[cfg(feature = "chrono")]
    timestamp: DateTime<Utc>,
}

impl<T, S> Transaction<T, S> {
    pub fn new(id: TransactionId, name: String) -> Transaction<T, S> {
        Transaction {
            id,
            children: VecDeque::new(),
            name,
            #[cfg(feature = "chrono")]
            timestamp: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns an iterator over the children, most recent first.
    pub fn children(&self) -> impl Iterator<Item = &Record<T, S>> {
        self.children.iter()
    }

    pub fn add_child(&mut self, record: Record<T, S>) {
        self.children.push_front(record);
    }

    /// Runs the children in stored order, stopping at the first error.
    fn execute(self, history: &mut History<T, S>, target: &mut T) -> Result {
        trace!(name = %self.name, len = self.len(), "executing transaction");
        for child in self.children {
            child.execute(history, target)?;
        }
        Ok(())
    }
}

impl<T, S> Debug for Transaction<T, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("children", &self.children)
            .finish()
    }
}
