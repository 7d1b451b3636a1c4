use crate::record::{Record, Transaction, TransactionId};
use std::collections::VecDeque;
use std::fmt::{self, Debug, Formatter};
use tracing::debug;

/// A stack of records, ordered most-recent-first.
///
/// The head of the stack is the front of the deque, so pushing and popping
/// never shifts the other records.
pub(crate) struct Stack<T, S> {
    records: VecDeque<Record<T, S>>,
}

impl<T, S> Stack<T, S> {
    pub fn with_capacity(capacity: usize) -> Stack<T, S> {
        Stack {
            records: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: Record<T, S>) {
        self.records.push_front(record);
    }

    pub fn pop(&mut self) -> Option<Record<T, S>> {
        self.records.pop_front()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Adds `record` to the placeholder of `id` at the head of the stack,
    /// pushing a new placeholder first if the head belongs to something else.
    pub fn push_into(&mut self, id: TransactionId, name: &str, record: Record<T, S>) {
        let head = self.records.front_mut();
        if let Some(transaction) = head.and_then(|head| head.placeholder_mut(id)) {
            transaction.add_child(record);
        } else {
            let mut transaction = Transaction::new(id, name.to_string());
            transaction.add_child(record);
            self.push(Record::Transaction(transaction));
        }
    }

    /// Pops the head if it is an empty placeholder of `id`.
    pub fn pop_empty_placeholder(&mut self, id: TransactionId) -> bool {
        let is_empty = matches!(
            self.records.front_mut().and_then(|head| head.placeholder_mut(id)),
            Some(transaction) if transaction.is_empty()
        );
        if is_empty {
            self.records.pop_front();
        }
        is_empty
    }

    /// Evicts the oldest records until at most `limit` remain.
    ///
    /// Returns the number of evicted records.
    pub fn truncate(&mut self, limit: usize) -> usize {
        let evicted = self.len().saturating_sub(limit);
        if evicted > 0 {
            debug!(evicted, limit, "evicting oldest records");
            self.records.truncate(limit);
        }
        evicted
    }

    /// Returns an iterator over the records, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Record<T, S>> {
        self.records.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.iter().map(|record| record.name().to_string()).collect()
    }
}

impl<T, S> Debug for Stack<T, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(&self.records).finish()
    }
}
