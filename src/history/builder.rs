use super::{History, DEFAULT_LIMIT};
use crate::socket::Socket;
use crate::stack::Stack;
use crate::Error;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::num::NonZeroUsize;

/// Builder for a [`History`].
///
/// # Examples
/// ```
/// # use rewind::{History, Signal};
/// let history = History::<String, _>::builder()
///     .limit(100)
///     .capacity(100)
///     .connect(|s: Signal| { dbg!(s); })
///     .build()
///     .unwrap();
/// assert_eq!(history.limit(), 100);
/// ```
pub struct Builder<T, S = ()> {
    capacity: usize,
    limit: usize,
    socket: Socket<S>,
    pd: PhantomData<T>,
}

impl<T, S> Builder<T, S> {
    /// Sets the capacity reserved up front in each stack.
    pub fn capacity(mut self, capacity: usize) -> Builder<T, S> {
        self.capacity = capacity;
        self
    }

    /// Sets the maximum number of records kept in each stack.
    ///
    /// Defaults to [`DEFAULT_LIMIT`].
    pub fn limit(mut self, limit: usize) -> Builder<T, S> {
        self.limit = limit;
        self
    }

    /// Connects the slot.
    pub fn connect(mut self, slot: S) -> Builder<T, S> {
        self.socket = Socket::new(slot);
        self
    }

    /// Builds the history.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLimit`] if the limit was set to `0`.
    pub fn build(self) -> Result<History<T, S>, Error> {
        let limit = NonZeroUsize::new(self.limit).ok_or(Error::InvalidLimit)?;
        Ok(self.finish(limit))
    }

    pub(super) fn finish(self, limit: NonZeroUsize) -> History<T, S> {
        let capacity = self.capacity.min(limit.get() + 1);
        History {
            undo: Stack::with_capacity(capacity),
            redo: Stack::with_capacity(capacity),
            current: None,
            next_id: 0,
            undoing: false,
            redoing: false,
            limit,
            socket: self.socket,
        }
    }
}

impl<T, S> Default for Builder<T, S> {
    fn default() -> Self {
        Builder {
            capacity: 0,
            limit: DEFAULT_LIMIT.get(),
            socket: Socket::default(),
            pd: PhantomData,
        }
    }
}

impl<T, S> Debug for Builder<T, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Builder")
            .field("capacity", &self.capacity)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}
