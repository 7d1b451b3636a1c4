//! Module used to communicate changes in the stacks.

use std::mem;
use std::sync::mpsc::{Sender, SyncSender};

/// Slot wrapper that adds some additional functionality.
#[derive(Clone, Debug)]
pub(crate) struct Socket<S>(Option<S>);

impl<S> Socket<S> {
    pub const fn new(slot: S) -> Socket<S> {
        Socket(Some(slot))
    }

    pub fn connect(&mut self, slot: Option<S>) -> Option<S> {
        mem::replace(&mut self.0, slot)
    }

    pub fn disconnect(&mut self) -> Option<S> {
        self.0.take()
    }
}

impl<S> Default for Socket<S> {
    fn default() -> Self {
        Socket(None)
    }
}

impl<S: Slot> Socket<S> {
    pub fn emit(&mut self, signal: impl FnOnce() -> Signal) {
        if let Some(slot) = &mut self.0 {
            slot.on_emit(signal());
        }
    }

    pub fn emit_if(&mut self, cond: bool, signal: impl FnOnce() -> Signal) {
        if cond {
            self.emit(signal);
        }
    }
}

/// The `Signal` describes a state change of one of the stacks.
///
/// A signal is emitted every time a stack may have changed, not only when
/// its ability to undo or redo flips, so hosts can refresh their UI from it.
///
/// See [`Slot`] for more information.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
#[non_exhaustive]
pub enum Signal {
    /// Emitted when the undo stack may have changed. Says if it has items.
    Undo(bool),
    /// Emitted when the redo stack may have changed. Says if it has items.
    Redo(bool),
}

/// Use this to handle signals emitted.
///
/// This allows you to trigger events on certain state changes,
/// e.g. enabling and disabling the undo and redo buttons of an editor.
///
/// # Examples
/// ```
/// # use std::sync::mpsc;
/// # use rewind::{History, Signal};
/// let (sender, receiver) = mpsc::channel();
/// let mut iter = receiver.try_iter();
///
/// let mut target = 1;
/// let mut history = History::builder().connect(sender).build().unwrap();
///
/// history.push(|_, t: &mut i32, v| { *t = v; Ok(()) }, 0, "set");
/// assert_eq!(iter.next(), Some(Signal::Redo(false)));
/// assert_eq!(iter.next(), Some(Signal::Undo(true)));
/// assert_eq!(iter.next(), None);
///
/// history.undo(&mut target).unwrap();
/// assert_eq!(target, 0);
/// assert_eq!(iter.next(), Some(Signal::Undo(false)));
/// assert_eq!(iter.next(), None);
/// ```
pub trait Slot {
    /// Receives a signal that describes the state change done to the stacks.
    fn on_emit(&mut self, signal: Signal);
}

impl Slot for () {
    fn on_emit(&mut self, _: Signal) {}
}

impl<F: FnMut(Signal)> Slot for F {
    fn on_emit(&mut self, signal: Signal) {
        self(signal)
    }
}

impl Slot for Sender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}

impl Slot for SyncSender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}
