use rewind::{Error, History, Signal, Slot};
use std::cell::RefCell;
use std::rc::Rc;

fn set<S: Slot + 'static>(
    history: &mut History<i32, S>,
    target: &mut i32,
    value: i32,
) -> rewind::Result {
    history.push(set, *target, format!("set {value}"));
    *target = value;
    Ok(())
}

fn recorded() -> (Rc<RefCell<Vec<Signal>>>, impl FnMut(Signal)) {
    let signals = Rc::new(RefCell::new(Vec::new()));
    let slot = {
        let signals = Rc::clone(&signals);
        move |signal: Signal| signals.borrow_mut().push(signal)
    };
    (signals, slot)
}

#[test]
fn undo_all_then_redo_all() {
    let mut target = 0;
    let mut history = History::new();
    for value in 1..=5 {
        set(&mut history, &mut target, value).unwrap();
    }
    assert_eq!(history.undo_len(), 5);
    assert_eq!(history.redo_len(), 0);

    for expected in (0..5).rev() {
        history.undo(&mut target).unwrap();
        assert_eq!(target, expected);
    }
    assert_eq!(history.undo_len(), 0);
    assert_eq!(history.redo_len(), 5);

    for expected in 1..=5 {
        history.redo(&mut target).unwrap();
        assert_eq!(target, expected);
    }
    assert_eq!(history.undo_len(), 5);
    assert_eq!(history.redo_len(), 0);
}

#[test]
fn undo_then_redo_restores_state() {
    let mut target = 3;
    let mut history = History::new();
    set(&mut history, &mut target, 7).unwrap();
    history.undo(&mut target).unwrap();
    assert_eq!(target, 3);
    history.redo(&mut target).unwrap();
    assert_eq!(target, 7);
    assert_eq!(history.undo_descriptions(), ["set 7"]);
}

#[test]
fn new_push_invalidates_redo() {
    let mut target = 0;
    let mut history = History::new();
    set(&mut history, &mut target, 1).unwrap();
    set(&mut history, &mut target, 2).unwrap();
    history.undo(&mut target).unwrap();
    assert!(history.can_redo());

    set(&mut history, &mut target, 3).unwrap();
    assert!(!history.can_redo());
    assert!(matches!(history.redo(&mut target), Err(Error::EmptyRedo)));
    assert_eq!(target, 3);
}

#[test]
fn undo_on_empty_history_changes_nothing() {
    let mut target = 0;
    let mut history = History::new();
    set(&mut history, &mut target, 1).unwrap();
    history.undo(&mut target).unwrap();
    assert_eq!(target, 0);

    let err = history.undo(&mut target).unwrap_err();
    assert!(matches!(err, Error::EmptyUndo));
    assert!(err.is_empty_history());
    assert_eq!(target, 0);
    assert_eq!(history.redo_descriptions(), ["set 0"]);
    assert!(!history.is_undoing());
}

#[test]
fn descriptions_are_most_recent_first() {
    let value = Rc::new(RefCell::new(0));
    let mut history = History::<()>::new();

    let set_value = |value: Rc<RefCell<i32>>| {
        move |_: &mut History<()>, _: &mut (), old: i32| -> rewind::Result {
            *value.borrow_mut() = old;
            Ok(())
        }
    };
    history.push(set_value(Rc::clone(&value)), 0, "A");
    *value.borrow_mut() = 5;
    history.push(set_value(Rc::clone(&value)), 5, "B");
    *value.borrow_mut() = 8;
    history.push(set_value(Rc::clone(&value)), 8, "");

    assert_eq!(history.undo_descriptions(), ["", "B", "A"]);
    assert!(history.redo_descriptions().is_empty());

    history.undo(&mut ()).unwrap();
    history.undo(&mut ()).unwrap();
    assert_eq!(*value.borrow(), 5);
    assert_eq!(history.undo_descriptions(), ["A"]);
}

#[test]
fn oldest_records_are_evicted() {
    let mut target = 0;
    let mut history = History::<i32>::builder().limit(3).build().unwrap();
    for value in 1..=6 {
        set(&mut history, &mut target, value).unwrap();
    }
    assert_eq!(history.undo_descriptions(), ["set 6", "set 5", "set 4"]);

    while history.undo(&mut target).is_ok() {}
    assert_eq!(target, 3);
    assert_eq!(history.redo_len(), 3);
}

#[test]
fn failing_operation_is_reported() {
    let mut target = 0;
    let mut history = History::new();
    set(&mut history, &mut target, 1).unwrap();
    history.push(|_, _: &mut i32, _| Err("disk full".into()), (), "save");

    let err = history.undo(&mut target).unwrap_err();
    assert_eq!(err.to_string(), "operation failed: disk full");
    assert!(!err.is_empty_history());
    assert!(!history.is_undoing());
    assert_eq!(history.undo_descriptions(), ["set 1"]);

    history.undo(&mut target).unwrap();
    assert_eq!(target, 0);
}

#[test]
fn signals() {
    let (signals, slot) = recorded();
    let mut target = 0;
    let mut history = History::builder().connect(slot).build().unwrap();

    set(&mut history, &mut target, 1).unwrap();
    assert_eq!(
        signals.borrow_mut().drain(..).collect::<Vec<_>>(),
        [Signal::Redo(false), Signal::Undo(true)]
    );

    history.undo(&mut target).unwrap();
    assert_eq!(
        signals.borrow_mut().drain(..).collect::<Vec<_>>(),
        [Signal::Redo(true), Signal::Undo(false)]
    );

    history.redo(&mut target).unwrap();
    assert_eq!(
        signals.borrow_mut().drain(..).collect::<Vec<_>>(),
        [Signal::Undo(true), Signal::Redo(false)]
    );

    history.clear();
    assert_eq!(
        signals.borrow_mut().drain(..).collect::<Vec<_>>(),
        [Signal::Undo(false), Signal::Redo(false)]
    );
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn disconnected_slot_receives_nothing() {
    let (signals, slot) = recorded();
    let mut target = 0;
    let mut history = History::builder().connect(slot).build().unwrap();
    assert!(history.disconnect().is_some());
    set(&mut history, &mut target, 1).unwrap();
    history.undo(&mut target).unwrap();
    assert!(signals.borrow().is_empty());
}

#[test]
fn zero_limit_is_rejected() {
    let mut history = History::<i32>::new();
    assert!(matches!(history.set_limit(0), Err(Error::InvalidLimit)));
    assert_eq!(history.limit(), 10);
    history.set_limit(1).unwrap();
    assert_eq!(history.limit(), 1);
}
