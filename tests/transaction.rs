use rewind::History;

/// Appends `c` and pushes its inverse.
fn push(history: &mut History<String>, s: &mut String, c: char) -> rewind::Result {
    s.push(c);
    history.push(pop, (), format!("push {c}"));
    Ok(())
}

/// Removes the last char and pushes its inverse.
fn pop(history: &mut History<String>, s: &mut String, _: ()) -> rewind::Result {
    let c = s.pop().ok_or("`s` is empty")?;
    history.push(push, c, format!("pop {c}"));
    Ok(())
}

#[test]
fn grouped_pushes_undo_in_one_step() {
    let mut target = String::new();
    let mut history = History::new();
    push(&mut history, &mut target, 'x').unwrap();
    {
        let mut scope = history.transaction("abc");
        assert!(scope.is_current());
        push(&mut scope, &mut target, 'a').unwrap();
        push(&mut scope, &mut target, 'b').unwrap();
        push(&mut scope, &mut target, 'c').unwrap();
    }
    assert!(!history.is_in_transaction());
    assert_eq!(history.undo_descriptions(), ["abc", "push x"]);
    assert!(history.redo_descriptions().is_empty());

    history.undo(&mut target).unwrap();
    assert_eq!(target, "x");
    assert_eq!(history.undo_descriptions(), ["push x"]);
    assert_eq!(history.redo_descriptions(), ["abc"]);

    history.redo(&mut target).unwrap();
    assert_eq!(target, "xabc");
    assert_eq!(history.undo_descriptions(), ["abc", "push x"]);
    assert!(history.redo_descriptions().is_empty());

    history.undo(&mut target).unwrap();
    history.undo(&mut target).unwrap();
    assert_eq!(target, "");
}

#[test]
fn grouped_operations_replay_in_reverse() {
    let mut target = Vec::new();
    let mut history = History::new();
    {
        let mut scope = history.transaction("log");
        for i in 0..4 {
            scope.push(
                |_, log: &mut Vec<i32>, i| {
                    log.push(i);
                    Ok(())
                },
                i,
                i.to_string(),
            );
        }
    }
    history.undo(&mut target).unwrap();
    assert_eq!(target, [3, 2, 1, 0]);
}

#[test]
fn empty_transaction_leaves_no_trace() {
    let mut target = String::new();
    let mut history = History::new();
    push(&mut history, &mut target, 'a').unwrap();
    push(&mut history, &mut target, 'b').unwrap();
    history.undo(&mut target).unwrap();

    let id = history.start_transaction("nothing");
    assert!(history.is_in_transaction());
    history.end_transaction(id);

    drop(history.transaction("nothing either"));

    assert_eq!(history.undo_descriptions(), ["push a"]);
    assert_eq!(history.redo_descriptions(), ["pop b"]);
}

#[test]
fn second_transaction_joins_the_first() {
    let mut target = String::new();
    let mut history = History::new();
    {
        let mut outer = history.transaction("outer");
        push(&mut outer, &mut target, 'a').unwrap();
        {
            let mut inner = outer.transaction("inner");
            assert!(!inner.is_current());
            push(&mut inner, &mut target, 'b').unwrap();
        }
        assert!(outer.is_current());
        push(&mut outer, &mut target, 'c').unwrap();
    }
    assert_eq!(history.undo_descriptions(), ["outer"]);

    history.undo(&mut target).unwrap();
    assert_eq!(target, "");
}

#[test]
fn ending_a_stale_id_does_nothing() {
    let mut target = String::new();
    let mut history = History::new();
    let first = history.start_transaction("first");
    history.end_transaction(first);

    let second = history.start_transaction("second");
    history.end_transaction(first);
    assert!(history.is_in_transaction());
    push(&mut history, &mut target, 'a').unwrap();
    history.end_transaction(second);
    assert!(!history.is_in_transaction());
    assert_eq!(history.undo_descriptions(), ["second"]);
}

#[test]
fn failing_child_still_closes_the_transaction() {
    let mut target = String::new();
    let mut history = History::new();
    {
        let mut scope = history.transaction("group");
        push(&mut scope, &mut target, 'a').unwrap();
        push(&mut scope, &mut target, 'b').unwrap();
    }
    // The group now undoes by popping twice, make the second pop fail.
    target.clear();
    target.push('b');

    assert!(history.undo(&mut target).is_err());
    assert!(!history.is_in_transaction());
    assert!(!history.can_undo());
    assert_eq!(history.redo_descriptions(), ["group"]);
    assert_eq!(target, "");
}

#[test]
fn transactions_count_against_the_limit() {
    let mut target = String::new();
    let mut history = History::<String>::builder().limit(2).build().unwrap();
    push(&mut history, &mut target, 'a').unwrap();
    push(&mut history, &mut target, 'b').unwrap();
    {
        let mut scope = history.transaction("cd");
        push(&mut scope, &mut target, 'c').unwrap();
        push(&mut scope, &mut target, 'd').unwrap();
    }
    assert_eq!(history.undo_descriptions(), ["cd", "push b"]);

    // Starting and ending an empty group on a full stack evicts nothing.
    drop(history.transaction("empty"));
    assert_eq!(history.undo_descriptions(), ["cd", "push b"]);
}
