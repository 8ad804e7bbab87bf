use array_filler::data::Container;
use array_filler::debug_invariants::DebugInvariants;
use array_filler::fill_error::FillError;

#[test]
fn invalid_lengths_fall_back_to_ten() {
    assert_eq!(Container::<i32>::with_length(-5).len(), 10);
    assert_eq!(Container::<i32>::with_length(0).len(), 10);
    assert_eq!(Container::<i32>::with_length(40_000).len(), 10);
    assert_eq!(Container::<i32>::with_length(32_767).len(), 32_767);
}

#[test]
fn set_far_past_the_end_grows() {
    let mut c = Container::with_length(10);
    c.set(15, 42).unwrap();
    assert!(c.len() >= 16);
    assert_eq!(c.get(15), Some(&42));
    assert!((10..15).all(|i| c.get(i).is_none()));
    assert!(c.validate_invariants().is_ok());
}

#[test]
fn set_at_the_top_of_the_index_space_is_rejected() {
    let mut c = Container::with_length(10);
    assert_eq!(
        c.set(usize::MAX, 1),
        Err(FillError::IndexOutOfRange {
            index: usize::MAX,
            len: 10
        })
    );
    assert!(c.set(array_filler::config::MAX_SLOTS, 1).is_err());
    assert_eq!(c.len(), 10);
    assert!(c.values().next().is_none());
}

#[test]
fn delete_compacts_and_keeps_order() -> Result<(), FillError> {
    let mut c: Container<i32> = (1..=5).collect();
    assert_eq!(c.delete(2)?, Some(3));
    assert_eq!(c.len(), 4);
    assert_eq!(c.values().copied().collect::<Vec<_>>(), vec![1, 2, 4, 5]);
    Ok(())
}

#[test]
fn delete_out_of_range_is_an_error() {
    let mut c = Container::<u8>::with_length(3);
    assert_eq!(
        c.delete(3),
        Err(FillError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(c.len(), 3);
}

#[test]
fn add_fills_free_slots_then_appends() {
    let mut c = Container::with_length(2);
    c.add('a');
    c.add('b');
    assert_eq!(c.len(), 2);
    c.add('c');
    assert_eq!(c.len(), 3);
    assert_eq!(c.to_string(), "Container[a, b, c]");
}

#[test]
fn add_after_delete_reuses_the_compacted_tail() -> Result<(), FillError> {
    let mut c = Container::with_length(3);
    c.add(1);
    c.add(2);
    c.delete(0)?;
    assert_eq!(c.cursor(), 1);
    c.add(3);
    assert_eq!(c.as_slice(), &[Some(2), Some(3)]);
    Ok(())
}

#[test]
fn get_never_panics() {
    let c = Container::<i32>::new();
    assert_eq!(c.get(0), None);
    assert_eq!(c.get(usize::MAX), None);
}

#[test]
fn delete_value_reports_hits() {
    let mut c = Container::from(vec!["x", "y", "x"]);
    assert!(c.delete_value(&"x"));
    assert_eq!(c.as_slice(), &[Some("y"), Some("x")]);
    assert!(!c.delete_value(&"z"));
}

#[test]
fn equality_ignores_cursor() {
    let mut a = Container::with_length(2);
    a.set(1, 5).unwrap();
    let b = Container::from_buffer(Some(vec![None, Some(5)]));
    assert_ne!(a.cursor(), b.cursor());
    assert_eq!(a, b);
}

#[test]
#[should_panic(expected = "[invariants] intentional")]
fn debug_invariants_macro_panics() {
    array_filler::debug_invariants!(Err::<(), FillError>(FillError::SourceExhausted), "intentional");
}
