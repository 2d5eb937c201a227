use parking_lot::Mutex;
use std::sync::Arc;
use wodi_collection::{Capacity, CollectionError, CollectionKind, CollectionSpec, ConstrainedVec};

#[derive(Debug)]
enum Cases {}

impl CollectionKind for Cases {
    type Item = String;
    const SPEC: CollectionSpec = CollectionSpec::bounded("Cases", 1, 4);

    fn default_item(index: usize) -> Option<String> {
        Some(format!("Case {}", index + 1))
    }
}

fn cases(items: &[&str]) -> ConstrainedVec<Cases> {
    ConstrainedVec::try_from_items(items.iter().map(|s| (*s).to_owned())).unwrap()
}

#[test]
fn test_capacity_is_exposed() {
    assert_eq!(ConstrainedVec::<Cases>::capacity(), Capacity::bounded(1, 4));
    assert!(!ConstrainedVec::<Cases>::capacity().is_fixed());
    assert_eq!(ConstrainedVec::<Cases>::capacity().to_string(), "1..=4");
}

#[test]
fn test_bounded_lengths_accepted() {
    assert_eq!(cases(&["a"]).len(), 1);
    assert_eq!(cases(&["a", "b", "c", "d"]).len(), 4);
    assert!(ConstrainedVec::<Cases>::try_from_items(Vec::<String>::new()).is_err());
}

#[test]
fn test_insert_and_remove_notify() {
    let mut list = cases(&["a", "d"]);
    let events = Arc::new(Mutex::new(Vec::new()));

    {
        let events = Arc::clone(&events);
        list.on_inserted(move |index, items: &[String]| {
            events.lock().push(format!("+{index}:{}", items.join(",")));
        });
    }
    {
        let events = Arc::clone(&events);
        list.on_removed(move |index, items: &[String]| {
            events.lock().push(format!("-{index}:{}", items.join(",")));
        });
    }

    list.insert_range(1, ["b".to_owned(), "c".to_owned()]).unwrap();
    assert_eq!(list.as_slice(), &["a", "b", "c", "d"]);

    let removed = list.remove_range(1, 2).unwrap();
    assert_eq!(removed, vec!["b".to_owned(), "c".to_owned()]);
    assert_eq!(list.remove(0).unwrap(), "a");

    assert_eq!(events.lock().as_slice(), &["+1:b,c", "-1:b,c", "-0:a"]);
}

#[test]
fn test_capacity_errors_leave_list_untouched() {
    let mut list = cases(&["a", "b", "c"]);

    let err = list.insert_range(0, ["x".to_owned(), "y".to_owned()]).unwrap_err();
    assert!(matches!(err, CollectionError::CapacityExceeded { .. }));
    assert_eq!(list.len(), 3);

    let err = list.remove_range(0, 3).unwrap_err();
    assert!(matches!(err, CollectionError::CapacityUnderflow { .. }));
    assert_eq!(list.as_slice(), &["a", "b", "c"]);

    assert!(matches!(list.remove(3), Err(CollectionError::IndexOutOfRange { .. })));
}

#[test]
fn test_clear_shrinks_to_minimum() {
    let mut list = cases(&["a", "b", "c"]);
    list.clear().unwrap();
    assert_eq!(list.as_slice(), &["Case 1"]);
}

#[test]
fn test_pop_and_push_round() {
    let mut list = cases(&["a", "b"]);
    assert_eq!(list.pop().unwrap(), "b");
    list.push("z".to_owned()).unwrap();
    assert_eq!(list.as_slice(), &["a", "z"]);
}
