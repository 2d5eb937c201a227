use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use wodi_collection::{CollectionError, CollectionKind, CollectionSpec, ConstrainedVec};

#[derive(Debug)]
enum Names {}

impl CollectionKind for Names {
    type Item = String;
    const SPEC: CollectionSpec = CollectionSpec::fixed("Names", 4);

    fn default_item(index: usize) -> Option<String> {
        Some(format!("name{index}"))
    }
}

#[derive(Debug)]
enum Broken {}

impl CollectionKind for Broken {
    type Item = u32;
    const SPEC: CollectionSpec = CollectionSpec::fixed("Broken", 2);

    fn default_item(_index: usize) -> Option<u32> {
        None
    }
}

#[derive(Debug)]
enum Inverted {}

impl CollectionKind for Inverted {
    type Item = u32;
    const SPEC: CollectionSpec = CollectionSpec::bounded("Inverted", 3, 1);

    fn default_item(_index: usize) -> Option<u32> {
        Some(0)
    }
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn test_new_fills_defaults() {
    let list = ConstrainedVec::<Names>::new().unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list.as_slice(), names(&["name0", "name1", "name2", "name3"]).as_slice());
    assert_eq!(list[2], "name2");
}

#[test]
fn test_defective_kind_is_invariant_violation() {
    let err = ConstrainedVec::<Broken>::new().unwrap_err();
    assert!(matches!(err, CollectionError::InvariantViolation { .. }));

    let err = ConstrainedVec::<Broken>::try_from_items([1, 2]).unwrap_err();
    assert!(matches!(err, CollectionError::InvariantViolation { .. }));

    let err = ConstrainedVec::<Inverted>::new().unwrap_err();
    assert!(matches!(err, CollectionError::InvariantViolation { .. }));
}

#[test]
fn test_try_from_items_checks_length() {
    let list = ConstrainedVec::<Names>::try_from_items(names(&["a", "b", "c", "d"])).unwrap();
    assert_eq!(list.get(3).map(String::as_str), Some("d"));

    let err = ConstrainedVec::<Names>::try_from_items(names(&["a", "b", "c"])).unwrap_err();
    assert!(matches!(err, CollectionError::LengthMismatch { .. }));
    assert_eq!(err.kind(), "LengthMismatch");
    assert!(err.to_string().contains("(Names)"));
}

#[test]
fn test_try_from_options_rejects_missing() {
    let err = ConstrainedVec::<Names>::try_from_options(None::<Vec<Option<String>>>).unwrap_err();
    assert!(matches!(err, CollectionError::NullCollection { .. }));

    let items = vec![Some("a".to_owned()), None, Some("c".to_owned()), Some("d".to_owned())];
    let err = ConstrainedVec::<Names>::try_from_options(Some(items)).unwrap_err();
    assert!(matches!(err, CollectionError::NullElement { .. }));
    assert!(err.to_string().contains("index 1"));
}

#[test]
fn test_set_and_bounds() {
    let mut list = ConstrainedVec::<Names>::new().unwrap();
    list.set(1, "Alice".to_owned()).unwrap();
    assert_eq!(list[1], "Alice");

    let err = list.set(4, "Bob".to_owned()).unwrap_err();
    assert!(matches!(err, CollectionError::IndexOutOfRange { .. }));
    assert_eq!(list.len(), 4);

    let err = list.set_option(0, None).unwrap_err();
    assert!(matches!(err, CollectionError::NullElement { .. }));
    assert_eq!(list[0], "name0");

    assert!(list.try_get(4).is_err());
    assert!(list.get(4).is_none());
}

#[test]
fn test_clear_restores_defaults() {
    let mut list = ConstrainedVec::<Names>::try_from_items(names(&["a", "b", "c", "d"])).unwrap();
    list.clear().unwrap();
    assert_eq!(list, ConstrainedVec::<Names>::new().unwrap());
}

#[test]
fn test_get_range_errors() {
    let list = ConstrainedVec::<Names>::new().unwrap();

    assert_eq!(list.get_range(1, 2).unwrap(), names(&["name1", "name2"]));
    assert!(list.get_range(4, 0).unwrap().is_empty());

    assert!(matches!(list.get_range(5, 0), Err(CollectionError::IndexOutOfRange { .. })));
    assert!(matches!(list.get_range(0, 5), Err(CollectionError::CountOutOfRange { .. })));
    assert!(matches!(list.get_range(3, 2), Err(CollectionError::InvalidRange { .. })));
}

#[test]
fn test_fixed_kind_refuses_length_changes() {
    let mut list = ConstrainedVec::<Names>::new().unwrap();
    assert!(matches!(list.push("x".to_owned()), Err(CollectionError::CapacityExceeded { .. })));
    assert!(matches!(list.remove(0), Err(CollectionError::CapacityUnderflow { .. })));
    assert_eq!(list.len(), 4);
}

#[test]
fn test_observers_fire_and_unsubscribe() {
    let mut list = ConstrainedVec::<Names>::new().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let clears = Arc::new(AtomicUsize::new(0));

    let replaced = {
        let seen = Arc::clone(&seen);
        list.on_replaced(move |index, item: &String| seen.lock().push((index, item.clone())))
    };
    {
        let clears = Arc::clone(&clears);
        list.on_cleared(move || {
            clears.fetch_add(1, Ordering::SeqCst);
        });
    }
    assert_eq!(list.observer_count(), 2);

    list.set(2, "x".to_owned()).unwrap();
    list.clear().unwrap();
    assert_eq!(seen.lock().as_slice(), &[(2, "x".to_owned())]);
    assert_eq!(clears.load(Ordering::SeqCst), 1);

    assert!(list.unsubscribe(replaced));
    assert!(!list.unsubscribe(replaced));
    list.set(0, "y".to_owned()).unwrap();
    assert_eq!(seen.lock().len(), 1);
}

#[test]
fn test_failed_set_does_not_notify() {
    let mut list = ConstrainedVec::<Names>::new().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    {
        let calls = Arc::clone(&calls);
        list.on_replaced(move |_, _| {
            calls.fetch_add(1, Ordering::SeqCst);
        });
    }

    assert!(list.set(9, "x".to_owned()).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_clone_is_equal_and_drops_observers() {
    let mut original = ConstrainedVec::<Names>::new().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    {
        let calls = Arc::clone(&calls);
        original.on_replaced(move |_, _| {
            calls.fetch_add(1, Ordering::SeqCst);
        });
    }

    let mut copy = original.clone();
    assert_eq!(copy, original);
    assert_eq!(copy.observer_count(), 0);

    copy.set(0, "changed".to_owned()).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_ne!(copy, original);
    assert_eq!(original[0], "name0");
}

#[test]
fn test_serde_validates_length() {
    let list = ConstrainedVec::<Names>::new().unwrap();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, r#"["name0","name1","name2","name3"]"#);

    let back: ConstrainedVec<Names> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);

    assert!(serde_json::from_str::<ConstrainedVec<Names>>(r#"["a","b"]"#).is_err());
    assert!(serde_json::from_str::<ConstrainedVec<Names>>(r#"["a",null,"c","d"]"#).is_err());
    assert!(serde_json::from_str::<ConstrainedVec<Names>>("null").is_err());
}
