use wodi_collection::CollectionError;
use wodi_domain::list::{
    ArgDesc, ChoiceCaseList, MAX_CHOICE_CASES, NumberArgDescList, SELF_VARIABLE_COUNT,
    SelfVariableNameList, StringArgDescList,
};
use wodi_domain::value::{ArgInitialValue, ArgName, ChoiceCaseName, SelfVariableName};

#[test]
fn self_variable_names_start_blank() {
    let mut names = SelfVariableNameList::new().unwrap();
    assert_eq!(names.len(), SELF_VARIABLE_COUNT);
    assert!(names.iter().all(|name| name.as_str().is_empty()));

    names.set(99, SelfVariableName::new("counter").unwrap()).unwrap();
    assert_eq!(names[99].as_str(), "counter");
    assert!(matches!(
        names.set(SELF_VARIABLE_COUNT, SelfVariableName::new("x").unwrap()),
        Err(CollectionError::IndexOutOfRange { .. })
    ));

    names.clear().unwrap();
    assert_eq!(names, SelfVariableNameList::new().unwrap());
}

#[test]
fn arg_lists_hold_five_descriptions() {
    let mut numbers = NumberArgDescList::new().unwrap();
    let strings = StringArgDescList::new().unwrap();
    assert_eq!(numbers.len(), 5);
    assert_eq!(strings.len(), 5);

    let desc = ArgDesc::new(ArgName::new("HP").unwrap(), ArgInitialValue::new(-1).unwrap());
    numbers.set(0, desc.clone()).unwrap();
    assert_eq!(numbers.get_range(0, 1).unwrap(), vec![desc]);
    assert_eq!(numbers[1].initial_value.get(), 0);
}

#[test]
fn arg_list_serde_validates_length() {
    let numbers = NumberArgDescList::new().unwrap();
    let json = serde_json::to_value(&numbers).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(5));
    assert_eq!(json[0], serde_json::json!({ "name": "", "initial_value": 0 }));

    let back: NumberArgDescList = serde_json::from_value(json).unwrap();
    assert_eq!(back, numbers);

    let short = serde_json::json!([{ "name": "", "initial_value": 0 }]);
    assert!(serde_json::from_value::<NumberArgDescList>(short).is_err());
}

#[test]
fn choice_cases_grow_and_shrink() {
    let mut cases = ChoiceCaseList::new().unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].as_str(), "Choice 1");

    cases.adjust_length(3).unwrap();
    assert_eq!(cases[2].as_str(), "Choice 3");

    cases.adjust_length(MAX_CHOICE_CASES).unwrap();
    assert!(matches!(
        cases.push(ChoiceCaseName::new("extra").unwrap()),
        Err(CollectionError::CapacityExceeded { .. })
    ));

    cases.clear().unwrap();
    assert_eq!(cases.len(), 1);
    assert!(matches!(cases.pop(), Err(CollectionError::CapacityUnderflow { .. })));
}
