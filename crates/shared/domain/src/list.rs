//! Constrained lists of WOLF RPG Editor project data.

use crate::value::{ArgInitialValue, ArgName, ChoiceCaseName, SelfVariableName};
use serde::{Deserialize, Serialize};
use wodi_collection::{CollectionKind, CollectionSpec, ConstrainedVec};

/// Number of self variables every common event carries.
pub const SELF_VARIABLE_COUNT: usize = 100;
/// Number of numeric (and, separately, string) arguments of a common event.
pub const ARG_COUNT: usize = 5;
pub const MAX_CHOICE_CASES: usize = 10;

/// Declaration of one common event argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgDesc {
    pub name: ArgName,
    pub initial_value: ArgInitialValue,
}

impl ArgDesc {
    #[must_use]
    pub const fn new(name: ArgName, initial_value: ArgInitialValue) -> Self {
        Self { name, initial_value }
    }

    /// Unnamed argument starting at zero.
    fn blank() -> Option<Self> {
        Some(Self { name: ArgName::new("").ok()?, initial_value: ArgInitialValue::new(0).ok()? })
    }
}

#[derive(Debug)]
pub enum SelfVariableNameListKind {}

impl CollectionKind for SelfVariableNameListKind {
    type Item = SelfVariableName;
    const SPEC: CollectionSpec = CollectionSpec::fixed("SelfVariableNameList", SELF_VARIABLE_COUNT);

    fn default_item(_index: usize) -> Option<SelfVariableName> {
        SelfVariableName::new("").ok()
    }
}

/// Names of the self variables of one common event.
pub type SelfVariableNameList = ConstrainedVec<SelfVariableNameListKind>;

#[derive(Debug)]
pub enum NumberArgDescListKind {}

impl CollectionKind for NumberArgDescListKind {
    type Item = ArgDesc;
    const SPEC: CollectionSpec = CollectionSpec::fixed("NumberArgDescList", ARG_COUNT);

    fn default_item(_index: usize) -> Option<ArgDesc> {
        ArgDesc::blank()
    }
}

pub type NumberArgDescList = ConstrainedVec<NumberArgDescListKind>;

#[derive(Debug)]
pub enum StringArgDescListKind {}

impl CollectionKind for StringArgDescListKind {
    type Item = ArgDesc;
    const SPEC: CollectionSpec = CollectionSpec::fixed("StringArgDescList", ARG_COUNT);

    fn default_item(_index: usize) -> Option<ArgDesc> {
        ArgDesc::blank()
    }
}

pub type StringArgDescList = ConstrainedVec<StringArgDescListKind>;

#[derive(Debug)]
pub enum ChoiceCaseListKind {}

impl CollectionKind for ChoiceCaseListKind {
    type Item = ChoiceCaseName;
    const SPEC: CollectionSpec = CollectionSpec::bounded("ChoiceCaseList", 1, MAX_CHOICE_CASES);

    fn default_item(index: usize) -> Option<ChoiceCaseName> {
        ChoiceCaseName::new(format!("Choice {}", index + 1)).ok()
    }
}

/// Branch labels of a choice command.
pub type ChoiceCaseList = ConstrainedVec<ChoiceCaseListKind>;
