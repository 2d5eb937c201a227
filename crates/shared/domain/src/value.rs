//! Validated scalar fields of WOLF RPG Editor project data.

use wodi_value::{TextEncoding, int_kind, str_kind};

int_kind! {
    /// Map number.
    pub MapId(MapIdKind) { min: 0, max: 9_999 }

    /// Common event number.
    pub CommonEventId(CommonEventIdKind) { min: 0, max: 9_999 }

    /// Slot of a common event self variable.
    pub SelfVariableIndex(SelfVariableIndexKind) { min: 0, max: 99 }

    /// Initial value of a numeric common event argument.
    pub ArgInitialValue(ArgInitialValueKind) { min: i32::MIN, max: i32::MAX }
}

str_kind! {
    pub CommonEventName(CommonEventNameKind).allow_empty();

    pub SelfVariableName(SelfVariableNameKind).allow_empty();

    /// Label of a common event argument.
    pub ArgName(ArgNameKind).allow_empty();

    /// Free-form note attached to a common event.
    pub CommonEventMemo(CommonEventMemoKind).allow_empty().allow_newline();

    /// Map file reference, e.g. `TitleMap.mps`. Names outside printable ASCII are accepted
    /// but reported, since older editor builds cannot open them.
    pub MapFileName(MapFileNameKind)
        .required_pattern(r"^[^\\/]+\.mps$")
        .advisory_pattern(r"^[\x20-\x7E]+$");

    /// Game title as stored in the project header.
    pub GameTitle(GameTitleKind).max_encoded_len(TextEncoding::ShiftJis, 128);

    /// Label of one branch of a choice command.
    pub ChoiceCaseName(ChoiceCaseNameKind).allow_empty();
}
