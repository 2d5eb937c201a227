use proptest::prelude::*;
use wodi_value::{TextEncoding, int_kind, str_kind};

int_kind! {
    pub Level(LevelKind) { min: 5, max: 20 }
}

str_kind! {
    pub Capped(CappedKind).allow_empty().max_encoded_len(TextEncoding::Windows1252, 10);
}

proptest! {
    #[test]
    fn integer_construction_succeeds_iff_within_bounds(value in any::<i32>()) {
        let within = (5..=20).contains(&value);
        prop_assert_eq!(Level::new(value).is_ok(), within);
    }

    #[test]
    fn ascii_length_limit_matches_char_count(text in "[a-z]{0,20}") {
        prop_assert_eq!(Capped::new(text.as_str()).is_ok(), text.len() <= 10);
    }
}
