// File: src/validation.rs
use crate::core::index::{Dataset, FirstNameIndex};
use crate::core::types::Gender;

/// True iff `reading` is a key of the selected index(es) and `kanji` is one
/// of that entry's variants. No filter means either gender.
pub fn is_valid_name(
    dataset: &Dataset,
    kanji: &str,
    reading: &str,
    gender: Option<Gender>,
) -> bool {
    Gender::selected(gender)
        .iter()
        .any(|&g| has_pair(dataset.first_names(g), kanji, reading))
}

fn has_pair(index: &FirstNameIndex, kanji: &str, reading: &str) -> bool {
    index
        .get(reading)
        .map_or(false, |entry| entry.kanji_variants.iter().any(|k| k == kanji))
}
