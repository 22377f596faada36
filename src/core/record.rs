// File: src/core/record.rs
//! Row-level parsing of the dataset CSV files.
//!
//! Rows that are too short (or have an empty key) yield `None` and are
//! dropped by the loader. Nothing here fails.

use crate::core::types::{FirstNameEntry, LastNameEntry};
use csv::StringRecord;

const FIRST_NAME_MIN_FIELDS: usize = 2;
const LAST_NAME_MIN_FIELDS: usize = 4;

/// `reading,romanization[,kanji1,kanji2,...]`
pub fn parse_first_name(row: &StringRecord) -> Option<(String, FirstNameEntry)> {
    if row.len() < FIRST_NAME_MIN_FIELDS {
        return None;
    }
    let reading = row.get(0)?;
    if reading.is_empty() {
        return None;
    }
    let kanji_variants = row
        .iter()
        .skip(2)
        .filter(|kanji| !kanji.is_empty())
        .map(str::to_string)
        .collect();

    Some((
        reading.to_string(),
        FirstNameEntry {
            romanization: row.get(1)?.to_string(),
            kanji_variants,
        },
    ))
}

/// `kanji,population,reading,romanization`; extra fields are ignored.
pub fn parse_last_name(row: &StringRecord) -> Option<(String, LastNameEntry)> {
    if row.len() < LAST_NAME_MIN_FIELDS {
        return None;
    }
    let kanji = row.get(0)?;
    if kanji.is_empty() {
        return None;
    }

    Some((
        kanji.to_string(),
        LastNameEntry {
            reading: row.get(2)?.to_string(),
            romanization: row.get(3)?.to_string(),
            population_estimate: parse_population(row.get(1)?),
        },
    ))
}

/// Digits-only text becomes a count; anything else (signs, blanks, overflow) is 0.
/// Full-width digits (`０`..`９`) count as digits.
pub fn parse_population(text: &str) -> u64 {
    if text.is_empty() {
        return 0;
    }
    text.chars()
        .try_fold(0u64, |acc, c| {
            let digit = decimal_digit(c)?;
            acc.checked_mul(10)?.checked_add(digit)
        })
        .unwrap_or(0)
}

fn decimal_digit(c: char) -> Option<u64> {
    match c {
        '0'..='9' => Some(u64::from(c) - u64::from('0')),
        '０'..='９' => Some(u64::from(c) - u64::from('０')),
        _ => None,
    }
}
