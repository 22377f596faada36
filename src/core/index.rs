// --- File: src/core/index.rs
use crate::core::types::{FirstNameEntry, Gender, LastNameEntry};
use crate::error::{NameError, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

// --- FirstNameIndex: reading -> entry, one per gender and variant ---

/// Given names keyed by reading, iterated in file order.
/// Re-inserting a reading replaces its entry but keeps its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirstNameIndex {
    entries: IndexMap<String, FirstNameEntry>,
}

impl FirstNameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, reading: String, entry: FirstNameEntry) {
        self.entries.insert(reading, entry);
    }

    pub fn get(&self, reading: &str) -> Option<&FirstNameEntry> {
        self.entries.get(reading)
    }

    pub fn contains(&self, reading: &str) -> bool {
        self.entries.contains_key(reading)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FirstNameEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, FirstNameEntry)> for FirstNameIndex {
    fn from_iter<I: IntoIterator<Item = (String, FirstNameEntry)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (reading, entry) in iter {
            index.insert(reading, entry);
        }
        index
    }
}

// --- LastNameIndex: kanji -> entry, shared across variants ---

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastNameIndex {
    entries: IndexMap<String, LastNameEntry>,
}

impl LastNameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, kanji: String, entry: LastNameEntry) {
        self.entries.insert(kanji, entry);
    }

    pub fn get(&self, kanji: &str) -> Option<&LastNameEntry> {
        self.entries.get(kanji)
    }

    pub fn contains(&self, kanji: &str) -> bool {
        self.entries.contains_key(kanji)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LastNameEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, LastNameEntry)> for LastNameIndex {
    fn from_iter<I: IntoIterator<Item = (String, LastNameEntry)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (kanji, entry) in iter {
            index.insert(kanji, entry);
        }
        index
    }
}

// --- Dataset: the loaded tuple ---

/// The indices for one (variant, include-last-names) load.
/// Immutable once built; handed out behind `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub male: Arc<FirstNameIndex>,
    pub female: Arc<FirstNameIndex>,
    pub last_names: Option<Arc<LastNameIndex>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub male_readings: usize,
    pub female_readings: usize,
    pub male_kanji_variants: usize,
    pub female_kanji_variants: usize,
    pub last_names: Option<usize>,
}

impl Dataset {
    pub fn first_names(&self, gender: Gender) -> &FirstNameIndex {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    pub fn last_names(&self) -> Result<&LastNameIndex> {
        self.last_names.as_deref().ok_or(NameError::MissingLastNames)
    }

    pub fn stats(&self) -> DatasetStats {
        let variants = |index: &FirstNameIndex| -> usize {
            index.iter().map(|(_, e)| e.kanji_variants.len()).sum()
        };
        DatasetStats {
            male_readings: self.male.len(),
            female_readings: self.female.len(),
            male_kanji_variants: variants(&self.male),
            female_kanji_variants: variants(&self.female),
            last_names: self.last_names.as_ref().map(|l| l.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(romanization: &str, kanji: &[&str]) -> FirstNameEntry {
        FirstNameEntry {
            romanization: romanization.to_string(),
            kanji_variants: kanji.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn duplicate_reading_last_row_wins_in_first_position() {
        let index: FirstNameIndex = vec![
            ("たろう".to_string(), entry("tarou", &["太郎"])),
            ("じろう".to_string(), entry("jirou", &["次郎"])),
            ("たろう".to_string(), entry("tarou", &["太朗"])),
        ]
        .into_iter()
        .collect();

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("たろう").unwrap().kanji_variants, vec!["太朗"]);
        let order: Vec<&str> = index.iter().map(|(r, _)| r).collect();
        assert_eq!(order, vec!["たろう", "じろう"]);
    }

    #[test]
    fn dataset_without_surnames_reports_missing() {
        let dataset = Dataset {
            male: Arc::new(FirstNameIndex::new()),
            female: Arc::new(FirstNameIndex::new()),
            last_names: None,
        };
        assert!(matches!(dataset.last_names(), Err(NameError::MissingLastNames)));
        assert_eq!(dataset.stats().last_names, None);
    }

    #[test]
    fn stats_count_variants() {
        let male: FirstNameIndex = vec![
            ("たろう".to_string(), entry("tarou", &["太郎", "太朗"])),
            ("ぬい".to_string(), entry("nui", &[])),
        ]
        .into_iter()
        .collect();
        let dataset = Dataset {
            male: Arc::new(male),
            female: Arc::new(FirstNameIndex::new()),
            last_names: Some(Arc::new(LastNameIndex::new())),
        };
        let stats = dataset.stats();
        assert_eq!(stats.male_readings, 2);
        assert_eq!(stats.male_kanji_variants, 2);
        assert_eq!(stats.last_names, Some(0));
    }
}
