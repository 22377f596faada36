// src/core/types.rs
use crate::error::NameError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which first-name corpus to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DatasetVariant {
    /// Complete corpus ("org" files).
    #[default]
    Full,
    /// Popular names only ("opti" files).
    Curated,
}

impl DatasetVariant {
    pub const ALL: [DatasetVariant; 2] = [DatasetVariant::Full, DatasetVariant::Curated];

    /// Suffix used by the shipped resource names.
    pub fn suffix(self) -> &'static str {
        match self {
            DatasetVariant::Full => "org",
            DatasetVariant::Curated => "opti",
        }
    }
}

impl FromStr for DatasetVariant {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "org" | "full" => Ok(DatasetVariant::Full),
            "opti" | "curated" => Ok(DatasetVariant::Curated),
            other => Err(NameError::InvalidVariant(other.to_string())),
        }
    }
}

impl fmt::Display for DatasetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// The word used in resource names ("man" / "woman").
    pub fn resource_word(self) -> &'static str {
        match self {
            Gender::Male => "man",
            Gender::Female => "woman",
        }
    }

    /// Genders selected by an optional filter; `None` means both.
    pub fn selected(filter: Option<Gender>) -> &'static [Gender] {
        match filter {
            Some(Gender::Male) => &[Gender::Male],
            Some(Gender::Female) => &[Gender::Female],
            None => &Gender::ALL,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "male",
            Gender::Female => "female",
        })
    }
}

/// A given name, keyed by its reading in the owning index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstNameEntry {
    pub romanization: String,
    /// Kanji spellings in file order. May be empty.
    pub kanji_variants: Vec<String>,
}

/// A surname, keyed by its kanji in the owning index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastNameEntry {
    pub reading: String,
    pub romanization: String,
    pub population_estimate: u64,
}

/// Whether a query string must equal the field or only occur inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    #[default]
    Exact,
    Partial,
}

impl MatchMode {
    pub fn from_partial(partial: bool) -> Self {
        if partial {
            MatchMode::Partial
        } else {
            MatchMode::Exact
        }
    }

    pub fn matches(self, candidate: &str, query: &str) -> bool {
        match self {
            MatchMode::Exact => candidate == query,
            MatchMode::Partial => candidate.contains(query),
        }
    }
}

/// Which surname field a last-name search compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchBy {
    #[default]
    Kanji,
    Reading,
}

// --- Result rows ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingMatch {
    pub reading: String,
    pub romanization: String,
    pub kanji_variants: Vec<String>,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanjiMatch {
    pub reading: String,
    pub romanization: String,
    pub kanji: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LastNameMatch {
    pub kanji: String,
    pub reading: String,
    pub romanization: String,
    pub population_estimate: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingCandidate {
    pub reading: String,
    pub romanization: String,
}

/// A sampled name. For full names both fields hold "surname given".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameSample {
    pub kanji: String,
    pub reading: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_parses_both_spellings() {
        assert_eq!("org".parse::<DatasetVariant>().unwrap(), DatasetVariant::Full);
        assert_eq!("full".parse::<DatasetVariant>().unwrap(), DatasetVariant::Full);
        assert_eq!("opti".parse::<DatasetVariant>().unwrap(), DatasetVariant::Curated);
        assert_eq!("curated".parse::<DatasetVariant>().unwrap(), DatasetVariant::Curated);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let err = "invalid".parse::<DatasetVariant>().unwrap_err();
        assert!(matches!(err, NameError::InvalidVariant(ref v) if v == "invalid"));
        assert!(err.to_string().contains("'org' or 'opti'"));
    }

    #[test]
    fn match_mode_rules() {
        assert!(MatchMode::Exact.matches("たろう", "たろう"));
        assert!(!MatchMode::Exact.matches("こうたろう", "たろう"));
        assert!(MatchMode::Partial.matches("こうたろう", "たろう"));
        assert!(!MatchMode::Partial.matches("はなこ", "たろう"));
    }

    #[test]
    fn gender_filter_selection() {
        assert_eq!(Gender::selected(None), &[Gender::Male, Gender::Female]);
        assert_eq!(Gender::selected(Some(Gender::Female)), &[Gender::Female]);
    }
}
