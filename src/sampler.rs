// File: src/sampler.rs
use crate::core::index::{FirstNameIndex, LastNameIndex};
use crate::core::types::NameSample;
use crate::error::{NameError, Result};
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

/// Picks a reading uniformly among entries that have at least one kanji
/// variant, then one of its variants uniformly.
pub fn random_first_name<R: Rng + ?Sized>(
    index: &FirstNameIndex,
    rng: &mut R,
) -> Result<NameSample> {
    let (reading, entry) = index
        .iter()
        .filter(|(_, entry)| !entry.kanji_variants.is_empty())
        .choose(rng)
        .ok_or(NameError::EmptyPool("first names"))?;
    let kanji = entry
        .kanji_variants
        .choose(rng)
        .ok_or(NameError::EmptyPool("kanji variants"))?;

    Ok(NameSample {
        kanji: kanji.clone(),
        reading: reading.to_string(),
    })
}

/// Surname and given name sampled independently, joined by a single space.
pub fn random_full_name<R: Rng + ?Sized>(
    last_names: &LastNameIndex,
    first_names: &FirstNameIndex,
    rng: &mut R,
) -> Result<NameSample> {
    let (last_kanji, last) = last_names
        .iter()
        .choose(rng)
        .ok_or(NameError::EmptyPool("last names"))?;
    let first = random_first_name(first_names, rng)?;

    Ok(NameSample {
        kanji: format!("{} {}", last_kanji, first.kanji),
        reading: format!("{} {}", last.reading, first.reading),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{FirstNameEntry, LastNameEntry};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn first_names() -> FirstNameIndex {
        vec![
            ("たろう", "tarou", vec!["太郎", "太朗"]),
            ("ぬい", "nui", vec![]),
            ("はなこ", "hanako", vec!["花子"]),
        ]
        .into_iter()
        .map(|(r, en, kanji)| {
            (
                r.to_string(),
                FirstNameEntry {
                    romanization: en.to_string(),
                    kanji_variants: kanji.into_iter().map(String::from).collect(),
                },
            )
        })
        .collect()
    }

    fn last_names() -> LastNameIndex {
        vec![("佐藤", "さとう"), ("鈴木", "すずき")]
            .into_iter()
            .map(|(k, r)| {
                (
                    k.to_string(),
                    LastNameEntry {
                        reading: r.to_string(),
                        romanization: String::new(),
                        population_estimate: 1,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn sampled_kanji_belongs_to_its_reading() {
        let index = first_names();
        let mut rng = StdRng::seed_from_u64(7);
        let mut readings = HashSet::new();
        for _ in 0..200 {
            let sample = random_first_name(&index, &mut rng).unwrap();
            let entry = index.get(&sample.reading).unwrap();
            assert!(entry.kanji_variants.contains(&sample.kanji));
            readings.insert(sample.reading);
        }
        assert!(!readings.contains("ぬい"));
        assert_eq!(readings.len(), 2);
    }

    #[test]
    fn entries_without_kanji_only_is_empty_pool() {
        let index: FirstNameIndex = vec![(
            "ぬい".to_string(),
            FirstNameEntry {
                romanization: "nui".to_string(),
                kanji_variants: vec![],
            },
        )]
        .into_iter()
        .collect();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            random_first_name(&index, &mut rng),
            Err(NameError::EmptyPool(_))
        ));
    }

    #[test]
    fn full_name_is_space_joined() {
        let mut rng = StdRng::seed_from_u64(42);
        let last = last_names();
        let first = first_names();
        for _ in 0..50 {
            let sample = random_full_name(&last, &first, &mut rng).unwrap();
            let (surname, given) = sample.kanji.split_once(' ').unwrap();
            let (surname_reading, given_reading) = sample.reading.split_once(' ').unwrap();
            assert_eq!(last.get(surname).unwrap().reading, surname_reading);
            assert!(first
                .get(given_reading)
                .unwrap()
                .kanji_variants
                .iter()
                .any(|k| k == given));
        }
    }

    #[test]
    fn full_name_needs_surnames() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = random_full_name(&LastNameIndex::new(), &first_names(), &mut rng).unwrap_err();
        assert!(matches!(err, NameError::EmptyPool("last names")));
    }
}
