// File: src/query.rs
//! Searches over loaded indices. Results follow index (file) order unless
//! stated otherwise; surname results are ranked by population.

use crate::core::index::{Dataset, FirstNameIndex, LastNameIndex};
use crate::core::types::{
    FirstNameEntry, Gender, KanjiMatch, LastNameEntry, LastNameMatch, MatchMode, ReadingCandidate,
    ReadingMatch, SearchBy,
};
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Maps a raw count to a limit; `0` means unlimited.
pub fn limit_from(n: usize) -> Option<NonZeroUsize> {
    NonZeroUsize::new(n)
}

pub fn search_by_reading(
    dataset: &Dataset,
    reading: &str,
    gender: Option<Gender>,
    mode: MatchMode,
) -> Vec<ReadingMatch> {
    let mut results = Vec::new();
    for &g in Gender::selected(gender) {
        let index = dataset.first_names(g);
        match mode {
            MatchMode::Exact => {
                if let Some(entry) = index.get(reading) {
                    results.push(reading_match(reading, entry, g));
                }
            }
            MatchMode::Partial => results.extend(
                index
                    .iter()
                    .filter(|(r, _)| mode.matches(r, reading))
                    .map(|(r, entry)| reading_match(r, entry, g)),
            ),
        }
    }
    results
}

/// One row per matching kanji variant.
pub fn search_by_kanji(
    dataset: &Dataset,
    kanji: &str,
    gender: Option<Gender>,
    mode: MatchMode,
) -> Vec<KanjiMatch> {
    let mut results = Vec::new();
    for &g in Gender::selected(gender) {
        for (reading, entry) in dataset.first_names(g).iter() {
            for variant in &entry.kanji_variants {
                if mode.matches(variant, kanji) {
                    results.push(KanjiMatch {
                        reading: reading.to_string(),
                        romanization: entry.romanization.clone(),
                        kanji: variant.clone(),
                        gender: g,
                    });
                }
            }
        }
    }
    results
}

/// Matches sorted by population, descending; ties keep index order.
pub fn search_last_name(
    last_names: &LastNameIndex,
    query: &str,
    by: SearchBy,
    mode: MatchMode,
    limit: Option<NonZeroUsize>,
) -> Vec<LastNameMatch> {
    let matches = last_names.iter().filter(|(kanji, entry)| {
        let field = match by {
            SearchBy::Kanji => *kanji,
            SearchBy::Reading => entry.reading.as_str(),
        };
        mode.matches(field, query)
    });
    rank(matches, limit)
}

/// Every surname with at least `min_count` people, ranked like [`search_last_name`].
pub fn get_last_names(
    last_names: &LastNameIndex,
    limit: Option<NonZeroUsize>,
    min_count: Option<u64>,
) -> Vec<LastNameMatch> {
    let min_count = min_count.unwrap_or(0);
    rank(
        last_names
            .iter()
            .filter(|(_, entry)| entry.population_estimate >= min_count),
        limit,
    )
}

/// The first `top` entries of an index, in file order.
pub fn get_popular_names(index: &FirstNameIndex, gender: Gender, top: usize) -> Vec<ReadingMatch> {
    index
        .iter()
        .take(top)
        .map(|(reading, entry)| reading_match(reading, entry, gender))
        .collect()
}

/// Exact kanji search, deduplicated by reading (first occurrence kept).
pub fn get_readings_for_kanji(
    dataset: &Dataset,
    kanji: &str,
    gender: Option<Gender>,
) -> Vec<ReadingCandidate> {
    let mut seen = HashSet::new();
    search_by_kanji(dataset, kanji, gender, MatchMode::Exact)
        .into_iter()
        .filter(|m| seen.insert(m.reading.clone()))
        .map(|m| ReadingCandidate {
            reading: m.reading,
            romanization: m.romanization,
        })
        .collect()
}

fn reading_match(reading: &str, entry: &FirstNameEntry, gender: Gender) -> ReadingMatch {
    ReadingMatch {
        reading: reading.to_string(),
        romanization: entry.romanization.clone(),
        kanji_variants: entry.kanji_variants.clone(),
        gender,
    }
}

fn rank<'a>(
    rows: impl Iterator<Item = (&'a str, &'a LastNameEntry)>,
    limit: Option<NonZeroUsize>,
) -> Vec<LastNameMatch> {
    let mut results: Vec<LastNameMatch> = rows
        .map(|(kanji, entry)| LastNameMatch {
            kanji: kanji.to_string(),
            reading: entry.reading.clone(),
            romanization: entry.romanization.clone(),
            population_estimate: entry.population_estimate,
        })
        .collect();
    // Stable, so equal counts stay in index order.
    results.sort_by(|a, b| b.population_estimate.cmp(&a.population_estimate));
    if let Some(limit) = limit {
        results.truncate(limit.get());
    }
    results
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::types::DatasetVariant;
    use crate::loader::DatasetLoader;
    use crate::resources::{MemoryResources, ResourceId};

    pub(crate) fn sample_resources() -> MemoryResources {
        let first = |gender, variant| ResourceId::FirstNames { gender, variant };
        MemoryResources::new()
            .with(
                first(Gender::Male, DatasetVariant::Full),
                "たろう,tarou,太郎,太朗\nこうたろう,koutarou,幸太郎,光太郎\n\
                 ゆう,yuu,優,悠\nたかし,takashi,太郎\nぬい,nui\n",
            )
            .with(
                first(Gender::Female, DatasetVariant::Full),
                "はなこ,hanako,花子,華子\nゆう,yuu,優,夕\nゆうこ,yuuko,優子,裕子\n",
            )
            .with(
                first(Gender::Male, DatasetVariant::Curated),
                "たろう,tarou,太郎\nゆう,yuu,優\n",
            )
            .with(first(Gender::Female, DatasetVariant::Curated), "はなこ,hanako,花子\n")
            .with(
                ResourceId::LastNames,
                "佐藤,1887000,さとう,satou\n鈴木,1806000,すずき,suzuki\n\
                 高橋,1421000,たかはし,takahashi\n田中,1343000,たなか,tanaka\n\
                 佐東,1400,さとう,satou\n里,1400,さと,sato\n",
            )
    }

    fn dataset() -> Dataset {
        DatasetLoader::new(sample_resources())
            .load_dataset(DatasetVariant::Full, true)
            .unwrap()
    }

    #[test]
    fn exact_reading_search_scans_both_genders() {
        let results = search_by_reading(&dataset(), "ゆう", None, MatchMode::Exact);
        let genders: Vec<Gender> = results.iter().map(|r| r.gender).collect();
        assert_eq!(genders, vec![Gender::Male, Gender::Female]);
        assert_eq!(results[1].kanji_variants, vec!["優", "夕"]);
    }

    #[test]
    fn partial_reading_search_respects_filter_and_order() {
        let results =
            search_by_reading(&dataset(), "たろう", Some(Gender::Male), MatchMode::Partial);
        let readings: Vec<&str> = results.iter().map(|r| r.reading.as_str()).collect();
        assert_eq!(readings, vec!["たろう", "こうたろう"]);
    }

    #[test]
    fn no_reading_match() {
        assert!(search_by_reading(&dataset(), "zzzzzzz", None, MatchMode::Partial).is_empty());
    }

    #[test]
    fn kanji_search_yields_row_per_variant() {
        let results = search_by_kanji(&dataset(), "太郎", Some(Gender::Male), MatchMode::Partial);
        let pairs: Vec<(&str, &str)> = results
            .iter()
            .map(|r| (r.reading.as_str(), r.kanji.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("たろう", "太郎"),
                ("こうたろう", "幸太郎"),
                ("こうたろう", "光太郎"),
                ("たかし", "太郎"),
            ]
        );
    }

    #[test]
    fn exact_kanji_search() {
        let results = search_by_kanji(&dataset(), "優", None, MatchMode::Exact);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.kanji == "優"));
    }

    #[test]
    fn satou_by_kanji() {
        let ds = dataset();
        let results = search_last_name(
            ds.last_names().unwrap(),
            "佐藤",
            SearchBy::Kanji,
            MatchMode::Exact,
            None,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].reading, "さとう");
        assert_eq!(results[0].romanization, "satou");
        assert!(results[0].population_estimate > 0);
    }

    #[test]
    fn reading_search_ranked_and_limited() {
        let ds = dataset();
        let results = search_last_name(
            ds.last_names().unwrap(),
            "さと",
            SearchBy::Reading,
            MatchMode::Partial,
            limit_from(2),
        );
        let kanji: Vec<&str> = results.iter().map(|r| r.kanji.as_str()).collect();
        assert_eq!(kanji, vec!["佐藤", "佐東"]);
    }

    #[test]
    fn zero_limit_means_unlimited() {
        assert_eq!(limit_from(0), None);
        let ds = dataset();
        let all = get_last_names(ds.last_names().unwrap(), limit_from(0), None);
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn last_names_ranked_with_stable_ties() {
        let ds = dataset();
        let ranked = get_last_names(ds.last_names().unwrap(), None, None);
        assert_eq!(ranked[0].kanji, "佐藤");
        assert!(ranked
            .windows(2)
            .all(|w| w[0].population_estimate >= w[1].population_estimate));
        let tail: Vec<&str> = ranked[4..].iter().map(|r| r.kanji.as_str()).collect();
        assert_eq!(tail, vec!["佐東", "里"]);
    }

    #[test]
    fn last_names_min_count_filter() {
        let ds = dataset();
        let ranked = get_last_names(ds.last_names().unwrap(), limit_from(10), Some(1_500_000));
        let kanji: Vec<&str> = ranked.iter().map(|r| r.kanji.as_str()).collect();
        assert_eq!(kanji, vec!["佐藤", "鈴木"]);
    }

    #[test]
    fn popular_names_take_file_order() {
        let ds = dataset();
        let top = get_popular_names(&ds.male, Gender::Male, 2);
        let readings: Vec<&str> = top.iter().map(|r| r.reading.as_str()).collect();
        assert_eq!(readings, vec!["たろう", "こうたろう"]);
    }

    #[test]
    fn readings_for_kanji_are_unique() {
        let ds = dataset();
        let readings = get_readings_for_kanji(&ds, "優", None);
        assert_eq!(
            readings,
            vec![ReadingCandidate {
                reading: "ゆう".to_string(),
                romanization: "yuu".to_string()
            }]
        );
        let taro = get_readings_for_kanji(&ds, "太郎", Some(Gender::Male));
        let r: Vec<&str> = taro.iter().map(|c| c.reading.as_str()).collect();
        assert_eq!(r, vec!["たろう", "たかし"]);
    }
}
