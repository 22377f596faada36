use crate::cache::{DatasetCache, DatasetSource};
use crate::config::Config;
use crate::core::index::Dataset;
use crate::core::types::{
    DatasetVariant, Gender, KanjiMatch, LastNameMatch, MatchMode, NameSample, ReadingCandidate,
    ReadingMatch, SearchBy,
};
use crate::error::Result;
use crate::loader::DatasetLoader;
use crate::resources::DirectoryResources;
use crate::{query, sampler, validation};
use rand::Rng;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

// Surname queries always read the full corpus.
const LAST_NAME_VARIANT: DatasetVariant = DatasetVariant::Full;

/// The public face of the crate: one cache, every query, sampler and
/// validator operation on top of it.
pub struct NameEngine<S = DatasetLoader<DirectoryResources>> {
    cache: DatasetCache<S>,
}

impl NameEngine {
    /// Reads CSV files from `dir` on first use.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(DatasetLoader::new(DirectoryResources::new(dir)))
    }

    pub fn from_config(config: &Config) -> Self {
        Self::from_dir(config.dataset_dir.clone())
    }
}

impl<S: DatasetSource> NameEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            cache: DatasetCache::new(source),
        }
    }

    pub fn cache(&self) -> &DatasetCache<S> {
        &self.cache
    }

    pub fn load_dataset(
        &self,
        variant: DatasetVariant,
        include_last_names: bool,
    ) -> Result<Arc<Dataset>> {
        self.cache.get(variant, include_last_names)
    }

    pub fn search_by_reading(
        &self,
        reading: &str,
        gender: Option<Gender>,
        variant: DatasetVariant,
        mode: MatchMode,
    ) -> Result<Vec<ReadingMatch>> {
        let dataset = self.cache.get(variant, false)?;
        Ok(query::search_by_reading(&dataset, reading, gender, mode))
    }

    pub fn search_by_kanji(
        &self,
        kanji: &str,
        gender: Option<Gender>,
        variant: DatasetVariant,
        mode: MatchMode,
    ) -> Result<Vec<KanjiMatch>> {
        let dataset = self.cache.get(variant, false)?;
        Ok(query::search_by_kanji(&dataset, kanji, gender, mode))
    }

    pub fn search_last_name(
        &self,
        query: &str,
        by: SearchBy,
        mode: MatchMode,
        limit: Option<NonZeroUsize>,
    ) -> Result<Vec<LastNameMatch>> {
        let dataset = self.cache.get(LAST_NAME_VARIANT, true)?;
        Ok(query::search_last_name(dataset.last_names()?, query, by, mode, limit))
    }

    pub fn get_last_names(
        &self,
        limit: Option<NonZeroUsize>,
        min_count: Option<u64>,
    ) -> Result<Vec<LastNameMatch>> {
        let dataset = self.cache.get(LAST_NAME_VARIANT, true)?;
        Ok(query::get_last_names(dataset.last_names()?, limit, min_count))
    }

    /// Leading entries of the curated corpus.
    pub fn get_popular_names(&self, gender: Gender, top: usize) -> Result<Vec<ReadingMatch>> {
        let dataset = self.cache.get(DatasetVariant::Curated, false)?;
        Ok(query::get_popular_names(dataset.first_names(gender), gender, top))
    }

    pub fn get_readings_for_kanji(
        &self,
        kanji: &str,
        gender: Option<Gender>,
        variant: DatasetVariant,
    ) -> Result<Vec<ReadingCandidate>> {
        let dataset = self.cache.get(variant, false)?;
        Ok(query::get_readings_for_kanji(&dataset, kanji, gender))
    }

    pub fn is_valid_name(
        &self,
        kanji: &str,
        reading: &str,
        gender: Option<Gender>,
        variant: DatasetVariant,
    ) -> Result<bool> {
        let dataset = self.cache.get(variant, false)?;
        Ok(validation::is_valid_name(&dataset, kanji, reading, gender))
    }

    /// A random given name with its reading. Callers wanting only the kanji
    /// take `sample.kanji`.
    pub fn random_first_name<R: Rng + ?Sized>(
        &self,
        gender: Gender,
        variant: DatasetVariant,
        rng: &mut R,
    ) -> Result<NameSample> {
        let dataset = self.cache.get(variant, false)?;
        sampler::random_first_name(dataset.first_names(gender), rng)
    }

    /// A random "surname given" name; `kanji` and `reading` are both filled,
    /// and dropping the reading is left to the caller.
    pub fn random_full_name<R: Rng + ?Sized>(
        &self,
        gender: Gender,
        variant: DatasetVariant,
        rng: &mut R,
    ) -> Result<NameSample> {
        let dataset = self.cache.get(variant, true)?;
        sampler::random_full_name(dataset.last_names()?, dataset.first_names(gender), rng)
    }
}
