// File: src/loader.rs
use crate::core::index::{Dataset, FirstNameIndex, LastNameIndex};
use crate::core::record::{parse_first_name, parse_last_name};
use crate::core::types::{DatasetVariant, Gender};
use crate::error::Result;
use crate::resources::{ResourceId, ResourceProvider};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::io::Read;
use std::sync::Arc;

/// Reads resources end to end and builds the lookup indices.
/// Does no caching; see [`crate::cache::DatasetCache`].
#[derive(Debug, Clone)]
pub struct DatasetLoader<R> {
    resources: R,
}

impl<R: ResourceProvider> DatasetLoader<R> {
    pub fn new(resources: R) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &R {
        &self.resources
    }

    pub fn load_first_names(&self, id: ResourceId) -> Result<FirstNameIndex> {
        let reader = self.resources.open(id)?;
        let (rows, skipped) = read_rows(reader, parse_first_name)?;
        log_loaded(id, rows.len(), skipped);
        Ok(rows.into_iter().collect())
    }

    pub fn load_last_names(&self) -> Result<LastNameIndex> {
        let id = ResourceId::LastNames;
        let reader = self.resources.open(id)?;
        let (rows, skipped) = read_rows(reader, parse_last_name)?;
        log_loaded(id, rows.len(), skipped);
        Ok(rows.into_iter().collect())
    }

    /// Both gender indices for `variant`.
    pub fn load_first_name_pair(
        &self,
        variant: DatasetVariant,
    ) -> Result<(FirstNameIndex, FirstNameIndex)> {
        let male = self.load_first_names(ResourceId::FirstNames {
            gender: Gender::Male,
            variant,
        })?;
        let female = self.load_first_names(ResourceId::FirstNames {
            gender: Gender::Female,
            variant,
        })?;
        Ok((male, female))
    }

    pub fn load_dataset(
        &self,
        variant: DatasetVariant,
        include_last_names: bool,
    ) -> Result<Dataset> {
        let (male, female) = self.load_first_name_pair(variant)?;
        let last_names = if include_last_names {
            Some(Arc::new(self.load_last_names()?))
        } else {
            None
        };
        Ok(Dataset {
            male: Arc::new(male),
            female: Arc::new(female),
            last_names,
        })
    }

    /// Like [`load_dataset`](Self::load_dataset) with a textual variant.
    /// An unknown variant fails before any resource is opened.
    pub fn load_dataset_named(&self, variant: &str, include_last_names: bool) -> Result<Dataset> {
        let variant: DatasetVariant = variant.parse()?;
        self.load_dataset(variant, include_last_names)
    }
}

/// Parses every row, returning the admitted rows (file order) and the skip count.
fn read_rows<T>(
    reader: impl Read,
    parse: fn(&StringRecord) -> Option<(String, T)>,
) -> Result<(Vec<(String, T)>, usize)> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        match parse(&record) {
            Some(row) => rows.push(row),
            None => skipped += 1,
        }
    }
    Ok((rows, skipped))
}

fn log_loaded(id: ResourceId, rows: usize, skipped: usize) {
    info!("loaded {} rows from {}", rows, id);
    if skipped > 0 {
        debug!("skipped {} malformed rows in {}", skipped, id);
    }
}
