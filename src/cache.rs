// File: src/cache.rs
use crate::core::index::{Dataset, FirstNameIndex, LastNameIndex};
use crate::core::types::DatasetVariant;
use crate::error::Result;
use crate::loader::DatasetLoader;
use crate::resources::ResourceProvider;
use log::{debug, trace};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Where the cache gets its indices from on a miss.
pub trait DatasetSource {
    fn first_names(&self, variant: DatasetVariant) -> Result<(FirstNameIndex, FirstNameIndex)>;
    fn last_names(&self) -> Result<LastNameIndex>;
}

impl<R: ResourceProvider> DatasetSource for DatasetLoader<R> {
    fn first_names(&self, variant: DatasetVariant) -> Result<(FirstNameIndex, FirstNameIndex)> {
        self.load_first_name_pair(variant)
    }

    fn last_names(&self) -> Result<LastNameIndex> {
        self.load_last_names()
    }
}

type CacheKey = (DatasetVariant, bool);

#[derive(Default)]
struct CacheState {
    datasets: HashMap<CacheKey, Arc<Dataset>>,
    /// One surname index for every key that includes last names.
    last_names: Option<Arc<LastNameIndex>>,
}

/// Memoizes loads per `(variant, include_last_names)`.
///
/// Entries are never evicted. A miss loads while holding the lock, so each
/// key is loaded at most once even with concurrent first access. The two keys
/// of one variant share their first-name indices.
pub struct DatasetCache<S> {
    source: S,
    state: Mutex<CacheState>,
}

impl<S: DatasetSource> DatasetCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn get(&self, variant: DatasetVariant, include_last_names: bool) -> Result<Arc<Dataset>> {
        let key = (variant, include_last_names);
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(dataset) = state.datasets.get(&key) {
            trace!("dataset cache hit: {:?}", key);
            return Ok(Arc::clone(dataset));
        }
        debug!("dataset cache miss: {:?}", key);

        let sibling = state
            .datasets
            .get(&(variant, !include_last_names))
            .map(|d| (Arc::clone(&d.male), Arc::clone(&d.female)));
        let (male, female) = match sibling {
            Some(pair) => pair,
            None => {
                let (male, female) = self.source.first_names(variant)?;
                (Arc::new(male), Arc::new(female))
            }
        };

        let last_names = if include_last_names {
            let shared = match &state.last_names {
                Some(existing) => Arc::clone(existing),
                None => Arc::new(self.source.last_names()?),
            };
            state.last_names = Some(Arc::clone(&shared));
            Some(shared)
        } else {
            None
        };

        let dataset = Arc::new(Dataset {
            male,
            female,
            last_names,
        });
        state.datasets.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Textual variant; an unknown one fails before the source is consulted.
    pub fn get_named(&self, variant: &str, include_last_names: bool) -> Result<Arc<Dataset>> {
        let variant: DatasetVariant = variant.parse()?;
        self.get(variant, include_last_names)
    }

    /// Number of cached keys (at most four).
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .datasets
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
