// src/lib.rs

pub mod cache;
pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod query;
pub mod resources;
pub mod sampler;
pub mod validation;

pub use crate::cache::{DatasetCache, DatasetSource};
pub use crate::config::Config;
pub use crate::core::engine::NameEngine;
pub use crate::core::index::{Dataset, DatasetStats, FirstNameIndex, LastNameIndex};
pub use crate::core::types::{
    DatasetVariant, FirstNameEntry, Gender, KanjiMatch, LastNameEntry, LastNameMatch, MatchMode,
    NameSample, ReadingCandidate, ReadingMatch, SearchBy,
};
pub use crate::error::{NameError, Result};
pub use crate::loader::DatasetLoader;
pub use crate::resources::{DirectoryResources, MemoryResources, ResourceId, ResourceProvider};
