// File: src/resources.rs
//! Locating the dataset files.
//!
//! The loader only asks for "the records of resource X"; where X lives is
//! decided by a [`ResourceProvider`].

use crate::core::types::{DatasetVariant, Gender};
use crate::error::{NameError, Result};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

/// Logical names of the shipped resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceId {
    FirstNames { gender: Gender, variant: DatasetVariant },
    /// Variant-independent; always the full surname corpus.
    LastNames,
}

impl ResourceId {
    /// `first_name_man_org`, `first_name_woman_opti`, `last_name`, ...
    pub fn logical_name(&self) -> String {
        match self {
            ResourceId::FirstNames { gender, variant } => {
                format!("first_name_{}_{}", gender.resource_word(), variant.suffix())
            }
            ResourceId::LastNames => "last_name".to_string(),
        }
    }

    /// File name inside a dataset directory.
    pub fn file_name(&self) -> String {
        match self {
            ResourceId::LastNames => "last_name_org.csv".to_string(),
            first => format!("{}.csv", first.logical_name()),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.logical_name())
    }
}

pub trait ResourceProvider {
    /// Opens a resource for reading, or fails with `ResourceNotFound`.
    fn open(&self, id: ResourceId) -> Result<Box<dyn Read + '_>>;
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for &P {
    fn open(&self, id: ResourceId) -> Result<Box<dyn Read + '_>> {
        (**self).open(id)
    }
}

/// A directory holding `first_name_*_{org,opti}.csv` and `last_name_org.csv`.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, id: ResourceId) -> PathBuf {
        self.root.join(id.file_name())
    }
}

impl ResourceProvider for DirectoryResources {
    fn open(&self, id: ResourceId) -> Result<Box<dyn Read + '_>> {
        let path = self.path_of(id);
        match File::open(&path) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(source) => Err(NameError::ResourceNotFound {
                name: id.logical_name(),
                path,
                source,
            }),
        }
    }
}

/// CSV text held in memory, keyed by logical name.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    files: HashMap<String, String>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: ResourceId, csv_text: impl Into<String>) -> Self {
        self.files.insert(id.logical_name(), csv_text.into());
        self
    }
}

impl ResourceProvider for MemoryResources {
    fn open(&self, id: ResourceId) -> Result<Box<dyn Read + '_>> {
        let name = id.logical_name();
        match self.files.get(&name) {
            Some(text) => Ok(Box::new(Cursor::new(text.as_bytes()))),
            None => Err(NameError::ResourceNotFound {
                path: PathBuf::from(&name),
                source: io::Error::new(io::ErrorKind::NotFound, "not registered"),
                name,
            }),
        }
    }
}
