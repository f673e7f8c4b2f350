//! Custom buff catalog loading.
//!
//! The catalog lives at `db/WTTBuffs/customBuffs.json` inside the plugin
//! install directory:
//!
//! ```json
//! { "Buffs": { "Vodka": [ { "BuffType": "HealthRate", "Chance": 1, "Delay": 0,
//!                           "Duration": 300, "Value": 5, "AbsoluteValue": false } ] } }
//! ```
//!
//! The `Buffs` key and every buff field are matched case-insensitively. Group
//! names are kept exactly as written, in document order.

use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::buffs::types::BuffDefinition;
use crate::buffs::BuffError;

/// Catalog location relative to the plugin install directory.
pub const CATALOG_RELATIVE_PATH: [&str; 3] = ["db", "WTTBuffs", "customBuffs.json"];

const ROOT_KEY: &str = "buffs";

/// Resolve the catalog file under a plugin install directory.
pub fn catalog_path<P: AsRef<Path>>(mod_dir: P) -> PathBuf {
    CATALOG_RELATIVE_PATH
        .iter()
        .fold(mod_dir.as_ref().to_path_buf(), |acc, part| acc.join(part))
}

/// Named buff groups read from a catalog document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuffCatalog {
    groups: IndexMap<String, Vec<BuffDefinition>>,
}

impl BuffCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append (or replace) a group; used when building catalogs in code.
    pub fn with_group(mut self, name: &str, buffs: Vec<BuffDefinition>) -> Self {
        self.groups.insert(name.to_string(), buffs);
        self
    }

    /// Read and parse a catalog file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BuffError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BuffError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BuffError::NotFound {
                path: path.to_path_buf(),
            },
            _ => BuffError::Io(e),
        })?;

        Self::from_json_str(&contents, path)
    }

    /// Parse catalog text. `origin` only labels errors.
    pub fn from_json_str(text: &str, origin: &Path) -> Result<Self, BuffError> {
        let parse_err = |source: serde_json::Error| BuffError::Parse {
            path: origin.to_path_buf(),
            source,
        };

        let root: Value = serde_json::from_str(text).map_err(parse_err)?;

        // A non-object root carries no groups; the last case-variant of the key wins.
        let buffs = match root {
            Value::Object(map) => map
                .into_iter()
                .filter(|(key, _)| key.eq_ignore_ascii_case(ROOT_KEY))
                .map(|(_, value)| value)
                .last(),
            _ => None,
        };

        let raw_groups: IndexMap<String, Vec<Value>> = match buffs {
            None | Some(Value::Null) => IndexMap::new(),
            Some(value) => serde_json::from_value(value).map_err(parse_err)?,
        };

        if raw_groups.is_empty() {
            return Err(BuffError::EmptyCatalog {
                path: origin.to_path_buf(),
            });
        }

        let mut groups = IndexMap::with_capacity(raw_groups.len());
        for (name, entries) in raw_groups {
            let buffs = entries
                .into_iter()
                .map(|entry| serde_json::from_value(lowercase_keys(entry)))
                .collect::<Result<Vec<BuffDefinition>, _>>()
                .map_err(parse_err)?;
            groups.insert(name, buffs);
        }

        Ok(Self { groups })
    }

    /// Groups in document order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[BuffDefinition])> {
        self.groups
            .iter()
            .map(|(name, buffs)| (name.as_str(), buffs.as_slice()))
    }

    pub fn group(&self, name: &str) -> Option<&[BuffDefinition]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, v)| (key.to_ascii_lowercase(), v))
                .collect(),
        ),
        other => other,
    }
}
