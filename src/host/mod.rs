//! Host server effect table access.
//!
//! The host owns the stimulator buffs table; this crate only checks whether a
//! group exists and replaces a group's buff list. [`EffectTableWriter`] is that
//! seam. [`StimulatorBuffs`] is an in-memory table and [`GlobalsDocument`]
//! edits the table inside a host globals JSON file.

pub mod globals;

use indexmap::IndexMap;
use thiserror::Error;

use crate::buffs::EffectRecord;

pub use globals::{GlobalsDocument, STIMULATOR_BUFFS_POINTER};

/// Errors raised by host table implementations.
#[derive(Debug, Error)]
pub enum HostError {
    /// The globals document has no stimulator buffs object at the expected path.
    #[error("stimulator buffs table missing at {0}")]
    MissingTable(&'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write access to the host's stimulator buffs table.
pub trait EffectTableWriter {
    fn contains_group(&self, name: &str) -> bool;

    /// Insert or replace the full buff list for `name`.
    fn replace_group(&mut self, name: &str, buffs: Vec<EffectRecord>) -> Result<(), HostError>;
}

/// In-memory stimulator buffs table keyed by group name.
///
/// Replacing an existing group keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StimulatorBuffs {
    groups: IndexMap<String, Vec<EffectRecord>>,
}

impl StimulatorBuffs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self, name: &str) -> Option<&[EffectRecord]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<(String, Vec<EffectRecord>)> for StimulatorBuffs {
    fn from_iter<I: IntoIterator<Item = (String, Vec<EffectRecord>)>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

impl EffectTableWriter for StimulatorBuffs {
    fn contains_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    fn replace_group(&mut self, name: &str, buffs: Vec<EffectRecord>) -> Result<(), HostError> {
        self.groups.insert(name.to_string(), buffs);
        Ok(())
    }
}
