//! Host globals document (`globals.json`) editing.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::buffs::EffectRecord;
use crate::host::{EffectTableWriter, HostError};

/// JSON pointer to the stimulator buffs object inside host globals.
pub const STIMULATOR_BUFFS_POINTER: &str = "/config/Health/Effects/Stimulator/Buffs";

/// A host globals document whose stimulator buffs table can be edited in place.
///
/// Everything outside the table is carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalsDocument {
    root: Value,
}

impl GlobalsDocument {
    /// Wrap a parsed globals value. Fails if the buffs table is absent.
    pub fn from_value(root: Value) -> Result<Self, HostError> {
        if !root
            .pointer(STIMULATOR_BUFFS_POINTER)
            .is_some_and(Value::is_object)
        {
            return Err(HostError::MissingTable(STIMULATOR_BUFFS_POINTER));
        }
        Ok(Self { root })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HostError> {
        let contents = fs::read_to_string(path)?;
        Self::from_value(serde_json::from_str(&contents)?)
    }

    /// Write the document back as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), HostError> {
        let text = serde_json::to_string_pretty(&self.root)?;
        fs::write(path, text)?;
        Ok(())
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    /// Read one group back in record form.
    pub fn group(&self, name: &str) -> Result<Option<Vec<EffectRecord>>, HostError> {
        match self.table().and_then(|table| table.get(name)) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    pub fn group_names(&self) -> Vec<String> {
        self.table()
            .map(|table| table.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn table(&self) -> Option<&Map<String, Value>> {
        self.root
            .pointer(STIMULATOR_BUFFS_POINTER)
            .and_then(Value::as_object)
    }

    fn table_mut(&mut self) -> Result<&mut Map<String, Value>, HostError> {
        self.root
            .pointer_mut(STIMULATOR_BUFFS_POINTER)
            .and_then(Value::as_object_mut)
            .ok_or(HostError::MissingTable(STIMULATOR_BUFFS_POINTER))
    }
}

impl EffectTableWriter for GlobalsDocument {
    fn contains_group(&self, name: &str) -> bool {
        self.table().is_some_and(|table| table.contains_key(name))
    }

    fn replace_group(&mut self, name: &str, buffs: Vec<EffectRecord>) -> Result<(), HostError> {
        let value = serde_json::to_value(buffs)?;
        self.table_mut()?.insert(name.to_string(), value);
        Ok(())
    }
}
