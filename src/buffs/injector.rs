//! Merging validated buff groups into the host's stimulator buffs table.

use log::{debug, info, warn};
use std::path::Path;

use crate::buffs::catalog::BuffCatalog;
use crate::buffs::types::{BuffDefinition, EffectRecord};
use crate::buffs::validate::validate_definition;
use crate::buffs::{BuffError, RejectReason};
use crate::host::EffectTableWriter;
use crate::logutil::escape_log;

/// A catalog entry that was dropped during injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub group: String,
    /// Position of the entry within its group.
    pub index: usize,
    pub reason: RejectReason,
}

/// Outcome of one injection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectReport {
    /// Groups processed, in catalog order. After `inject` these are the
    /// groups written to the table; after `validate` nothing was written.
    pub groups: Vec<String>,
    /// Groups that replaced an existing table entry.
    pub overwritten: Vec<String>,
    pub accepted_entries: usize,
    pub rejected: Vec<Rejection>,
}

impl InjectReport {
    pub fn groups_injected(&self) -> usize {
        self.groups.len()
    }
}

/// Validates catalog groups and writes them into a host effect table.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuffInjector;

impl BuffInjector {
    pub fn new() -> Self {
        Self
    }

    /// Load the catalog at `path` and inject it.
    ///
    /// On any catalog error the table is left untouched.
    pub fn inject_from_file<P, T>(&self, path: P, table: &mut T) -> Result<InjectReport, BuffError>
    where
        P: AsRef<Path>,
        T: EffectTableWriter + ?Sized,
    {
        let catalog = BuffCatalog::load(path)?;
        self.inject(&catalog, table)
    }

    /// Inject every group of `catalog`, replacing same-named table entries.
    ///
    /// Invalid entries are dropped with a warning. A group whose entries are
    /// all invalid still replaces the table entry, with an empty list.
    pub fn inject<T>(&self, catalog: &BuffCatalog, table: &mut T) -> Result<InjectReport, BuffError>
    where
        T: EffectTableWriter + ?Sized,
    {
        let mut report = InjectReport::default();

        for (name, buffs) in catalog.groups() {
            let records = build_group(name, buffs, &mut report);

            if table.contains_group(name) {
                warn!(
                    "Buff group '{}' already exists in stimulator buffs and will be overwritten",
                    escape_log(name)
                );
                report.overwritten.push(name.to_string());
            }

            debug!(
                "Injecting buff group '{}' with {} buff(s)",
                escape_log(name),
                records.len()
            );
            table.replace_group(name, records)?;
            report.groups.push(name.to_string());
        }

        info!(
            "Injected {} custom buff group(s) ({} buff(s) accepted, {} rejected)",
            report.groups_injected(),
            report.accepted_entries,
            report.rejected.len()
        );
        Ok(report)
    }

    /// Validate a catalog without a host table.
    pub fn validate(&self, catalog: &BuffCatalog) -> InjectReport {
        let mut report = InjectReport::default();
        for (name, buffs) in catalog.groups() {
            build_group(name, buffs, &mut report);
            report.groups.push(name.to_string());
        }
        report
    }
}

fn build_group(
    name: &str,
    buffs: &[BuffDefinition],
    report: &mut InjectReport,
) -> Vec<EffectRecord> {
    let mut records = Vec::with_capacity(buffs.len());
    for (index, def) in buffs.iter().enumerate() {
        match validate_definition(def) {
            Ok(record) => records.push(record),
            Err(reason) => {
                warn!(
                    "Skipping buff #{} in group '{}': {}",
                    index,
                    escape_log(name),
                    escape_log(&reason.to_string())
                );
                report.rejected.push(Rejection {
                    group: name.to_string(),
                    index,
                    reason,
                });
            }
        }
    }
    report.accepted_entries += records.len();
    records
}
