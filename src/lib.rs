//! # Corner Store - custom stimulator buffs for the WTT Corner Store plugin
//!
//! The Corner Store plugin ships consumables whose effects reference custom
//! stimulator buff groups. This crate loads those groups from the plugin's
//! `db/WTTBuffs/customBuffs.json`, drops entries the host would not
//! understand, and writes the rest into the host's stimulator buffs table.
//!
//! ## Features
//!
//! - **Lenient catalog parsing**: field names match case-insensitively and
//!   group order follows the document.
//! - **Closed tag set**: only the 28 buff types the host knows are accepted;
//!   `SkillRate` entries must name a skill.
//! - **Fault isolation**: a bad entry drops only itself; a missing or broken
//!   catalog leaves the host table untouched and never fails start-up.
//! - **Host seam**: the table is reached through [`host::EffectTableWriter`],
//!   with in-memory and globals-JSON implementations.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cornerstore::host::StimulatorBuffs;
//! use cornerstore::plugin::CornerStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut table = StimulatorBuffs::new();
//!     let plugin = CornerStore::new("user/mods/WTT-CornerStore");
//!     if let Some(report) = plugin.on_load(&mut table).await {
//!         println!("{} group(s) injected", report.groups_injected());
//!     }
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`buffs`] - Catalog model, validation and injection
//! - [`host`] - Host effect table seam and implementations
//! - [`plugin`] - Start-up hook wrapping the injector
//! - [`config`] - CLI configuration
//! - [`logutil`] - Log-safe rendering of catalog strings

pub mod buffs;
pub mod config;
pub mod host;
pub mod logutil;
pub mod plugin;
