//! Custom stimulator buffs: catalog loading, per-entry validation and
//! injection into the host effect table.

pub mod catalog;
pub mod errors;
pub mod injector;
pub mod types;
pub mod validate;

pub use catalog::{catalog_path, BuffCatalog, CATALOG_RELATIVE_PATH};
pub use errors::{BuffError, RejectReason};
pub use injector::{BuffInjector, InjectReport, Rejection};
pub use types::{BuffDefinition, BuffType, EffectRecord};
pub use validate::validate_definition;
