//! Integration tests for custom buff injection
//!
//! Covers the catalog-to-table flow:
//! - allow-list and SkillName enforcement
//! - overwrite and re-run behavior
//! - missing and empty catalogs leaving the table untouched

mod common;

use cornerstore::buffs::{
    BuffCatalog, BuffError, BuffInjector, BuffType, EffectRecord, InjectReport, RejectReason,
};
use cornerstore::host::{EffectTableWriter, StimulatorBuffs};
use tempfile::TempDir;

const VODKA: &str = r#"{"Buffs":{"Vodka":[
    {"BuffType":"HealthRate","Chance":1,"Delay":0,"Duration":300,"Value":5,"AbsoluteValue":false},
    {"BuffType":"Teleport","Chance":1,"Delay":0,"Duration":10,"Value":1,"AbsoluteValue":false}]}}"#;

fn record(buff_type: BuffType, duration: f64) -> EffectRecord {
    EffectRecord {
        buff_type,
        chance: 1.0,
        delay: 0.0,
        duration,
        value: 1.0,
        absolute_value: false,
        skill_name: None,
    }
}

fn inject_catalog(text: &str, table: &mut StimulatorBuffs) -> Result<InjectReport, BuffError> {
    let dir = common::mod_dir_with_catalog(text);
    let path = cornerstore::buffs::catalog_path(dir.path());
    BuffInjector::new().inject_from_file(path, table)
}

#[test]
fn vodka_example_keeps_only_health_rate() {
    let mut table = StimulatorBuffs::new();
    let report = inject_catalog(VODKA, &mut table).expect("inject");

    let vodka = table.group("Vodka").expect("Vodka injected");
    assert_eq!(
        vodka,
        &[EffectRecord {
            buff_type: BuffType::HealthRate,
            chance: 1.0,
            delay: 0.0,
            duration: 300.0,
            value: 5.0,
            absolute_value: false,
            skill_name: None,
        }]
    );
    assert_eq!(report.groups_injected(), 1);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(
        report.rejected[0].reason,
        RejectReason::UnknownBuffType("Teleport".to_string())
    );
    assert_eq!(report.rejected[0].index, 1);
}

#[test]
fn empty_skill_name_is_rejected() {
    let mut table = StimulatorBuffs::new();
    let report = inject_catalog(
        r#"{"Buffs":{"Study":[{"BuffType":"SkillRate","SkillName":""}]}}"#,
        &mut table,
    )
    .expect("inject");

    assert_eq!(report.rejected[0].reason, RejectReason::MissingSkillName);
    assert!(report.rejected[0].reason.to_string().contains("SkillName"));
    assert!(table.group("Study").expect("group still injected").is_empty());
}

#[test]
fn one_bad_entry_among_valid_ones_is_isolated() {
    let mut table = StimulatorBuffs::new();
    let report = inject_catalog(
        r#"{"Buffs":{"Mixed":[
            {"BuffType":"EnergyRate","Duration":60},
            {"BuffType":"HydrationRate","Duration":60},
            {"BuffType":"Levitate","Duration":60},
            {"BuffType":"SkillRate","SkillName":"Strength","Duration":60}]}}"#,
        &mut table,
    )
    .expect("inject");

    assert_eq!(table.group("Mixed").unwrap().len(), 3);
    assert_eq!(report.accepted_entries, 3);
    assert_eq!(report.rejected.len(), 1);
}

#[test]
fn existing_group_is_replaced_not_merged() {
    let mut table: StimulatorBuffs = vec![
        (
            "Vodka".to_string(),
            vec![record(BuffType::Pain, 1.0), record(BuffType::Antidote, 2.0)],
        ),
        ("Untouched".to_string(), vec![record(BuffType::Fracture, 3.0)]),
    ]
    .into_iter()
    .collect();

    let report = inject_catalog(VODKA, &mut table).expect("inject");

    assert_eq!(report.overwritten, vec!["Vodka".to_string()]);
    let vodka = table.group("Vodka").unwrap();
    assert_eq!(vodka.len(), 1);
    assert_eq!(vodka[0].buff_type, BuffType::HealthRate);
    assert_eq!(table.group("Untouched").unwrap(), &[record(BuffType::Fracture, 3.0)]);
}

#[test]
fn new_group_is_added_without_overwrite() {
    let mut table: StimulatorBuffs = vec![("Other".to_string(), Vec::new())]
        .into_iter()
        .collect();
    let report = inject_catalog(VODKA, &mut table).expect("inject");
    assert!(report.overwritten.is_empty());
    assert_eq!(table.len(), 2);
}

#[test]
fn rerun_gives_same_table() {
    let start: StimulatorBuffs =
        vec![("Vodka".to_string(), vec![record(BuffType::Pain, 9.0)])]
            .into_iter()
            .collect();

    let mut once = start.clone();
    inject_catalog(VODKA, &mut once).expect("first run");

    let mut twice = start.clone();
    inject_catalog(VODKA, &mut twice).expect("first run");
    inject_catalog(VODKA, &mut twice).expect("second run");

    assert_eq!(once, twice);
}

#[test]
fn missing_catalog_leaves_table_unchanged() {
    let dir = TempDir::new().expect("tempdir");
    let mut table: StimulatorBuffs =
        vec![("Vodka".to_string(), vec![record(BuffType::Pain, 1.0)])]
            .into_iter()
            .collect();
    let before = table.clone();

    let result = BuffInjector::new()
        .inject_from_file(cornerstore::buffs::catalog_path(dir.path()), &mut table);

    assert!(matches!(result, Err(BuffError::NotFound { .. })));
    assert_eq!(table, before);
}

#[test]
fn empty_catalog_leaves_table_unchanged() {
    for text in [r#"{}"#, r#"{"Buffs":{}}"#, r#"{"buffs":null}"#] {
        let mut table: StimulatorBuffs = vec![("Keep".to_string(), Vec::new())]
            .into_iter()
            .collect();
        let before = table.clone();
        let result = inject_catalog(text, &mut table);
        assert!(matches!(result, Err(BuffError::EmptyCatalog { .. })), "{text}");
        assert_eq!(table, before);
    }
}

#[test]
fn malformed_catalog_leaves_table_unchanged() {
    let mut table = StimulatorBuffs::new();
    let result = inject_catalog(r#"{"Buffs":{"Vodka":[{"BuffType":"Pain"}"#, &mut table);
    assert!(matches!(result, Err(BuffError::Parse { .. })));
    assert!(table.is_empty());
}

#[test]
fn lowercase_catalog_fields_are_accepted() {
    let mut table = StimulatorBuffs::new();
    inject_catalog(
        r#"{"buffs":{"Tea":[{"bufftype":"SkillRate","skillname":"Vitality",
            "duration":30,"absolutevalue":true}]}}"#,
        &mut table,
    )
    .expect("inject");
    let tea = table.group("Tea").unwrap();
    assert_eq!(tea[0].skill_name.as_deref(), Some("Vitality"));
    assert_eq!(tea[0].duration, 30.0);
    assert!(tea[0].absolute_value);
}

#[test]
fn shipped_catalog_is_fully_valid() {
    let path = cornerstore::buffs::catalog_path(common::shipped_mod_dir());
    let catalog = BuffCatalog::load(path).expect("shipped catalog loads");
    let report = BuffInjector::new().validate(&catalog);
    assert!(report.rejected.is_empty(), "{:?}", report.rejected);
    assert_eq!(report.groups_injected(), catalog.len());
    assert!(catalog.group("Buffs_WTT_CornerStore_Vodka").is_some());
}

#[test]
fn injection_works_through_a_trait_object() {
    let catalog = BuffCatalog::load(cornerstore::buffs::catalog_path(common::shipped_mod_dir()))
        .expect("shipped catalog loads");
    let mut table = StimulatorBuffs::new();
    let writer: &mut dyn EffectTableWriter = &mut table;
    BuffInjector::new().inject(&catalog, writer).expect("inject");
    assert_eq!(table.len(), catalog.len());
}
