//! Test utilities & fixtures.
//! Builds throwaway plugin install directories holding a custom buff catalog.

use std::path::{Path, PathBuf};

/// The catalog shipped with the plugin.
#[allow(dead_code)]
pub fn shipped_mod_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf()
}

/// Create a temp install directory whose `db/WTTBuffs/customBuffs.json` holds `catalog`.
#[allow(dead_code)]
pub fn mod_dir_with_catalog(catalog: &str) -> tempfile::TempDir {
    let tmp = tempfile::tempdir().expect("tempdir");
    let buffs_dir = tmp.path().join("db").join("WTTBuffs");
    std::fs::create_dir_all(&buffs_dir).expect("buffs dir");
    std::fs::write(buffs_dir.join("customBuffs.json"), catalog).expect("write catalog");
    tmp
}

/// A minimal host globals document with one pre-existing buff group.
#[allow(dead_code)]
pub fn host_globals() -> serde_json::Value {
    serde_json::json!({
        "config": {
            "Health": {
                "Effects": {
                    "Stimulator": {
                        "BuffLoopTime": 1,
                        "Buffs": {
                            "BuffsAdrenaline": [
                                {"BuffType": "HealthRate", "Chance": 1, "Delay": 1,
                                 "Duration": 15, "Value": 4, "AbsoluteValue": true,
                                 "SkillName": ""}
                            ]
                        }
                    }
                }
            }
        }
    })
}
