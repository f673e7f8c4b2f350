//! Buff catalog entries, the closed set of effect tags and the host record shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::buffs::RejectReason;

/// Effect tags the host understands for stimulator buffs.
///
/// Catalog entries carrying any other tag are dropped during injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuffType {
    HealthRate,
    EnergyRate,
    HydrationRate,
    SkillRate,
    MaxStamina,
    StaminaRate,
    DamageModifier,
    WeightLimit,
    BodyTemperature,
    RemoveAllBloodLosses,
    RemoveNegativeEffects,
    RemoveAllBuffs,
    Antidote,
    UnknownToxin,
    StomachBloodloss,
    HandsTremor,
    QuantumTunnelling,
    ContusionBlur,
    ContusionWiggle,
    Contusion,
    Pain,
    LightBleeding,
    HeavyBleeding,
    Fracture,
    Intoxication,
    LethalIntoxication,
    RadExposure,
    TunnelVision,
}

impl BuffType {
    /// Every accepted tag, in declaration order.
    pub const ALL: [BuffType; 28] = [
        BuffType::HealthRate,
        BuffType::EnergyRate,
        BuffType::HydrationRate,
        BuffType::SkillRate,
        BuffType::MaxStamina,
        BuffType::StaminaRate,
        BuffType::DamageModifier,
        BuffType::WeightLimit,
        BuffType::BodyTemperature,
        BuffType::RemoveAllBloodLosses,
        BuffType::RemoveNegativeEffects,
        BuffType::RemoveAllBuffs,
        BuffType::Antidote,
        BuffType::UnknownToxin,
        BuffType::StomachBloodloss,
        BuffType::HandsTremor,
        BuffType::QuantumTunnelling,
        BuffType::ContusionBlur,
        BuffType::ContusionWiggle,
        BuffType::Contusion,
        BuffType::Pain,
        BuffType::LightBleeding,
        BuffType::HeavyBleeding,
        BuffType::Fracture,
        BuffType::Intoxication,
        BuffType::LethalIntoxication,
        BuffType::RadExposure,
        BuffType::TunnelVision,
    ];

    /// The tag exactly as the host spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuffType::HealthRate => "HealthRate",
            BuffType::EnergyRate => "EnergyRate",
            BuffType::HydrationRate => "HydrationRate",
            BuffType::SkillRate => "SkillRate",
            BuffType::MaxStamina => "MaxStamina",
            BuffType::StaminaRate => "StaminaRate",
            BuffType::DamageModifier => "DamageModifier",
            BuffType::WeightLimit => "WeightLimit",
            BuffType::BodyTemperature => "BodyTemperature",
            BuffType::RemoveAllBloodLosses => "RemoveAllBloodLosses",
            BuffType::RemoveNegativeEffects => "RemoveNegativeEffects",
            BuffType::RemoveAllBuffs => "RemoveAllBuffs",
            BuffType::Antidote => "Antidote",
            BuffType::UnknownToxin => "UnknownToxin",
            BuffType::StomachBloodloss => "StomachBloodloss",
            BuffType::HandsTremor => "HandsTremor",
            BuffType::QuantumTunnelling => "QuantumTunnelling",
            BuffType::ContusionBlur => "ContusionBlur",
            BuffType::ContusionWiggle => "ContusionWiggle",
            BuffType::Contusion => "Contusion",
            BuffType::Pain => "Pain",
            BuffType::LightBleeding => "LightBleeding",
            BuffType::HeavyBleeding => "HeavyBleeding",
            BuffType::Fracture => "Fracture",
            BuffType::Intoxication => "Intoxication",
            BuffType::LethalIntoxication => "LethalIntoxication",
            BuffType::RadExposure => "RadExposure",
            BuffType::TunnelVision => "TunnelVision",
        }
    }

    /// Whether entries with this tag must name the skill they modify.
    pub fn requires_skill_name(&self) -> bool {
        matches!(self, BuffType::SkillRate)
    }
}

impl fmt::Display for BuffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuffType {
    type Err = RejectReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Host tags are case-sensitive; only field names are matched loosely.
        BuffType::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| RejectReason::UnknownBuffType(s.to_string()))
    }
}

/// One modifier as written in the custom buff catalog.
///
/// Field names are lower-cased before deserialization so the catalog may use
/// any casing (`BuffType`, `buffType`, `bufftype`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BuffDefinition {
    #[serde(rename = "bufftype", default)]
    pub buff_type: Option<String>,
    #[serde(default)]
    pub chance: f64,
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub value: f64,
    #[serde(rename = "absolutevalue", default)]
    pub absolute_value: bool,
    #[serde(rename = "skillname", default)]
    pub skill_name: Option<String>,
}

impl BuffDefinition {
    pub fn new(buff_type: &str) -> Self {
        Self {
            buff_type: Some(buff_type.to_string()),
            ..Self::default()
        }
    }

    pub fn with_chance(mut self, chance: f64) -> Self {
        self.chance = chance;
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn absolute(mut self) -> Self {
        self.absolute_value = true;
        self
    }

    pub fn with_skill(mut self, skill_name: &str) -> Self {
        self.skill_name = Some(skill_name.to_string());
        self
    }
}

/// A stimulator buff in the shape the host stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EffectRecord {
    pub buff_type: BuffType,
    pub chance: f64,
    pub delay: f64,
    pub duration: f64,
    pub value: f64,
    pub absolute_value: bool,
    #[serde(default)]
    pub skill_name: Option<String>,
}
