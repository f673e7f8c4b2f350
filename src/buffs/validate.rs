use crate::buffs::types::{BuffDefinition, BuffType, EffectRecord};
use crate::buffs::RejectReason;

/// Check one catalog entry and convert it into the host record shape.
///
/// Only the tag and, for `SkillRate`, the skill name are checked. Numeric
/// fields are copied as written.
pub fn validate_definition(def: &BuffDefinition) -> Result<EffectRecord, RejectReason> {
    let buff_type: BuffType = def.buff_type.as_deref().unwrap_or_default().parse()?;

    if buff_type.requires_skill_name() && def.skill_name.as_deref().map_or(true, str::is_empty) {
        return Err(RejectReason::MissingSkillName);
    }

    Ok(EffectRecord {
        buff_type,
        chance: def.chance,
        delay: def.delay,
        duration: def.duration,
        value: def.value,
        absolute_value: def.absolute_value,
        skill_name: def.skill_name.clone(),
    })
}
