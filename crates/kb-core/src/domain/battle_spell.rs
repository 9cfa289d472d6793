//! Battle spell entity

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ports::EntityKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleSpell {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cooldown: i32,
}

#[derive(Debug, Clone, Serialize, Validate, Default)]
pub struct BattleSpellInput {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    pub tag: String,
    pub icon: String,
    pub description: String,
    #[validate(range(min = 0, max = 600, message = "Cooldown must be 0-600 seconds"))]
    pub cooldown: i32,
}

impl crate::domain::CatalogEntity for BattleSpell {
    type Input = BattleSpellInput;
    const KIND: EntityKind = EntityKind::BattleSpell;
}
