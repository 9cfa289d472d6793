// ============================================================================
// KB Core - Hero Entity
// File: crates/kb-core/src/domain/hero.rs
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ports::EntityKind;

pub const HERO_TYPE_OPTIONS: [&str; 6] =
    ["Tank", "Assassin", "Fighter", "Marksman", "Mage", "Support"];
pub const HERO_ROLE_OPTIONS: [&str; 5] = ["Roam", "Jungle", "Mid Lane", "Exp Lane", "Gold Lane"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub alias: String,
    #[serde(default)]
    pub role: Vec<String>,
    #[serde(rename = "type", default)]
    pub hero_type: Vec<String>,
    #[serde(default)]
    pub speciality: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub hero_order: i32,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub durability: i32,
    #[serde(default)]
    pub offense: i32,
    #[serde(default)]
    pub control_effect: i32,
    #[serde(default)]
    pub difficulty: i32,
}

#[derive(Debug, Clone, Serialize, Validate, Default)]
pub struct HeroInput {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(length(max = 100, message = "Alias too long"))]
    pub alias: String,
    pub role: Vec<String>,
    #[serde(rename = "type")]
    pub hero_type: Vec<String>,
    pub speciality: String,
    pub region: String,
    pub hero_order: i32,
    #[validate(length(max = 500, message = "Short description too long"))]
    pub short_description: String,
    pub avatar: String,
    pub image: String,
    pub release_date: String,
    #[validate(range(min = 0, max = 100, message = "Durability must be 0-100"))]
    pub durability: i32,
    #[validate(range(min = 0, max = 100, message = "Offense must be 0-100"))]
    pub offense: i32,
    #[validate(range(min = 0, max = 100, message = "Control effect must be 0-100"))]
    pub control_effect: i32,
    #[validate(range(min = 0, max = 100, message = "Difficulty must be 0-100"))]
    pub difficulty: i32,
}

impl crate::domain::CatalogEntity for Hero {
    type Input = HeroInput;
    const KIND: EntityKind = EntityKind::Hero;
}
