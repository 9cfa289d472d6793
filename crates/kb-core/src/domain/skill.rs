//! Skill entity and per-level detail table

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use crate::ports::EntityKind;

pub const SKILL_TYPE_OPTIONS: [&str; 4] = ["Passive", "Skill 1", "Skill 2", "Ultimate"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub skill_type: String,
    #[serde(default)]
    pub tag: Vec<String>,
    #[serde(default)]
    pub skill_icon: String,
    #[serde(default)]
    pub lite_description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(rename = "heroName", default)]
    pub hero_name: Option<String>,
}

/// Scaling attributes of a skill at one level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDetail {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub level: i32,
    #[serde(default)]
    pub attributes: BTreeMap<String, f64>,
}

/// Skill together with its per-level table, as the detail query returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillWithDetails {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub skills_detail: Vec<SkillDetail>,
}

#[derive(Debug, Clone, Serialize, Validate, Default)]
pub struct SkillDetailInput {
    #[validate(range(min = 1, max = 15, message = "Skill level must be 1-15"))]
    pub level: i32,
    pub attributes: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Validate, Default)]
pub struct SkillInput {
    #[serde(rename = "heroId")]
    #[validate(length(min = 1, message = "Hero id is required"))]
    pub hero_id: String,
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[serde(rename = "type")]
    pub skill_type: String,
    pub tag: Vec<String>,
    pub skill_icon: String,
    pub lite_description: String,
    pub full_description: String,
}

impl crate::domain::CatalogEntity for Skill {
    type Input = SkillInput;
    const KIND: EntityKind = EntityKind::Skill;
}
