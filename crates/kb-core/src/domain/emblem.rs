//! Emblem entity

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use validator::Validate;

use crate::ports::EntityKind;

pub const EMBLEM_TYPE_OPTIONS: [&str; 4] = [
    "Main Emblem",
    "Common Talent - Section 1",
    "Common Talent - Section 2",
    "Primary Talent",
];

/// One attribute row of an emblem; the backend keys these dynamically
/// (e.g. `{"Adaptive Attack": 22, "icon": "..."}`), so the non-icon values
/// stay as a map.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmblemAttribute {
    #[serde(default)]
    pub icon: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emblem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub emblem_type: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub attributes: Vec<EmblemAttribute>,
    #[serde(default)]
    pub benefit: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cooldown: String,
}

#[derive(Debug, Clone, Serialize, Validate, Default)]
pub struct EmblemInput {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[serde(rename = "type")]
    pub emblem_type: String,
    pub icon: String,
    pub attributes: Vec<EmblemAttribute>,
    pub benefit: String,
    pub description: String,
    pub cooldown: String,
}

impl crate::domain::CatalogEntity for Emblem {
    type Input = EmblemInput;
    const KIND: EntityKind = EntityKind::Emblem;
}
