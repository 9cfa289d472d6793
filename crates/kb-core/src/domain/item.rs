//! Equipment item entity

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ports::EntityKind;

pub const ITEM_TYPE_OPTIONS: [&str; 6] =
    ["Attack", "Magic", "Defense", "Movement", "Jungle", "Roaming"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub tips: String,
    /// Ids of the items this one builds from.
    #[serde(default)]
    pub parent_items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Validate, Default)]
pub struct ItemInput {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub tag: String,
    pub attributes: Vec<String>,
    pub price: String,
    pub image: String,
    pub story: String,
    pub description: Vec<String>,
    pub tips: String,
    pub parent_items: Vec<String>,
}

impl crate::domain::CatalogEntity for Item {
    type Input = ItemInput;
    const KIND: EntityKind = EntityKind::Item;
}
