// ============================================================================
// KB Core - Tournament Entity
// File: crates/kb-core/src/domain/tournament.rs
// Description: Esports tournament tracking (synced from Liquipedia)
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ports::EntityKind;

pub const TIER_OPTIONS: [&str; 4] = ["INTERNATIONAL", "REGIONAL", "NATIONAL", "LOCAL"];
pub const STATUS_OPTIONS: [&str; 4] = ["UPCOMING", "ONGOING", "COMPLETED", "CANCELLED"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub tier_level: i32,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub liquipedia_url: String,
    #[serde(default)]
    pub liquipedia_slug: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub sync_status: String,
    #[serde(default)]
    pub last_synced_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub prize_pool: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TournamentInput {
    #[validate(length(min = 1, max = 150, message = "Name must be between 1 and 150 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 150, message = "Slug is required"))]
    pub slug: String,
    pub tier: String,
    #[validate(range(min = 1, max = 5, message = "Tier level must be 1-5"))]
    pub tier_level: i32,
    pub region: String,
    pub liquipedia_url: String,
    pub liquipedia_slug: String,
    pub status: String,
    pub prize_pool: String,
}

impl Default for TournamentInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            tier: String::new(),
            tier_level: 1,
            region: String::new(),
            liquipedia_url: String::new(),
            liquipedia_slug: String::new(),
            status: String::new(),
            prize_pool: String::new(),
        }
    }
}

/// Bracket stage of a tournament (read model).
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentStage {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "liquipediaUrl", default)]
    pub liquipedia_url: String,
    #[serde(default)]
    pub order: i32,
}

/// Per-hero pick/ban aggregate for a stage (read model).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroStat {
    pub hero_name: String,
    #[serde(default)]
    pub hero_image_url: String,
    pub picks: i32,
    pub bans: i32,
    pub wins: i32,
    pub losses: i32,
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub pick_rate: f64,
    #[serde(default)]
    pub ban_rate: f64,
    #[serde(default)]
    pub presence_rate: f64,
    #[serde(default)]
    pub stage_id: String,
}

/// Outcome of a Liquipedia sync run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub items_synced: i32,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl crate::domain::CatalogEntity for Tournament {
    type Input = TournamentInput;
    const KIND: EntityKind = EntityKind::Tournament;
}
