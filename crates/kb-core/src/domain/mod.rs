//! # KB Core - Domain Module
//!
//! Typed entities for the knowledge-base collections, with validated input
//! structs at the boundary (no untyped form payloads are ever forwarded).

pub mod battle_spell;
pub mod emblem;
pub mod hero;
pub mod item;
pub mod navigation_item;
pub mod skill;
pub mod tournament;

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::error::DomainError;
use crate::ports::EntityKind;

// Re-export all entities and inputs
pub use battle_spell::{BattleSpell, BattleSpellInput};
pub use emblem::{Emblem, EmblemAttribute, EmblemInput};
pub use hero::{Hero, HeroInput};
pub use item::{Item, ItemInput};
pub use navigation_item::{NavigationInput, NavigationItem, NavigationRecord};
pub use skill::{Skill, SkillDetail, SkillDetailInput, SkillInput, SkillWithDetails};
pub use tournament::{HeroStat, SyncResult, Tournament, TournamentInput, TournamentStage};

/// Links an entity type to its collection and its validated input struct.
pub trait CatalogEntity: DeserializeOwned + Send + 'static {
    type Input: Validate + Serialize + Send + Sync;
    const KIND: EntityKind;
}

/// Serializes a validated input for the data-service boundary.
pub fn encode_input<T: Serialize>(input: &T) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(input).map_err(|e| DomainError::Api(format!("Failed to encode input: {e}")))
}

/// Maps a raw record from the data service into its typed entity.
pub fn decode_record<T: DeserializeOwned>(
    kind: EntityKind,
    record: serde_json::Value,
) -> Result<T, DomainError> {
    serde_json::from_value(record)
        .map_err(|e| DomainError::Api(format!("Malformed {kind} record: {e}")))
}
