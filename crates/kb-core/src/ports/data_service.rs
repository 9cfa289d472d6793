//! Entity data service trait (port)
//!
//! Generic fetch/create/update/delete against the named entity collections
//! of the remote knowledge base. Records cross this boundary as JSON values;
//! typed mapping and input validation happen in the domain layer.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::error::DomainError;

/// The entity collections the remote API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Hero,
    Skill,
    Item,
    Emblem,
    BattleSpell,
    Navigation,
    Tournament,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Hero => "hero",
            EntityKind::Skill => "skill",
            EntityKind::Item => "item",
            EntityKind::Emblem => "emblem",
            EntityKind::BattleSpell => "battle spell",
            EntityKind::Navigation => "navigation item",
            EntityKind::Tournament => "tournament",
        };
        f.write_str(name)
    }
}

/// Port to the authoritative remote store.
///
/// Writes require a credential from the injected session; implementations
/// fail them with [`DomainError::Unauthorized`] when none is present.
/// No call is retried here; retry policy belongs to the caller.
#[async_trait]
pub trait EntityDataService: Send + Sync {
    async fn fetch_all(&self, kind: EntityKind) -> Result<Vec<Value>, DomainError>;

    async fn fetch_by_id(&self, kind: EntityKind, id: &str) -> Result<Value, DomainError>;

    async fn create(&self, kind: EntityKind, input: Value) -> Result<Value, DomainError>;

    async fn update(&self, kind: EntityKind, id: &str, input: Value)
        -> Result<Value, DomainError>;

    async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), DomainError>;
}
