//! Tournament tracking extras
//!
//! Read models and the Liquipedia sync trigger that sit outside the generic
//! CRUD surface.

use serde_json::json;
use std::sync::Arc;
use tracing::info;

use kb_core::domain::{HeroStat, SyncResult, TournamentStage};
use kb_core::error::DomainError;

use crate::client::{Auth, GraphQlClient};
use crate::documents;

pub struct TournamentApi {
    client: Arc<GraphQlClient>,
}

impl TournamentApi {
    pub fn new(client: Arc<GraphQlClient>) -> Self {
        Self { client }
    }

    /// Triggers a server-side sync of one tournament from Liquipedia.
    pub async fn sync(&self, tournament_id: &str) -> Result<SyncResult, DomainError> {
        info!(tournament = %tournament_id, "Requesting tournament sync");
        let data = self
            .client
            .execute(
                documents::SYNC_TOURNAMENT.to_string(),
                json!({ "id": tournament_id }),
                Auth::Required,
            )
            .await
            .map_err(|e| e.into_domain_unbound())?;
        let value = GraphQlClient::take_field(data, "syncTournament")
            .map_err(|e| e.into_domain_unbound())?;
        serde_json::from_value(value)
            .map_err(|e| DomainError::Api(format!("Malformed sync result: {e}")))
    }

    pub async fn stages(&self, tournament_id: &str) -> Result<Vec<TournamentStage>, DomainError> {
        let data = self
            .client
            .execute(
                documents::GET_STAGES.to_string(),
                json!({ "tournamentId": tournament_id }),
                Auth::Optional,
            )
            .await
            .map_err(|e| e.into_domain_unbound())?;
        let value = GraphQlClient::take_field(data, "tournamentStages")
            .map_err(|e| e.into_domain_unbound())?;
        serde_json::from_value(value)
            .map_err(|e| DomainError::Api(format!("Malformed stage list: {e}")))
    }

    pub async fn hero_stats(&self, stage_id: &str) -> Result<Vec<HeroStat>, DomainError> {
        let data = self
            .client
            .execute(
                documents::GET_HERO_STATS.to_string(),
                json!({ "stageId": stage_id }),
                Auth::Optional,
            )
            .await
            .map_err(|e| e.into_domain_unbound())?;
        let value = GraphQlClient::take_field(data, "heroStats")
            .map_err(|e| e.into_domain_unbound())?;
        serde_json::from_value(value)
            .map_err(|e| DomainError::Api(format!("Malformed hero stats: {e}")))
    }
}
