//! Skill detail table operations
//!
//! Per-level attribute rows hang off a skill and have their own add/update
//! mutations rather than going through the generic CRUD surface.

use serde_json::json;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use kb_core::domain::{SkillDetail, SkillDetailInput, SkillWithDetails};
use kb_core::error::DomainError;

use crate::client::{Auth, GraphQlClient};
use crate::documents;

pub struct SkillApi {
    client: Arc<GraphQlClient>,
}

impl SkillApi {
    pub fn new(client: Arc<GraphQlClient>) -> Self {
        Self { client }
    }

    /// All skills with their per-level tables.
    pub async fn details(&self) -> Result<Vec<SkillWithDetails>, DomainError> {
        let data = self
            .client
            .execute(documents::GET_SKILLS_DETAIL.to_string(), json!({}), Auth::Optional)
            .await
            .map_err(|e| e.into_domain_unbound())?;
        let value =
            GraphQlClient::take_field(data, "skills").map_err(|e| e.into_domain_unbound())?;
        serde_json::from_value(value)
            .map_err(|e| DomainError::Api(format!("Malformed skill detail list: {e}")))
    }

    pub async fn add_details(
        &self,
        skill_id: &str,
        rows: Vec<SkillDetailInput>,
    ) -> Result<Vec<SkillDetail>, DomainError> {
        for row in &rows {
            row.validate()?;
        }
        info!(skill = %skill_id, rows = rows.len(), "Adding skill detail rows");
        let data = self
            .client
            .execute(
                documents::ADD_SKILL_DETAILS.to_string(),
                json!({ "skillId": skill_id, "input": rows }),
                Auth::Required,
            )
            .await
            .map_err(|e| e.into_domain_unbound())?;
        let value = GraphQlClient::take_field(data, "addSkillDetailToSkill")
            .map_err(|e| e.into_domain_unbound())?;
        serde_json::from_value(value)
            .map_err(|e| DomainError::Api(format!("Malformed skill detail payload: {e}")))
    }

    pub async fn update_detail(
        &self,
        skill_id: &str,
        detail_id: &str,
        row: SkillDetailInput,
    ) -> Result<SkillDetail, DomainError> {
        row.validate()?;
        info!(skill = %skill_id, detail = %detail_id, "Updating skill detail row");
        let data = self
            .client
            .execute(
                documents::UPDATE_SKILL_DETAIL.to_string(),
                json!({ "skillId": skill_id, "skillDetailId": detail_id, "input": row }),
                Auth::Required,
            )
            .await
            .map_err(|e| e.into_domain_unbound())?;
        let value = GraphQlClient::take_field(data, "updateSkillDetailToSkill")
            .map_err(|e| e.into_domain_unbound())?;
        serde_json::from_value(value)
            .map_err(|e| DomainError::Api(format!("Malformed skill detail payload: {e}")))
    }
}
