// ============================================================================
// KB GraphQL - Entity Data Service Implementation
// File: crates/kb-graphql/src/entity_api.rs
// ============================================================================
//! The core's `EntityDataService` port, backed by GraphQL operations.
//!
//! Reads go out with whatever credential the session holds (or none);
//! writes refuse to leave the client without one. Update merges the record
//! id into the input payload, matching the backend's replace-style
//! `update<Entity>Input` convention.

use async_trait::async_trait;
use serde_json::{json, Value};

use kb_core::error::DomainError;
use kb_core::ports::{EntityDataService, EntityKind};

use crate::client::{Auth, GraphQlClient};
use crate::documents;

#[async_trait]
impl EntityDataService for GraphQlClient {
    async fn fetch_all(&self, kind: EntityKind) -> Result<Vec<Value>, DomainError> {
        let meta = documents::meta(kind);
        let data = self
            .execute(documents::list_query(kind), json!({}), Auth::Optional)
            .await
            .map_err(|e| e.into_domain(kind, None))?;
        let value = GraphQlClient::take_field(data, meta.list_field)
            .map_err(|e| e.into_domain(kind, None))?;
        match value {
            Value::Array(records) => Ok(records),
            other => Err(DomainError::Api(format!(
                "Expected a list of {kind} records, got: {other}"
            ))),
        }
    }

    async fn fetch_by_id(&self, kind: EntityKind, id: &str) -> Result<Value, DomainError> {
        let meta = documents::meta(kind);
        let data = self
            .execute(documents::get_query(kind), json!({ "id": id }), Auth::Optional)
            .await
            .map_err(|e| e.into_domain(kind, Some(id)))?;
        GraphQlClient::take_field(data, meta.get_field).map_err(|_| DomainError::NotFound {
            kind,
            id: id.to_string(),
        })
    }

    async fn create(&self, kind: EntityKind, input: Value) -> Result<Value, DomainError> {
        let meta = documents::meta(kind);
        let data = self
            .execute(
                documents::create_mutation(kind),
                json!({ "input": input }),
                Auth::Required,
            )
            .await
            .map_err(|e| e.into_domain(kind, None))?;
        GraphQlClient::take_field(data, &format!("create{}", meta.pascal))
            .map_err(|e| e.into_domain(kind, None))
    }

    async fn update(
        &self,
        kind: EntityKind,
        id: &str,
        mut input: Value,
    ) -> Result<Value, DomainError> {
        let meta = documents::meta(kind);
        if let Some(object) = input.as_object_mut() {
            object.insert("_id".to_string(), Value::from(id));
        }
        let data = self
            .execute(
                documents::update_mutation(kind),
                json!({ "input": input }),
                Auth::Required,
            )
            .await
            .map_err(|e| e.into_domain(kind, Some(id)))?;
        GraphQlClient::take_field(data, &format!("update{}", meta.pascal))
            .map_err(|e| e.into_domain(kind, Some(id)))
    }

    async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), DomainError> {
        let meta = documents::meta(kind);
        let data = self
            .execute(
                documents::delete_mutation(kind),
                json!({ "id": id }),
                Auth::Required,
            )
            .await
            .map_err(|e| e.into_domain(kind, Some(id)))?;
        GraphQlClient::take_field(data, &format!("delete{}", meta.pascal))
            .map_err(|e| e.into_domain(kind, Some(id)))?;
        Ok(())
    }
}
