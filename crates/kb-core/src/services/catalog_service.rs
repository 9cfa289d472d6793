// ============================================================================
// KB Core - Catalog Service
// File: crates/kb-core/src/services/catalog_service.rs
// Description: Typed CRUD over the knowledge-base collections
// ============================================================================
//! Thin typed façade over the data-service port: validates inputs at the
//! boundary, maps raw records into entities, never retries.

use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::domain::{decode_record, encode_input, CatalogEntity};
use crate::error::DomainError;
use crate::ports::EntityDataService;

pub struct CatalogService<D> {
    data: Arc<D>,
}

impl<D: EntityDataService> CatalogService<D> {
    pub fn new(data: Arc<D>) -> Self {
        Self { data }
    }

    pub async fn list<E: CatalogEntity>(&self) -> Result<Vec<E>, DomainError> {
        let values = self.data.fetch_all(E::KIND).await?;
        values
            .into_iter()
            .map(|v| decode_record(E::KIND, v))
            .collect()
    }

    pub async fn get<E: CatalogEntity>(&self, id: &str) -> Result<E, DomainError> {
        let value = self.data.fetch_by_id(E::KIND, id).await?;
        decode_record(E::KIND, value)
    }

    pub async fn create<E: CatalogEntity>(&self, input: E::Input) -> Result<E, DomainError> {
        input.validate()?;
        info!(kind = %E::KIND, "Creating record");
        let created = self.data.create(E::KIND, encode_input(&input)?).await?;
        decode_record(E::KIND, created)
    }

    pub async fn update<E: CatalogEntity>(
        &self,
        id: &str,
        input: E::Input,
    ) -> Result<E, DomainError> {
        input.validate()?;
        info!(kind = %E::KIND, id, "Updating record");
        let updated = self.data.update(E::KIND, id, encode_input(&input)?).await?;
        decode_record(E::KIND, updated)
    }

    pub async fn delete<E: CatalogEntity>(&self, id: &str) -> Result<(), DomainError> {
        info!(kind = %E::KIND, id, "Deleting record");
        self.data.delete(E::KIND, id).await
    }
}
