// ============================================================================
// KB Core - Navigation Service
// File: crates/kb-core/src/navigation/service.rs
// Description: Invariant-preserving mutations over the navigation collection
// ============================================================================

use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use validator::Validate;

use kb_shared::constants::MAX_NAVIGATION_LEVEL;
use kb_shared::types::DeletePolicy;

use crate::domain::{decode_record, NavigationInput, NavigationItem, NavigationRecord};
use crate::error::DomainError;
use crate::navigation::tree::{self, build_tree, NavigationForest};
use crate::navigation::visibility::filter_for_viewer;
use crate::ports::{EntityDataService, EntityKind};

/// Mutations and reads over the navigation collection.
///
/// The remote store is authoritative: every mutation re-reads current state
/// first, and nothing is patched locally on success or failure; callers
/// re-fetch. A single mutex serializes the read-validate-write sequence so
/// no mutation runs against stale data while another is outstanding.
pub struct NavigationService<D> {
    data: Arc<D>,
    delete_policy: DeletePolicy,
    mutation_lock: Mutex<()>,
}

impl<D: EntityDataService> NavigationService<D> {
    pub fn new(data: Arc<D>, delete_policy: DeletePolicy) -> Self {
        Self {
            data,
            delete_policy,
            mutation_lock: Mutex::new(()),
        }
    }

    /// Current flat item list from the remote store. The backend returns a
    /// nested tree; it is flattened here and rebuilt locally so repairs and
    /// level recomputation always apply.
    pub async fn fetch_items(&self) -> Result<Vec<NavigationItem>, DomainError> {
        let values = self.data.fetch_all(EntityKind::Navigation).await?;
        let records: Vec<NavigationRecord> = values
            .into_iter()
            .map(|v| decode_record(EntityKind::Navigation, v))
            .collect::<Result<_, _>>()?;
        Ok(tree::flatten_records(records))
    }

    /// The raw (unfiltered) forest.
    pub async fn tree(&self) -> Result<NavigationForest, DomainError> {
        Ok(build_tree(self.fetch_items().await?))
    }

    /// The forest as a given viewer sees it.
    pub async fn visible_tree(
        &self,
        viewer_roles: &BTreeSet<String>,
    ) -> Result<NavigationForest, DomainError> {
        let forest = self.tree().await?;
        Ok(filter_for_viewer(&forest, viewer_roles))
    }

    pub async fn create(&self, input: NavigationInput) -> Result<NavigationItem, DomainError> {
        input.validate()?;
        let _guard = self.mutation_lock.lock().await;
        let items = self.fetch_items().await?;
        let level = resolve_level(&items, input.parent_id.as_deref(), None)?;
        let record = input.to_record(level)?;
        info!(name = %input.name, level, "Creating navigation item");
        let created = self.data.create(EntityKind::Navigation, record).await?;
        decode_record(EntityKind::Navigation, created)
    }

    /// Full replace of the mutable fields of `id`.
    pub async fn update(
        &self,
        id: &str,
        input: NavigationInput,
    ) -> Result<NavigationItem, DomainError> {
        input.validate()?;
        let _guard = self.mutation_lock.lock().await;
        let items = self.fetch_items().await?;
        if tree::find_by_id(&items, id).is_none() {
            return Err(DomainError::NotFound {
                kind: EntityKind::Navigation,
                id: id.to_string(),
            });
        }
        let level = resolve_level(&items, input.parent_id.as_deref(), Some(id))?;
        let record = input.to_record(level)?;
        info!(item = %id, level, "Updating navigation item");
        let updated = self.data.update(EntityKind::Navigation, id, record).await?;
        decode_record(EntityKind::Navigation, updated)
    }

    /// Deletes `id` according to the configured [`DeletePolicy`].
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let _guard = self.mutation_lock.lock().await;
        let items = self.fetch_items().await?;
        if tree::find_by_id(&items, id).is_none() {
            return Err(DomainError::NotFound {
                kind: EntityKind::Navigation,
                id: id.to_string(),
            });
        }
        let children = tree::children_of(&items, id);
        match self.delete_policy {
            DeletePolicy::Reject => {
                if !children.is_empty() {
                    return Err(DomainError::HasChildren { id: id.to_string() });
                }
                info!(item = %id, "Deleting navigation item");
                self.data.delete(EntityKind::Navigation, id).await
            }
            DeletePolicy::Cascade => {
                // Pre-order from the target, then reversed: every child is
                // deleted before its parent.
                let subtree = collect_subtree(&items, id);
                warn!(item = %id, count = subtree.len(), "Cascade-deleting navigation subtree");
                for victim in subtree.iter().rev() {
                    self.data.delete(EntityKind::Navigation, victim).await?;
                }
                Ok(())
            }
        }
    }
}

/// Level the item ends up at under `parent_id`, after all structural checks.
///
/// `moving_id` is set on update: reparenting under yourself or one of your
/// descendants is a cycle and is rejected outright.
fn resolve_level(
    items: &[NavigationItem],
    parent_id: Option<&str>,
    moving_id: Option<&str>,
) -> Result<i32, DomainError> {
    let Some(parent) = parent_id else {
        return Ok(0);
    };
    if tree::find_by_id(items, parent).is_none() {
        return Err(DomainError::NotFound {
            kind: EntityKind::Navigation,
            id: parent.to_string(),
        });
    }
    if let Some(id) = moving_id {
        if parent == id || tree::is_descendant(items, id, parent) {
            return Err(DomainError::Cycle { id: id.to_string() });
        }
    }
    let level = tree::depth_of(items, parent) + 1;
    if level > MAX_NAVIGATION_LEVEL {
        return Err(DomainError::Validation(format!(
            "Navigation depth limit exceeded: level {level} is past the maximum of {MAX_NAVIGATION_LEVEL}"
        )));
    }
    Ok(level)
}

/// Pre-order id list of `id` and everything below it.
fn collect_subtree(items: &[NavigationItem], id: &str) -> Vec<String> {
    let mut out = vec![id.to_string()];
    let mut cursor = 0;
    while cursor < out.len() {
        let current = out[cursor].clone();
        for child in tree::children_of(items, &current) {
            if !out.contains(&child.id) {
                out.push(child.id.clone());
            }
        }
        cursor += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;
    use serde_json::{json, Value};

    mock! {
        DataService {}

        #[async_trait::async_trait]
        impl EntityDataService for DataService {
            async fn fetch_all(&self, kind: EntityKind) -> Result<Vec<Value>, DomainError>;
            async fn fetch_by_id(&self, kind: EntityKind, id: &str) -> Result<Value, DomainError>;
            async fn create(&self, kind: EntityKind, input: Value) -> Result<Value, DomainError>;
            async fn update(&self, kind: EntityKind, id: &str, input: Value) -> Result<Value, DomainError>;
            async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), DomainError>;
        }
    }

    fn record(id: &str, parent: Option<&str>, order: i32) -> Value {
        json!({
            "_id": id,
            "name": id,
            "parent_id": parent,
            "order": order,
            "is_header": false,
            "is_active": true,
            "is_visible": true,
            "level": 0,
            "roles": [],
        })
    }

    fn input(name: &str, parent: Option<&str>) -> NavigationInput {
        NavigationInput {
            name: name.into(),
            parent_id: parent.map(Into::into),
            ..Default::default()
        }
    }

    fn chain_fixture() -> Vec<Value> {
        // 1 -> 2 -> 3
        vec![
            record("1", None, 1),
            record("2", Some("1"), 1),
            record("3", Some("2"), 1),
        ]
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name_before_any_call() {
        let data = MockDataService::new();
        let service = NavigationService::new(Arc::new(data), DeletePolicy::Reject);
        let err = service.create(input("", None)).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_parent() {
        let mut data = MockDataService::new();
        data.expect_fetch_all().returning(|_| Ok(vec![]));
        let service = NavigationService::new(Arc::new(data), DeletePolicy::Reject);
        let err = service.create(input("New", Some("ghost"))).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_rejects_fourth_level() {
        let mut data = MockDataService::new();
        data.expect_fetch_all().returning(|_| Ok(chain_fixture()));
        let service = NavigationService::new(Arc::new(data), DeletePolicy::Reject);
        let err = service.create(input("Deep", Some("3"))).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_sends_computed_level() {
        let mut data = MockDataService::new();
        data.expect_fetch_all().returning(|_| Ok(chain_fixture()));
        data.expect_create()
            .withf(|kind, record| *kind == EntityKind::Navigation && record["level"] == 2)
            .returning(|_, _| Ok(record("4", Some("2"), 1)));
        let service = NavigationService::new(Arc::new(data), DeletePolicy::Reject);
        let created = service.create(input("Grandchild", Some("2"))).await.unwrap();
        assert_eq!(created.id, "4");
    }

    #[tokio::test]
    async fn test_update_cycle_rejected_without_write() {
        let mut data = MockDataService::new();
        data.expect_fetch_all().returning(|_| Ok(chain_fixture()));
        // No expect_update: any write attempt fails the test, so a rejected
        // call provably leaves the remote tree untouched.
        let service = NavigationService::new(Arc::new(data), DeletePolicy::Reject);
        let err = service.update("1", input("1", Some("3"))).await.unwrap_err();
        assert!(matches!(err, DomainError::Cycle { .. }));
    }

    #[tokio::test]
    async fn test_update_self_parent_rejected() {
        let mut data = MockDataService::new();
        data.expect_fetch_all().returning(|_| Ok(chain_fixture()));
        let service = NavigationService::new(Arc::new(data), DeletePolicy::Reject);
        let err = service.update("2", input("2", Some("2"))).await.unwrap_err();
        assert!(matches!(err, DomainError::Cycle { .. }));
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let mut data = MockDataService::new();
        data.expect_fetch_all().returning(|_| Ok(chain_fixture()));
        let service = NavigationService::new(Arc::new(data), DeletePolicy::Reject);
        let err = service.update("404", input("x", None)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_reject_policy_with_children() {
        let mut data = MockDataService::new();
        data.expect_fetch_all().returning(|_| Ok(chain_fixture()));
        let service = NavigationService::new(Arc::new(data), DeletePolicy::Reject);
        let err = service.delete("1").await.unwrap_err();
        assert!(matches!(err, DomainError::HasChildren { .. }));
    }

    #[tokio::test]
    async fn test_delete_reject_policy_leaf() {
        let mut data = MockDataService::new();
        data.expect_fetch_all().returning(|_| Ok(chain_fixture()));
        data.expect_delete()
            .with(eq(EntityKind::Navigation), eq("3"))
            .times(1)
            .returning(|_, _| Ok(()));
        let service = NavigationService::new(Arc::new(data), DeletePolicy::Reject);
        service.delete("3").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_cascade_children_before_parents() {
        let mut data = MockDataService::new();
        data.expect_fetch_all().returning(|_| Ok(chain_fixture()));
        let mut seq = mockall::Sequence::new();
        for id in ["3", "2", "1"] {
            data.expect_delete()
                .with(eq(EntityKind::Navigation), eq(id))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }
        let service = NavigationService::new(Arc::new(data), DeletePolicy::Cascade);
        service.delete("1").await.unwrap();
    }

    #[tokio::test]
    async fn test_visible_tree_filters_by_role() {
        let mut data = MockDataService::new();
        data.expect_fetch_all().returning(|_| {
            Ok(vec![
                json!({
                    "_id": "admin", "name": "Admin", "order": 1,
                    "roles": ["super_admin"],
                }),
                json!({
                    "_id": "home", "name": "Home", "order": 2,
                    "roles": [],
                }),
            ])
        });
        let service = NavigationService::new(Arc::new(data), DeletePolicy::Reject);
        let viewer: BTreeSet<String> = ["member".to_string()].into();
        let forest = service.visible_tree(&viewer).await.unwrap();
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].item.id, "home");
    }
}
