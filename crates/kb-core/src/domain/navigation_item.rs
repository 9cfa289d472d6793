// ============================================================================
// KB Core - Navigation Item Entity
// File: crates/kb-core/src/domain/navigation_item.rs
// Description: Menu entry of the admin navigation hierarchy
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::DomainError;
use crate::ports::EntityKind;

/// One entry of the navigation menu, as stored by the backend.
///
/// `level` is derived state: it must equal the depth computed from the
/// `parent_id` chain. The tree builder recomputes it on every build, so a
/// stale value coming off the wire is corrected rather than trusted.
/// Children are never stored here; they live on the tree node type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Role tags permitted to see this entry; empty means visible to all
    /// authenticated roles.
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub is_header: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default)]
    pub level: i32,
}

fn default_true() -> bool {
    true
}

impl NavigationItem {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Display eligibility for a given viewer, ignoring tree position.
    pub fn visible_to(&self, viewer_roles: &std::collections::BTreeSet<String>) -> bool {
        self.is_active
            && self.is_visible
            && (self.roles.is_empty() || self.roles.iter().any(|r| viewer_roles.contains(r)))
    }
}

/// Navigation record as the backend's tree query returns it, with children
/// embedded. Flattened before the tree is rebuilt locally.
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationRecord {
    #[serde(flatten)]
    pub item: NavigationItem,
    #[serde(default)]
    pub children: Vec<NavigationRecord>,
}

/// Validated construction/replace request for a navigation item.
///
/// `level` is intentionally absent: it is computed from the resolved parent
/// when the write is issued, never accepted from the caller.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NavigationInput {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    pub route: Option<String>,
    pub icon: Option<String>,
    pub parent_id: Option<String>,
    pub roles: Vec<String>,
    pub order: i32,
    pub is_header: bool,
    pub is_active: bool,
    pub is_visible: bool,
}

impl NavigationInput {
    /// Wire record for create/update, with the computed level attached.
    pub fn to_record(&self, level: i32) -> Result<Value, DomainError> {
        let mut record = crate::domain::encode_input(self)?;
        record["level"] = Value::from(level);
        Ok(record)
    }
}

impl Default for NavigationInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            route: None,
            icon: None,
            parent_id: None,
            roles: Vec::new(),
            order: 0,
            is_header: false,
            is_active: true,
            is_visible: true,
        }
    }
}

impl crate::domain::CatalogEntity for NavigationItem {
    type Input = NavigationInput;
    const KIND: EntityKind = EntityKind::Navigation;
}
