//! Per-viewer visibility filtering
//!
//! A pure projection over a built forest: no I/O, no mutation, idempotent.

use std::collections::BTreeSet;

use super::tree::{NavigationForest, NavigationNode};

/// Keeps the items the viewer may see.
///
/// An item survives iff `is_active && is_visible` and its role set is empty
/// (visible to all authenticated roles) or intersects the viewer's roles.
/// Excluding an item excludes its entire subtree; siblings are evaluated
/// independently and keep their relative order.
pub fn filter_for_viewer(
    forest: &NavigationForest,
    viewer_roles: &BTreeSet<String>,
) -> NavigationForest {
    forest
        .iter()
        .filter(|node| node.item.visible_to(viewer_roles))
        .map(|node| NavigationNode {
            item: node.item.clone(),
            children: filter_for_viewer(&node.children, viewer_roles),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NavigationItem;
    use crate::navigation::tree::{build_tree, flatten};

    fn item(id: &str, parent: Option<&str>, roles: &[&str]) -> NavigationItem {
        NavigationItem {
            id: id.into(),
            name: id.into(),
            route: None,
            icon: None,
            parent_id: parent.map(Into::into),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            order: 0,
            is_header: false,
            is_active: true,
            is_visible: true,
            level: 0,
        }
    }

    fn viewer(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_role_mismatch_excludes_subtree_siblings_survive() {
        let forest = build_tree(vec![
            item("admin", None, &["super_admin"]),
            item("admin-child", Some("admin"), &[]),
            item("public", None, &[]),
        ]);
        let filtered = filter_for_viewer(&forest, &viewer(&["member"]));
        let names: Vec<String> = flatten(&filtered).into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["public"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let forest = build_tree(vec![
            item("a", None, &["member"]),
            item("b", Some("a"), &["super_admin"]),
            item("c", None, &[]),
        ]);
        let roles = viewer(&["member"]);
        let once = filter_for_viewer(&forest, &roles);
        let twice = filter_for_viewer(&once, &roles);
        assert_eq!(flatten(&once).len(), flatten(&twice).len());
        let a: Vec<String> = flatten(&once).into_iter().map(|i| i.id).collect();
        let b: Vec<String> = flatten(&twice).into_iter().map(|i| i.id).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_inactive_and_invisible_excluded() {
        let mut hidden = item("hidden", None, &[]);
        hidden.is_visible = false;
        let mut disabled = item("disabled", None, &[]);
        disabled.is_active = false;
        let forest = build_tree(vec![hidden, disabled, item("shown", None, &[])]);
        let filtered = filter_for_viewer(&forest, &viewer(&["member"]));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].item.id, "shown");
    }

    #[test]
    fn test_sibling_order_preserved() {
        let mut first = item("first", None, &[]);
        first.order = 1;
        let mut blocked = item("blocked", None, &["super_admin"]);
        blocked.order = 2;
        let mut last = item("last", None, &[]);
        last.order = 3;
        let forest = build_tree(vec![first, blocked, last]);
        let filtered = filter_for_viewer(&forest, &viewer(&["member"]));
        let ids: Vec<&str> = filtered.iter().map(|n| n.item.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "last"]);
    }
}
