// ============================================================================
// KB Core - Navigation Tree Construction
// File: crates/kb-core/src/navigation/tree.rs
// Description: Forest construction and lookup helpers over flat item lists
// ============================================================================

use std::collections::{HashMap, HashSet, VecDeque};
use tracing::warn;

use kb_shared::constants::MAX_NAVIGATION_LEVEL;

use crate::domain::{NavigationItem, NavigationRecord};

/// A navigation item with its resolved, ordered children.
#[derive(Debug, Clone)]
pub struct NavigationNode {
    pub item: NavigationItem,
    pub children: Vec<NavigationNode>,
}

/// Ordered collection of independent trees (multiple roots allowed).
pub type NavigationForest = Vec<NavigationNode>;

/// Normalizes a server-nested payload (records with embedded children) into
/// a flat item list, pre-order.
pub fn flatten_records(records: Vec<NavigationRecord>) -> Vec<NavigationItem> {
    fn walk(record: NavigationRecord, out: &mut Vec<NavigationItem>) {
        out.push(record.item);
        for child in record.children {
            walk(child, out);
        }
    }
    let mut out = Vec::new();
    for record in records {
        walk(record, &mut out);
    }
    out
}

/// Flattens a forest back into its items, pre-order.
pub fn flatten(forest: &NavigationForest) -> Vec<NavigationItem> {
    fn walk(node: &NavigationNode, out: &mut Vec<NavigationItem>) {
        out.push(node.item.clone());
        for child in &node.children {
            walk(child, out);
        }
    }
    let mut out = Vec::new();
    for node in forest {
        walk(node, &mut out);
    }
    out
}

/// Builds an ordered forest from any sequence of items.
///
/// Every input item appears in the output exactly once. Anomalies are
/// repaired deterministically and logged, never dropped and never fatal:
/// - dangling `parent_id` (parent not in the input) → item becomes a root;
/// - items past the maximum depth → promoted to roots;
/// - items trapped in a parent cycle → promoted to roots.
///
/// Sibling groups are sorted by `order` ascending; the sort is stable, so
/// equal orders keep their arrival order. `level` is recomputed from the
/// actual depth on every node.
pub fn build_tree(items: Vec<NavigationItem>) -> NavigationForest {
    let known: HashSet<String> = items.iter().map(|i| i.id.clone()).collect();
    let orders: Vec<i32> = items.iter().map(|i| i.order).collect();

    // Bucket children by parent id, keeping input positions for stable ties.
    let mut child_positions: HashMap<String, Vec<usize>> = HashMap::new();
    let mut root_positions: Vec<usize> = Vec::new();
    for (pos, item) in items.iter().enumerate() {
        match &item.parent_id {
            None => root_positions.push(pos),
            Some(parent) if !known.contains(parent) => {
                warn!(
                    item = %item.id,
                    parent = %parent,
                    "Dangling parent reference, treating item as root"
                );
                root_positions.push(pos);
            }
            Some(parent) => child_positions.entry(parent.clone()).or_default().push(pos),
        }
    }

    let mut slots: Vec<Option<NavigationItem>> = items.into_iter().map(Some).collect();
    root_positions.sort_by_key(|&p| orders[p]);

    let mut forest: NavigationForest = Vec::new();
    let mut worklist: VecDeque<usize> = root_positions.into();
    loop {
        while let Some(pos) = worklist.pop_front() {
            if let Some(node) = attach(
                pos,
                0,
                &mut slots,
                &mut child_positions,
                &orders,
                &mut worklist,
            ) {
                forest.push(node);
            }
        }

        // Anything still unattached sits in a parent cycle. Promote the
        // earliest such item to a root and go again; its reachable subtree
        // follows through the normal path.
        let Some(pos) = slots.iter().position(|s| s.is_some()) else {
            break;
        };
        if let Some(parent) = slots[pos].as_ref().and_then(|i| i.parent_id.clone()) {
            if let Some(bucket) = child_positions.get_mut(&parent) {
                bucket.retain(|&p| p != pos);
            }
        }
        if let Some(item) = slots[pos].as_ref() {
            warn!(item = %item.id, "Parent cycle detected, promoting item to root");
        }
        worklist.push_back(pos);
    }

    forest
}

/// Takes the item at `pos` and recursively attaches its children. Children
/// that would exceed the depth bound are requeued as roots instead.
fn attach(
    pos: usize,
    depth: i32,
    slots: &mut Vec<Option<NavigationItem>>,
    child_positions: &mut HashMap<String, Vec<usize>>,
    orders: &[i32],
    overflow: &mut VecDeque<usize>,
) -> Option<NavigationNode> {
    let mut item = slots[pos].take()?;
    item.level = depth;
    let mut node = NavigationNode {
        item,
        children: Vec::new(),
    };

    if let Some(mut kid_positions) = child_positions.remove(&node.item.id) {
        kid_positions.sort_by_key(|&p| orders[p]);
        for kid_pos in kid_positions {
            if depth >= MAX_NAVIGATION_LEVEL {
                if let Some(kid) = slots[kid_pos].as_ref() {
                    warn!(
                        item = %kid.id,
                        parent = %node.item.id,
                        "Item exceeds maximum navigation depth, promoting to root"
                    );
                }
                overflow.push_back(kid_pos);
            } else if let Some(child) =
                attach(kid_pos, depth + 1, slots, child_positions, orders, overflow)
            {
                node.children.push(child);
            }
        }
    }

    Some(node)
}

/// Finds an item in a flat list by id.
pub fn find_by_id<'a>(items: &'a [NavigationItem], id: &str) -> Option<&'a NavigationItem> {
    items.iter().find(|i| i.id == id)
}

/// Direct children of `id`, in input order.
pub fn children_of<'a>(items: &'a [NavigationItem], id: &str) -> Vec<&'a NavigationItem> {
    items
        .iter()
        .filter(|i| i.parent_id.as_deref() == Some(id))
        .collect()
}

/// Root-to-node path ending at `id`. Empty when `id` is unknown. A broken or
/// cyclic parent chain terminates the walk instead of looping.
pub fn ancestors_of<'a>(items: &'a [NavigationItem], id: &str) -> Vec<&'a NavigationItem> {
    let mut path: Vec<&NavigationItem> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut current = find_by_id(items, id);
    while let Some(item) = current {
        if !seen.insert(item.id.as_str()) {
            break;
        }
        path.push(item);
        current = item.parent_id.as_deref().and_then(|p| find_by_id(items, p));
    }
    path.reverse();
    path
}

/// Whether `candidate_id` sits anywhere below `ancestor_id`.
pub fn is_descendant(items: &[NavigationItem], ancestor_id: &str, candidate_id: &str) -> bool {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut current = find_by_id(items, candidate_id).and_then(|i| i.parent_id.as_deref());
    while let Some(parent) = current {
        if parent == ancestor_id {
            return true;
        }
        if !seen.insert(parent) {
            return false;
        }
        current = find_by_id(items, parent).and_then(|i| i.parent_id.as_deref());
    }
    false
}

/// Depth of `id` computed from its parent chain (0 for roots and for unknown
/// or dangling parents, matching how the builder repairs them).
pub fn depth_of(items: &[NavigationItem], id: &str) -> i32 {
    let path = ancestors_of(items, id);
    if path.is_empty() {
        0
    } else {
        (path.len() - 1) as i32
    }
}
