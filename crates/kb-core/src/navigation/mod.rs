//! # KB Core - Navigation Module
//!
//! The navigation tree: forest construction from flat or server-nested
//! records, per-viewer visibility filtering, and invariant-preserving
//! mutations against the remote store.

pub mod service;
pub mod tree;
pub mod visibility;

pub use service::NavigationService;
pub use tree::{
    ancestors_of, build_tree, children_of, depth_of, find_by_id, flatten, flatten_records,
    is_descendant, NavigationForest, NavigationNode,
};
pub use visibility::filter_for_viewer;
