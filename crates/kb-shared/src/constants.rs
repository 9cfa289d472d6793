//! Application-wide constants

/// Deepest navigation level the renderer consumes (0-indexed: root, child,
/// grandchild).
pub const MAX_NAVIGATION_LEVEL: i32 = 2;

pub const ROLE_SUPER_ADMIN: &str = "super_admin";
pub const ROLE_MEMBER: &str = "member";
pub const ROLE_USER: &str = "user";

pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
