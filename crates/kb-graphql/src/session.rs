//! Shared session store
//!
//! The one place client-side credentials live. Populated on successful
//! login, cleared on logout; everything else reads it through the core's
//! `SessionContext` port instead of reaching into ambient storage.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use kb_core::ports::SessionContext;

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub roles: BTreeSet<String>,
}

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub user: AuthUser,
}

#[derive(Clone, Default)]
pub struct SharedSession {
    inner: Arc<RwLock<Option<AuthSession>>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<AuthSession>> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set(&self, session: AuthSession) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(session);
    }

    pub fn clear(&self) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = None;
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.read().as_ref().map(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }
}

impl SessionContext for SharedSession {
    fn current_credential(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.access_token.clone())
    }

    fn current_roles(&self) -> BTreeSet<String> {
        self.read()
            .as_ref()
            .map(|s| s.user.roles.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> AuthSession {
        AuthSession {
            access_token: "token-123".into(),
            user: AuthUser {
                id: "u1".into(),
                name: "Admin".into(),
                email: "admin@example.com".into(),
                roles: ["super_admin".to_string()].into(),
            },
        }
    }

    #[test]
    fn test_lifecycle() {
        let store = SharedSession::new();
        assert!(store.current_credential().is_none());
        assert!(store.current_roles().is_empty());

        store.set(session());
        assert_eq!(store.current_credential().as_deref(), Some("token-123"));
        assert!(store.current_roles().contains("super_admin"));

        store.clear();
        assert!(store.current_credential().is_none());
        assert!(!store.is_authenticated());
    }
}
