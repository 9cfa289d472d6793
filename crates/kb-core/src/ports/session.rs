//! Session context trait (port)
//!
//! Explicitly injected session state instead of an ambient token lookup.
//! Populated on successful login, cleared on logout; the lifecycle is owned
//! by the adapter crate, the domain only reads from it.

use std::collections::BTreeSet;

pub trait SessionContext: Send + Sync {
    /// Bearer credential for the current session, if any.
    fn current_credential(&self) -> Option<String>;

    /// Role tags of the currently authenticated user. Empty when logged out.
    fn current_roles(&self) -> BTreeSet<String>;
}
