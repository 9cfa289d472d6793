// ============================================================================
// KB GraphQL - Auth API
// File: crates/kb-graphql/src/auth.rs
// Description: Login/register/logout against the backend, session lifecycle
// ============================================================================

use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, warn};

use kb_core::error::DomainError;
use kb_shared::utils::mask_email;

use crate::client::{Auth, GraphQlClient};
use crate::documents;
use crate::session::{AuthSession, AuthUser, SharedSession};

#[derive(Deserialize)]
struct AuthPayload {
    access_token: String,
    user: WireUser,
}

#[derive(Deserialize)]
struct WireUser {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    email: String,
    #[serde(default)]
    role: Option<String>,
}

/// Authentication flows. Owns the session lifecycle: a successful login or
/// register populates the shared session, logout clears it.
pub struct AuthApi {
    client: Arc<GraphQlClient>,
    session: SharedSession,
}

impl AuthApi {
    pub fn new(client: Arc<GraphQlClient>, session: SharedSession) -> Self {
        Self { client, session }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser, DomainError> {
        info!(email = %mask_email(email), "Login attempt");
        let data = self
            .client
            .execute(
                documents::LOGIN.to_string(),
                json!({ "email": email, "password": password }),
                Auth::Optional,
            )
            .await
            .map_err(|e| e.into_domain_unbound())?;
        let payload = GraphQlClient::take_field(data, "login")
            .map_err(|e| e.into_domain_unbound())
            .and_then(decode_payload)?;
        let user = self.store(payload);
        info!(user = %user.id, "Login successful");
        Ok(user)
    }

    pub async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<AuthUser, DomainError> {
        info!(email = %mask_email(email), "Registering user");
        let data = self
            .client
            .execute(
                documents::REGISTER.to_string(),
                json!({ "email": email, "name": name, "password": password }),
                Auth::Optional,
            )
            .await
            .map_err(|e| e.into_domain_unbound())?;
        let payload = GraphQlClient::take_field(data, "register")
            .map_err(|e| e.into_domain_unbound())
            .and_then(decode_payload)?;
        let user = self.store(payload);
        Ok(user)
    }

    /// Clears the local session unconditionally; the server-side logout is
    /// best-effort since the local credential is gone either way.
    pub async fn logout(&self) {
        let was_authenticated = self.session.is_authenticated();
        let result = if was_authenticated {
            self.client
                .execute(documents::LOGOUT.to_string(), json!({}), Auth::Required)
                .await
                .map(|_| ())
        } else {
            Ok(())
        };
        self.session.clear();
        if let Err(e) = result {
            warn!("Server logout failed, session cleared locally anyway: {e:?}");
        } else {
            info!("Logged out");
        }
    }

    fn store(&self, payload: AuthPayload) -> AuthUser {
        let mut roles = BTreeSet::new();
        if let Some(role) = payload.user.role {
            roles.insert(role);
        }
        let user = AuthUser {
            id: payload.user.id,
            name: payload.user.name,
            email: payload.user.email,
            roles,
        };
        self.session.set(AuthSession {
            access_token: payload.access_token,
            user: user.clone(),
        });
        user
    }
}

fn decode_payload(value: serde_json::Value) -> Result<AuthPayload, DomainError> {
    serde_json::from_value(value).map_err(|e| DomainError::Api(format!("Malformed auth payload: {e}")))
}
