// ============================================================================
// KB GraphQL - Client
// File: crates/kb-graphql/src/client.rs
// Description: GraphQL-over-HTTP transport with session-aware auth
// ============================================================================

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use kb_core::error::DomainError;
use kb_core::ports::{EntityKind, SessionContext};
use kb_shared::config::ApiSettings;

/// Whether a call must carry a bearer credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    Required,
    Optional,
}

/// Failure shapes coming back over the wire, before they are bound to an
/// entity kind. The caller maps these into the domain taxonomy.
#[derive(Debug)]
pub(crate) enum WireError {
    Unauthorized,
    NotFound(String),
    Validation(String),
    Other(String),
}

impl WireError {
    /// Binds a wire failure to the entity it concerned.
    pub(crate) fn into_domain(self, kind: EntityKind, id: Option<&str>) -> DomainError {
        match self {
            WireError::Unauthorized => DomainError::Unauthorized,
            WireError::NotFound(_) => DomainError::NotFound {
                kind,
                id: id.unwrap_or("<unknown>").to_string(),
            },
            WireError::Validation(message) => DomainError::Validation(message),
            WireError::Other(message) => DomainError::Api(message),
        }
    }

    /// For calls that are not about a single entity (auth, sync).
    pub(crate) fn into_domain_unbound(self) -> DomainError {
        match self {
            WireError::Unauthorized => DomainError::Unauthorized,
            WireError::Validation(message) => DomainError::Validation(message),
            WireError::NotFound(message) | WireError::Other(message) => DomainError::Api(message),
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    data: Option<Value>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
    #[serde(default)]
    extensions: Option<Extensions>,
}

#[derive(Deserialize, Default)]
struct Extensions {
    #[serde(default)]
    code: Option<String>,
}

/// GraphQL transport. Stateless apart from the injected session, so it can
/// be shared freely behind an `Arc`.
pub struct GraphQlClient {
    http: Client,
    endpoint: String,
    session: Arc<dyn SessionContext>,
}

impl GraphQlClient {
    pub fn new(
        settings: &ApiSettings,
        session: Arc<dyn SessionContext>,
    ) -> Result<Self, DomainError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| DomainError::Api(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
            session,
        })
    }

    /// Posts one GraphQL operation and unwraps the envelope.
    ///
    /// Writes carry `Auth::Required` and fail with `Unauthorized` before
    /// anything is sent when the session holds no credential.
    pub(crate) async fn execute(
        &self,
        document: String,
        variables: Value,
        auth: Auth,
    ) -> Result<Value, WireError> {
        let credential = self.session.current_credential();
        if auth == Auth::Required && credential.is_none() {
            return Err(WireError::Unauthorized);
        }

        debug!(endpoint = %self.endpoint, "Executing GraphQL operation");
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": document, "variables": variables }));
        if let Some(token) = credential {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| WireError::Other(format!("GraphQL request failed: {e}")))?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(WireError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WireError::Other(format!(
                "GraphQL endpoint returned {status}: {body}"
            )));
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| WireError::Other(format!("Malformed GraphQL response: {e}")))?;

        if let Some(errors) = envelope.errors {
            if let Some(first) = errors.into_iter().next() {
                return Err(classify(first));
            }
        }

        envelope
            .data
            .ok_or_else(|| WireError::Other("GraphQL response carried no data".to_string()))
    }

    /// Extracts one field of the data object, failing loudly when the server
    /// omitted it.
    pub(crate) fn take_field(mut data: Value, field: &str) -> Result<Value, WireError> {
        let value = data.get_mut(field).map(Value::take);
        match value {
            Some(v) if !v.is_null() => Ok(v),
            _ => Err(WireError::Other(format!(
                "GraphQL response missing field '{field}'"
            ))),
        }
    }
}

fn classify(error: GraphQlError) -> WireError {
    let code = error
        .extensions
        .unwrap_or_default()
        .code
        .unwrap_or_default();
    match code.as_str() {
        "UNAUTHENTICATED" | "FORBIDDEN" => WireError::Unauthorized,
        "NOT_FOUND" => WireError::NotFound(error.message),
        "BAD_USER_INPUT" | "GRAPHQL_VALIDATION_FAILED" => WireError::Validation(error.message),
        _ => WireError::Other(error.message),
    }
}
