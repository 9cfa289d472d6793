//! HTTP-level tests of the GraphQL adapter against a mock backend.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kb_core::error::DomainError;
use kb_core::navigation::NavigationService;
use kb_core::ports::{EntityDataService, EntityKind};
use kb_graphql::{AuthApi, AuthSession, AuthUser, GraphQlClient, SharedSession};
use kb_shared::config::ApiSettings;
use kb_shared::types::DeletePolicy;

fn settings(server: &MockServer) -> ApiSettings {
    ApiSettings {
        endpoint: format!("{}/graphql", server.uri()),
        timeout_seconds: 5,
    }
}

fn client(server: &MockServer, session: &SharedSession) -> Arc<GraphQlClient> {
    Arc::new(
        GraphQlClient::new(&settings(server), Arc::new(session.clone()))
            .expect("client must build"),
    )
}

fn authenticated_session() -> SharedSession {
    let session = SharedSession::new();
    session.set(AuthSession {
        access_token: "token-123".into(),
        user: AuthUser {
            id: "u1".into(),
            name: "Admin".into(),
            email: "admin@example.com".into(),
            roles: ["super_admin".to_string()].into(),
        },
    });
    session
}

#[tokio::test]
async fn fetch_all_decodes_list_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("GetHeroList"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "heroes": [
                { "_id": "h1", "name": "Layla", "alias": "Malefic Gunner" }
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = SharedSession::new();
    let client = client(&server, &session);
    let records = client.fetch_all(EntityKind::Hero).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Layla");
}

#[tokio::test]
async fn write_without_credential_never_reaches_the_wire() {
    let server = MockServer::start().await;
    // No mounted mock: any request would 404 and fail differently.
    let session = SharedSession::new();
    let client = client(&server, &session);
    let err = client
        .create(EntityKind::Hero, json!({ "name": "Layla" }))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn bearer_credential_attached_to_authenticated_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", "Bearer token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "deleteBattleSpell": { "_id": "s1" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = authenticated_session();
    let client = client(&server, &session);
    client.delete(EntityKind::BattleSpell, "s1").await.unwrap();
}

#[tokio::test]
async fn graphql_error_codes_map_to_domain_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [
                { "message": "Item not found", "extensions": { "code": "NOT_FOUND" } }
            ]
        })))
        .mount(&server)
        .await;

    let session = authenticated_session();
    let client = client(&server, &session);
    let err = client
        .update(EntityKind::Item, "i404", json!({ "name": "x" }))
        .await
        .unwrap_err();
    match err {
        DomainError::NotFound { kind, id } => {
            assert_eq!(kind, EntityKind::Item);
            assert_eq!(id, "i404");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn login_populates_and_logout_clears_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("Login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "login": {
                "access_token": "fresh-token",
                "user": { "_id": "u9", "name": "Ops", "email": "ops@example.com", "role": "member" }
            }}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("Logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "logout": { "message": "bye" } }
        })))
        .mount(&server)
        .await;

    let session = SharedSession::new();
    let auth = AuthApi::new(client(&server, &session), session.clone());

    use kb_core::ports::SessionContext;
    let user = auth.login("ops@example.com", "hunter2").await.unwrap();
    assert_eq!(user.id, "u9");
    assert_eq!(session.current_credential().as_deref(), Some("fresh-token"));
    assert!(session.current_roles().contains("member"));

    auth.logout().await;
    assert!(session.current_credential().is_none());
    assert!(session.current_roles().is_empty());
}

#[tokio::test]
async fn navigation_service_end_to_end_over_graphql() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("GetNavigationTree"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "getNavigationTree": [
                {
                    "_id": "root", "name": "Content", "parent_id": null,
                    "order": 1, "is_header": true, "is_active": true,
                    "is_visible": true, "roles": [], "level": 0,
                    "children": [
                        {
                            "_id": "heroes", "name": "Heroes", "parent_id": "root",
                            "order": 1, "is_header": false, "is_active": true,
                            "is_visible": true, "roles": ["super_admin"], "level": 1,
                            "children": []
                        },
                        {
                            "_id": "items", "name": "Items", "parent_id": "root",
                            "order": 2, "is_header": false, "is_active": true,
                            "is_visible": true, "roles": [], "level": 1,
                            "children": []
                        }
                    ]
                }
            ]}
        })))
        .mount(&server)
        .await;

    let session = SharedSession::new();
    let client = client(&server, &session);
    let navigation = NavigationService::new(client, DeletePolicy::Reject);

    let viewer: BTreeSet<String> = ["member".to_string()].into();
    let forest = navigation.visible_tree(&viewer).await.unwrap();
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].item.id, "root");
    let child_ids: Vec<&str> = forest[0]
        .children
        .iter()
        .map(|n| n.item.id.as_str())
        .collect();
    assert_eq!(child_ids, vec!["items"]);
}
