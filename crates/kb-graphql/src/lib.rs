//! # KB GraphQL
//!
//! GraphQL-over-HTTP adapter for the knowledge-base backend: implements the
//! core's `EntityDataService` port, owns the auth API and the shared session
//! store, and exposes the tournament sync surface.

pub mod auth;
pub mod client;
pub mod documents;
pub mod entity_api;
pub mod session;
pub mod skills;
pub mod tournaments;

pub use auth::AuthApi;
pub use client::GraphQlClient;
pub use session::{AuthSession, AuthUser, SharedSession};
pub use skills::SkillApi;
pub use tournaments::TournamentApi;
