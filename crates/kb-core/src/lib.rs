//! # KB Core
//!
//! Domain entities, the navigation tree, service ports, and domain services
//! for the knowledge-base admin client.

pub mod domain;
pub mod error;
pub mod navigation;
pub mod ports;
pub mod services;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
