//! Service ports consumed by the domain layer.

pub mod data_service;
pub mod session;

pub use data_service::{EntityDataService, EntityKind};
pub use session::SessionContext;
