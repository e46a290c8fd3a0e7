//! Domain foundation: identifiers, the entity contract, error kinds.
//!
//! Everything here is pure; infrastructure concerns live in other crates.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
