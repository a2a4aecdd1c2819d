//! `agora-core` — persistence-layer foundation for the forum domain.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): the entity identity model and the error types shared by the
//! repository contracts in `agora-dao`.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, EntityIdentity, same_entity};
pub use error::{PersistenceError, PersistenceResult};
pub use id::{EntityUuid, SurrogateId};
