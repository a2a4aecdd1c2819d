//! `agora-dao` — repository contracts for the forum persistence layer.
//!
//! The deletion-ownership policy is encoded in the trait shapes:
//! [`ChildRepository`] is read-only, [`ParentRepository`] adds save and
//! both delete variants, and [`Crud`] adds an explicit flush. A concrete
//! storage collaborator supplies the implementation; [`InMemoryRepository`]
//! is the reference implementation used by tests and local development.

pub mod child;
pub mod crud;
pub mod in_memory;
pub mod parent;

pub use child::ChildRepository;
pub use crud::Crud;
pub use in_memory::InMemoryRepository;
pub use parent::ParentRepository;
