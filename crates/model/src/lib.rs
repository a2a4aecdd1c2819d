//! `agora-model` — forum domain module (topics and posts).
//!
//! Pure domain types built on the `agora-core` entity base. A topic is a
//! parent entity owning its posts; posts are child entities removed only
//! through the topic's collection.

pub mod post;
pub mod topic;

pub use post::Post;
pub use topic::Topic;
