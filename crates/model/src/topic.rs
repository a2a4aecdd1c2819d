//! Topic: a thread of posts, owning their lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agora_core::{Entity, EntityIdentity, EntityUuid, impl_entity};

use crate::post::Post;

/// Parent entity: a topic may be saved and deleted on its own and owns its
/// posts. Deleting a post goes through [`remove_post`](Topic::remove_post)
/// followed by saving the topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    identity: EntityIdentity,
    title: String,
    created: DateTime<Utc>,
    posts: Vec<Post>,
}

impl Topic {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            identity: EntityIdentity::new(),
            title: title.into(),
            created: Utc::now(),
            posts: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    pub fn last_post(&self) -> Option<&Post> {
        self.posts.last()
    }

    pub fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Append a post to the owning collection.
    pub fn add_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Remove a post from the owning collection by its uuid.
    ///
    /// This is the only sanctioned way to delete a post: take it out of the
    /// collection, then save the topic. Returns the removed post, or `None`
    /// if no post with that uuid belongs to this topic.
    pub fn remove_post(&mut self, uuid: &EntityUuid) -> Option<Post> {
        let index = self.posts.iter().position(|p| p.uuid() == *uuid)?;
        Some(self.posts.remove(index))
    }
}

impl_entity!(Topic);
