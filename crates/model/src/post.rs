//! Post: a single message inside a topic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agora_core::{EntityIdentity, impl_entity};

/// Child entity: a post exists only inside its owning topic.
///
/// Posts are never deleted through a repository directly; remove the post
/// from the topic's collection and save the topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    identity: EntityIdentity,
    author: String,
    body: String,
    created: DateTime<Utc>,
    modified: Option<DateTime<Utc>>,
}

impl Post {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            identity: EntityIdentity::new(),
            author: author.into(),
            body: body.into(),
            created: Utc::now(),
            modified: None,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn modified(&self) -> Option<DateTime<Utc>> {
        self.modified
    }

    /// Replace the post body, recording the modification time.
    pub fn edit(&mut self, body: impl Into<String>) {
        self.body = body.into();
        self.modified = Some(Utc::now());
    }
}

impl_entity!(Post);
