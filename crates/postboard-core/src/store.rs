//! The post store: owns the collection and mirrors it to a storage slot.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{Draft, Post, PostId};
use crate::error::{DomainError, PersistenceError};
use crate::ports::{Clock, KeyValueStorage};

/// Slot name used when none is configured.
pub const DEFAULT_SLOT: &str = "posts";

/// In-memory collection of posts, written through to one storage slot.
///
/// Mutations always complete in memory. A failed write is logged and
/// swallowed; the next successful write catches storage up.
pub struct PostStore {
    storage: Arc<dyn KeyValueStorage>,
    clock: Arc<dyn Clock>,
    slot: String,
    posts: Vec<Post>,
}

impl PostStore {
    /// Open the store, rehydrating the collection from `slot`.
    ///
    /// Missing, unreadable, or malformed slot data yields an empty store.
    pub fn open(
        storage: Arc<dyn KeyValueStorage>,
        clock: Arc<dyn Clock>,
        slot: impl Into<String>,
    ) -> Self {
        let slot = slot.into();
        let posts = load_slot(storage.as_ref(), &slot);

        tracing::debug!(slot = %slot, count = posts.len(), "Post store opened");

        Self {
            storage,
            clock,
            slot,
            posts,
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == id)
    }

    /// All posts, newest first by creation time.
    pub fn list(&self) -> Vec<&Post> {
        let mut sorted: Vec<&Post> = self.posts.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted
    }

    /// Append a new post. Inputs are expected to be validated already.
    pub fn create(&mut self, title: impl Into<String>, content: impl Into<String>) -> Post {
        let mut id = PostId::generate();
        while self.position(&id).is_some() {
            id = PostId::generate();
        }

        let post = Post::new(id, title.into(), content.into(), self.clock.now());
        self.posts.push(post.clone());

        tracing::info!(post_id = %post.id, "Post created");
        self.save_or_log();
        post
    }

    /// Overwrite title and content of an existing post.
    pub fn update(
        &mut self,
        id: &PostId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Post, DomainError> {
        let index = self
            .position(id)
            .ok_or_else(|| DomainError::NotFound { id: id.clone() })?;

        let now = self.clock.now();
        let post = &mut self.posts[index];
        post.title = title.into();
        post.content = content.into();
        // A clock that steps backwards must not break updated_at >= created_at.
        post.updated_at = now.max(post.updated_at);
        let updated = post.clone();

        tracing::info!(post_id = %id, "Post updated");
        self.save_or_log();
        Ok(updated)
    }

    /// Remove a post. Returns whether anything was removed.
    pub fn delete(&mut self, id: &PostId) -> bool {
        let Some(index) = self.position(id) else {
            tracing::debug!(post_id = %id, "Delete target not found");
            return false;
        };

        self.posts.remove(index);

        tracing::info!(post_id = %id, "Post deleted");
        self.save_or_log();
        true
    }

    /// Handle a form submission.
    ///
    /// With no edit target the draft becomes a new post; otherwise it
    /// replaces the target's title and content.
    pub fn submit(
        &mut self,
        draft: &Draft,
        edit_target: Option<&PostId>,
    ) -> Result<Post, DomainError> {
        let errors = draft.validate();
        if !errors.is_empty() {
            tracing::debug!(errors = %errors, "Submission rejected");
            return Err(DomainError::Validation(errors));
        }

        match edit_target {
            Some(id) => self.update(id, draft.title(), draft.content()),
            None => Ok(self.create(draft.title(), draft.content())),
        }
    }

    /// Write the whole collection to the slot.
    pub fn save(&self) -> Result<(), PersistenceError> {
        let encoded = encode_posts(&self.posts)?;
        self.storage.set(&self.slot, &encoded)?;
        Ok(())
    }

    fn save_or_log(&self) {
        if let Err(e) = self.save() {
            tracing::error!(slot = %self.slot, error = %e, "Failed to persist posts");
        }
    }

    fn position(&self, id: &PostId) -> Option<usize> {
        self.posts.iter().position(|p| &p.id == id)
    }
}

/// Serialize a collection to the persisted JSON layout.
pub fn encode_posts(posts: &[Post]) -> Result<String, serde_json::Error> {
    serde_json::to_string(posts)
}

/// Parse the persisted JSON layout.
///
/// Fails only when `raw` is not a JSON array. Records that do not parse as a
/// post are dropped one by one with a warning; the rest are kept.
pub fn decode_posts(raw: &str) -> Result<Vec<Post>, serde_json::Error> {
    let records: Vec<serde_json::Value> = serde_json::from_str(raw)?;

    let posts = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Post>(record) {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::warn!(index, error = %e, "Dropping malformed post record");
                None
            }
        })
        .collect();

    Ok(posts)
}

fn load_slot(storage: &dyn KeyValueStorage, slot: &str) -> Vec<Post> {
    let raw = match storage.get(slot) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(slot = %slot, error = %e, "Could not read posts, starting empty");
            return Vec::new();
        }
    };

    let posts = match decode_posts(&raw) {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!(slot = %slot, error = %e, "Discarding malformed post data");
            return Vec::new();
        }
    };

    dedupe_ids(posts)
}

fn dedupe_ids(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(posts.len());

    for post in posts {
        if seen.insert(post.id.clone()) {
            unique.push(post);
        } else {
            tracing::warn!(post_id = %post.id, "Dropping post with duplicate id");
        }
    }

    unique
}
