//! Data Transfer Objects - what front ends see of a post.

use serde::{Deserialize, Serialize};

use postboard_core::domain::{Field, FieldError, Post};

/// A post as presented to a front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
    /// True when the post was modified after creation.
    pub edited: bool,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.to_rfc3339(),
            edited: post.is_edited(),
        }
    }
}

/// One inline validation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrorView {
    pub field: Field,
    pub message: String,
}

impl From<&FieldError> for FieldErrorView {
    fn from(error: &FieldError) -> Self {
        Self {
            field: error.field,
            message: error.message(),
        }
    }
}
