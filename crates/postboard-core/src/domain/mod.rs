//! Domain entities - the core business objects.

mod post;
mod validation;

pub use post::{Post, PostId};
pub use validation::{
    CONTENT_MAX_CHARS, Draft, Field, FieldError, FieldErrorKind, TITLE_MAX_CHARS,
    ValidationErrors, validate,
};
