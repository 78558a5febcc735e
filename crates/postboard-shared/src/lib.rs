//! # Postboard Shared
//!
//! Presentation types shared by Postboard front ends: view DTOs, response
//! envelopes, and the text/HTML renderers.

pub mod dto;
pub mod render;
pub mod response;

pub use dto::{FieldErrorView, PostView};
pub use response::{ApiResponse, ErrorResponse};
