//! # Buffer Shared
//!
//! Wire types shared between the API server and its clients: response
//! representations, request payloads and the validation error map.

pub mod dto;
pub mod payload;
pub mod response;

pub use payload::FieldReader;
pub use response::{ErrorResponse, FieldErrors};
