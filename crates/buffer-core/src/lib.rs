//! # Buffer Core
//!
//! The domain layer of the Buffer Clone backend.
//! This crate contains the posting entities and the ports that storage and
//! credential backends must implement. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
