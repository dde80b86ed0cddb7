//! Shared primitives for the movie catalogue service.

pub mod error;
pub mod types;
