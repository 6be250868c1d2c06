//! Typed HTTP client and wire types for the Prepdeck backend.

mod client;
mod types;

pub use client::{ApiClient, ApiError, DEFAULT_BASE_URL};
pub use types::{InterviewRecord, UserSession, GENRES};
