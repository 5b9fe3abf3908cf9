//! Formal e-mail generator - turns a short brief and/or an attached file
//! into a standardized institutional e-mail via Gemini
//!
//! A single HTTP endpoint validates the input, assembles a multimodal
//! request, calls the model and maps failures to status codes.

pub mod ai;
pub mod email;
pub mod error;
pub mod models;
pub mod prompts;
pub mod server;

pub use error::{ApiError, Error, Result};
