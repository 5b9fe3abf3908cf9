//! Generative model integration
//!
//! The HTTP handler only sees [`EmailService`]; the Gemini client is built
//! once at startup and a [`MockEmailClient`] stands in for it in tests.

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiEmailClient, InlineData, Part};
pub use mock::MockEmailClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send the content parts to the model and return its raw text output.
    async fn compose(&self, parts: Vec<Part>) -> Result<String>;
}
