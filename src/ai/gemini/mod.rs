pub mod client;
pub mod email;
pub mod types;

pub use client::GeminiHttpClient;
pub use email::GeminiEmailClient;
pub use types::{InlineData, Part};
