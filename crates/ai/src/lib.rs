//! Fintrack AI - chat relay to an OpenAI-compatible completion endpoint.
//!
//! - `types`: request/response DTOs shared with the HTTP layer
//! - `client`: the `CompletionClient` seam and its reqwest implementation
//! - `chat`: `ChatService`, which folds failures into `success: false` replies

pub mod chat;
pub mod client;
pub mod error;
pub mod types;

pub use chat::{advice_prompt, ChatService};
pub use client::{CompletionClient, OpenAiCompatibleClient};
pub use error::AiError;
pub use types::{ChatMessage, ChatReply, CompletionSettings, DEFAULT_BASE_URL, DEFAULT_MODEL};
