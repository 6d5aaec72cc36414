//! Chat relay service.

use log::{error, info};
use std::sync::Arc;

use crate::client::CompletionClient;
use crate::error::AiError;
use crate::types::{ChatMessage, ChatReply, CompletionSettings};

/// Relays conversations to the completion client and folds every failure
/// into a `ChatReply` with `success: false`.
pub struct ChatService {
    client: Arc<dyn CompletionClient>,
    settings: CompletionSettings,
}

pub fn advice_prompt(context: &str) -> String {
    format!(
        "You are a knowledgeable and friendly financial advisor. \
         Provide clear, concise, and actionable financial advice based on this context:\n\
         {context}\n\n\
         Keep the response professional but approachable, and limit it to 3-5 key points."
    )
}

impl ChatService {
    pub fn new(client: Arc<dyn CompletionClient>, settings: CompletionSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    pub async fn chat(&self, messages: &[ChatMessage]) -> ChatReply {
        if messages.is_empty() {
            return ChatReply::failed(
                AiError::invalid_input("Messages array is required and cannot be empty")
                    .to_string(),
            );
        }

        match self.client.complete(messages, &self.settings).await {
            Ok(content) => {
                info!("AI reply received ({} chars)", content.len());
                ChatReply::ok(content)
            }
            Err(err) => {
                error!("AI chat failed [{}]: {}", err.code(), err);
                ChatReply::failed(err.to_string())
            }
        }
    }

    pub async fn advice(&self, context: &str) -> ChatReply {
        let context = context.trim();
        if context.is_empty() {
            return ChatReply::failed("Context is required and must be a string");
        }
        self.chat(&[ChatMessage::user(advice_prompt(context))]).await
    }
}
