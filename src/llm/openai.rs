//! OpenAI implementation of [`ResponseGenerator`]: maps stored records to chat
//! messages and prepends a system message built from the channel context.

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{info, instrument};

use crate::storage::MessageRecord;

use super::{ChannelContext, ResponseGenerator};

/// Default system prompt when none is configured.
pub const DEFAULT_SYSTEM_CONTENT: &str =
    "You are a helpful assistant replying inside a Discord server. \
     Keep answers conversational and suitable for a chat channel.";

/// ResponseGenerator backed by the OpenAI chat completion API.
#[derive(Clone)]
pub struct OpenAIGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    system_prompt: Option<String>,
}

impl OpenAIGenerator {
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Client::with_config(config),
            model: "gpt-4o-mini".to_string(),
            system_prompt: None,
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Client::with_config(config),
            model: "gpt-4o-mini".to_string(),
            system_prompt: None,
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_system_prompt_opt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    fn system_content(&self, context: &ChannelContext) -> String {
        let base = self
            .system_prompt
            .as_deref()
            .unwrap_or(DEFAULT_SYSTEM_CONTENT);
        format!("{}\n\n{}", base, context.format_for_model())
    }

    fn build_messages(
        &self,
        history: &[MessageRecord],
        context: &ChannelContext,
    ) -> Result<Vec<ChatCompletionRequestMessage>> {
        let mut messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.system_content(context))
                .build()?
                .into(),
        ];
        for record in history {
            let message: ChatCompletionRequestMessage = if record.is_from_bot() {
                ChatCompletionRequestAssistantMessageArgs::default()
                    .content(record.content.clone())
                    .build()?
                    .into()
            } else {
                ChatCompletionRequestUserMessageArgs::default()
                    .content(record.content.clone())
                    .build()?
                    .into()
            };
            messages.push(message);
        }
        Ok(messages)
    }
}

#[async_trait]
impl ResponseGenerator for OpenAIGenerator {
    #[instrument(skip(self, history, context))]
    async fn generate(
        &self,
        history: &[MessageRecord],
        context: &ChannelContext,
    ) -> Result<String> {
        let messages = self.build_messages(history, context)?;
        info!(
            message_count = messages.len(),
            model = %self.model,
            "Submitting conversation to OpenAI"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(messages)
            .build()?;

        let response = self.client.chat().create(request).await?;

        if let Some(choice) = response.choices.first() {
            Ok(choice.message.content.clone().unwrap_or_default())
        } else {
            anyhow::bail!("No response from OpenAI");
        }
    }
}
