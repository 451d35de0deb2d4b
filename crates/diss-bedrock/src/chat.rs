//! Persona conversation over the Bedrock Converse API.
//!
//! The interview engine calls one of two delivery modes against the same
//! contract: [`persona_reply`] blocks until the whole continuation is
//! available, [`persona_reply_streamed`] surfaces text fragments as they
//! arrive and returns the same accumulated reply.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ContentBlockDelta, ConversationRole, ConverseStreamOutput, Message,
    SystemContentBlock,
};
use tracing::info;

use diss_core::models::transcript::{SpeakerRole, TranscriptTurn};

use crate::error::BedrockError;

/// Map transcript turns onto Converse messages. Trainee turns speak as the
/// user, persona turns as the assistant.
fn to_converse_messages(turns: &[TranscriptTurn]) -> Result<Vec<Message>, BedrockError> {
    let mut messages = Vec::with_capacity(turns.len());

    for turn in turns {
        let role = match turn.role {
            SpeakerRole::Trainee => ConversationRole::User,
            SpeakerRole::Persona => ConversationRole::Assistant,
        };
        let message = Message::builder()
            .role(role)
            .content(ContentBlock::Text(turn.content.clone()))
            .build()
            .map_err(|e| BedrockError::Invocation(e.to_string()))?;
        messages.push(message);
    }

    Ok(messages)
}

/// Request the persona's next turn over the full conversation history.
pub async fn persona_reply(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    turns: &[TranscriptTurn],
) -> Result<String, BedrockError> {
    let messages = to_converse_messages(turns)?;

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .set_messages(Some(messages))
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let reply = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    info!(model_id, reply_len = reply.len(), "persona reply complete");

    Ok(reply)
}

/// Request the persona's next turn as an incremental stream.
///
/// `on_delta` is invoked with each text fragment in arrival order; the
/// return value is the full accumulated reply, identical to what
/// [`persona_reply`] would have produced.
pub async fn persona_reply_streamed(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    turns: &[TranscriptTurn],
    mut on_delta: impl FnMut(&str),
) -> Result<String, BedrockError> {
    let messages = to_converse_messages(turns)?;

    let response = client
        .converse_stream()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .set_messages(Some(messages))
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let mut stream = response.stream;
    let mut reply = String::new();

    loop {
        let event = stream
            .recv()
            .await
            .map_err(|e| BedrockError::Invocation(e.to_string()))?;

        match event {
            Some(ConverseStreamOutput::ContentBlockDelta(delta_event)) => {
                if let Some(ContentBlockDelta::Text(fragment)) = delta_event.delta() {
                    on_delta(fragment);
                    reply.push_str(fragment);
                }
            }
            Some(_) => {}
            None => break,
        }
    }

    info!(model_id, reply_len = reply.len(), "streamed persona reply complete");

    Ok(reply)
}
