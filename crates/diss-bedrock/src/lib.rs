//! diss-bedrock
//!
//! The text-generation boundary. Persona conversation (blocking and
//! streamed) for the interview, and structured feedback synthesis with its
//! degrade-on-failure ladder. All Bedrock Converse API.

pub mod chat;
pub mod client;
pub mod error;
pub mod feedback;
pub mod prompts;
