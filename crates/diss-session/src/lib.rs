//! diss-session
//!
//! The session workflow: identity gate, interview engine, diagnostic
//! scoring, and feedback synthesis, in that order, with each stage's output
//! persisted through the transcript store. One logical session per trainee;
//! all in-session state lives in a single owned [`state::SessionState`].

pub mod config;
pub mod error;
pub mod gate;
pub mod interview;
pub mod state;
pub mod workflow;

pub use config::SimulationConfig;
pub use error::SessionError;
pub use interview::{DeliveryMode, Interview, InterviewPhase};
pub use state::SessionState;
pub use workflow::{Generator, Store, Workflow};
