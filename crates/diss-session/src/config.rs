use serde::{Deserialize, Serialize};

/// Default model for persona and assessor generation: a cross-region
/// inference profile ID, which is what the Converse API expects.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// Ceiling on trainee turns before the interview is force-closed with the
/// canned line.
pub const DEFAULT_MAX_TRAINEE_TURNS: u32 = 1000;

/// Host-supplied configuration for one simulation deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub region: String,
    /// Bucket holding the `valid_identifiers` and `transcripts` collections.
    pub bucket: String,
    pub model_id: String,
    pub max_trainee_turns: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            region: "ap-southeast-2".to_string(),
            bucket: "diss-transcripts".to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            max_trainee_turns: DEFAULT_MAX_TRAINEE_TURNS,
        }
    }
}
