use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::diagnosis::ScoreResult;
use super::transcript::TranscriptTurn;

/// The persisted record of one interview attempt.
///
/// Created when a finished interview transcript is first handed to the
/// store; mutated in place by the diagnosis and feedback stages, addressed
/// solely by its generated `id`. Records are never deleted by the system —
/// a session restart only clears in-session state.
///
/// Exactly one of `patient_messages` / `patient_audio_messages` is set,
/// depending on whether the interview ran in text or spoken-audio mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub timestamp: jiff::Timestamp,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_messages: Option<Vec<TranscriptTurn>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_audio_messages: Option<Vec<TranscriptTurn>>,
    #[serde(default)]
    pub assessor_messages: Vec<TranscriptTurn>,
    #[serde(default)]
    pub diagnosis_results: Option<ScoreResult>,
}

impl SessionRecord {
    /// New record for a text-mode interview.
    pub fn text(identifier: impl Into<String>, transcript: Vec<TranscriptTurn>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: jiff::Timestamp::now(),
            identifier: identifier.into(),
            patient_messages: Some(transcript),
            patient_audio_messages: None,
            assessor_messages: Vec::new(),
            diagnosis_results: None,
        }
    }

    /// New record for a spoken-audio interview.
    pub fn audio(identifier: impl Into<String>, transcript: Vec<TranscriptTurn>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: jiff::Timestamp::now(),
            identifier: identifier.into(),
            patient_messages: None,
            patient_audio_messages: Some(transcript),
            assessor_messages: Vec::new(),
            diagnosis_results: None,
        }
    }

    /// The interview transcript, whichever mode produced it.
    pub fn interview_transcript(&self) -> &[TranscriptTurn] {
        self.patient_messages
            .as_deref()
            .or(self.patient_audio_messages.as_deref())
            .unwrap_or(&[])
    }
}
