use std::fmt;

use serde::{Deserialize, Serialize};

/// Who produced a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeakerRole {
    /// The trainee conducting the interview.
    Trainee,
    /// The simulated patient persona.
    Persona,
}

impl fmt::Display for SpeakerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeakerRole::Trainee => write!(f, "Trainee"),
            SpeakerRole::Persona => write!(f, "Persona"),
        }
    }
}

/// A single turn in an interview transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub role: SpeakerRole,
    pub content: String,
}

impl TranscriptTurn {
    pub fn trainee(content: impl Into<String>) -> Self {
        Self {
            role: SpeakerRole::Trainee,
            content: content.into(),
        }
    }

    pub fn persona(content: impl Into<String>) -> Self {
        Self {
            role: SpeakerRole::Persona,
            content: content.into(),
        }
    }
}

/// Render a transcript as `"<Role>: <text>"` lines in transcript order.
///
/// This is the exact form handed to the assessor for feedback generation.
pub fn render_transcript(turns: &[TranscriptTurn]) -> String {
    turns
        .iter()
        .map(|turn| format!("{}: {}", turn.role, turn.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_preserves_order_and_labels_roles() {
        let turns = vec![
            TranscriptTurn::trainee("Hi Jai, how are you going?"),
            TranscriptTurn::persona("Yeah, alright I guess."),
        ];

        let rendered = render_transcript(&turns);
        assert_eq!(
            rendered,
            "Trainee: Hi Jai, how are you going?\nPersona: Yeah, alright I guess."
        );
    }

    #[test]
    fn render_empty_transcript_is_empty() {
        assert_eq!(render_transcript(&[]), "");
    }

    #[test]
    fn role_serializes_snake_case() {
        let json = serde_json::to_string(&SpeakerRole::Trainee).unwrap();
        assert_eq!(json, "\"trainee\"");
        let json = serde_json::to_string(&SpeakerRole::Persona).unwrap();
        assert_eq!(json, "\"persona\"");
    }
}
