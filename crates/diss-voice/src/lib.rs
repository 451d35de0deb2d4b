//! diss-voice
//!
//! The real-time voice channel boundary. The channel itself is a host
//! component that streams microphone audio to a speech model and emits
//! transcript events as each utterance is recognized; this crate owns the
//! configuration surface for that channel and the convergence of its event
//! sequence onto the canonical transcript representation.
//!
//! Events arrive tagged with a monotonic sequence number (or, from older
//! channel builds, only a timestamp). The host signals the end of the
//! exchange explicitly — by then handing the collected events to
//! [`collect_transcript`] — so ordering is resolved once, at convergence.

use serde::{Deserialize, Serialize};

use diss_core::models::transcript::{SpeakerRole, TranscriptTurn};

/// Configuration handed to the real-time voice channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceChannelConfig {
    /// Credential for the speech service backing the channel.
    pub api_key: String,
    /// Voice identity used for the persona's spoken replies.
    pub voice: String,
    /// System instruction constraining the persona, same text as text mode.
    pub instructions: String,
    /// Whether the channel opens the microphone immediately.
    pub auto_start: bool,
    /// Sampling temperature for the persona's replies.
    pub temperature: f64,
    /// Turn-detection sensitivity threshold, 0.0–1.0.
    pub turn_detection_threshold: f64,
}

impl VoiceChannelConfig {
    pub fn new(api_key: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            voice: "alloy".to_string(),
            instructions: instructions.into(),
            auto_start: false,
            temperature: 0.8,
            turn_detection_threshold: 0.5,
        }
    }
}

/// Who spoke a voice event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceSpeaker {
    User,
    Assistant,
}

/// One recognized utterance from the voice channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceEvent {
    pub speaker: VoiceSpeaker,
    pub text: String,
    /// Monotonic event sequence, when the channel provides one.
    #[serde(default)]
    pub sequence: Option<u64>,
    /// Fallback ordering key: seconds since the channel opened.
    #[serde(default)]
    pub timestamp: Option<f64>,
}

impl VoiceEvent {
    /// Ordering key: sequence wins, then timestamp, then arrival order
    /// (events with neither sort as zero and keep their relative order —
    /// the sort is stable).
    fn sort_key(&self) -> f64 {
        match (self.sequence, self.timestamp) {
            (Some(seq), _) => seq as f64,
            (None, Some(ts)) => ts,
            (None, None) => 0.0,
        }
    }
}

/// Converge an event sequence onto the canonical transcript representation.
///
/// Events are stably sorted by sequence-or-timestamp, empty utterances are
/// dropped, and speakers map onto the transcript roles (`User` → trainee,
/// `Assistant` → persona). The result is the same shape the text-mode
/// interview produces, so both delivery modes feed the later stages
/// identically.
pub fn collect_transcript(events: &[VoiceEvent]) -> Vec<TranscriptTurn> {
    let mut ordered: Vec<&VoiceEvent> = events.iter().collect();
    ordered.sort_by(|a, b| {
        a.sort_key()
            .partial_cmp(&b.sort_key())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ordered
        .into_iter()
        .filter(|event| !event.text.trim().is_empty())
        .map(|event| TranscriptTurn {
            role: match event.speaker {
                VoiceSpeaker::User => SpeakerRole::Trainee,
                VoiceSpeaker::Assistant => SpeakerRole::Persona,
            },
            content: event.text.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(speaker: VoiceSpeaker, text: &str, sequence: Option<u64>) -> VoiceEvent {
        VoiceEvent {
            speaker,
            text: text.to_string(),
            sequence,
            timestamp: None,
        }
    }

    #[test]
    fn config_defaults_match_the_channel_contract() {
        let config = VoiceChannelConfig::new("sk-test", "You are Jai.");
        assert_eq!(config.voice, "alloy");
        assert!(!config.auto_start);
        assert_eq!(config.temperature, 0.8);
        assert_eq!(config.turn_detection_threshold, 0.5);
    }

    #[test]
    fn events_sort_by_sequence_regardless_of_arrival_order() {
        let events = vec![
            event(VoiceSpeaker::Assistant, "Yeah, not bad.", Some(2)),
            event(VoiceSpeaker::User, "How are you going?", Some(1)),
        ];

        let transcript = collect_transcript(&events);
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, SpeakerRole::Trainee);
        assert_eq!(transcript[0].content, "How are you going?");
        assert_eq!(transcript[1].role, SpeakerRole::Persona);
    }

    #[test]
    fn timestamp_is_the_fallback_ordering_key() {
        let events = vec![
            VoiceEvent {
                speaker: VoiceSpeaker::Assistant,
                text: "Second".to_string(),
                sequence: None,
                timestamp: Some(4.2),
            },
            VoiceEvent {
                speaker: VoiceSpeaker::User,
                text: "First".to_string(),
                sequence: None,
                timestamp: Some(1.7),
            },
        ];

        let transcript = collect_transcript(&events);
        assert_eq!(transcript[0].content, "First");
        assert_eq!(transcript[1].content, "Second");
    }

    #[test]
    fn empty_utterances_are_dropped() {
        let events = vec![
            event(VoiceSpeaker::User, "  ", Some(1)),
            event(VoiceSpeaker::Assistant, "G'day.", Some(2)),
        ];

        let transcript = collect_transcript(&events);
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].content, "G'day.");
    }

    #[test]
    fn events_without_keys_keep_arrival_order() {
        let events = vec![
            event(VoiceSpeaker::User, "One", None),
            event(VoiceSpeaker::Assistant, "Two", None),
        ];

        let transcript = collect_transcript(&events);
        assert_eq!(transcript[0].content, "One");
        assert_eq!(transcript[1].content, "Two");
    }
}
