//! The interview engine: a three-state machine over an accumulating
//! transcript.
//!
//! `NotStarted → InProgress` on the first trainee message;
//! `InProgress → Finished` on explicit termination or when the turn ceiling
//! is reached, in which case a canned closing line stands in for the
//! generator. The state transitions are synchronous and pure; the generator
//! round trip sits between them in [`Interview::submit_turn`].

use diss_bedrock::chat;
use diss_bedrock::prompts::PATIENT_PROMPT;
use diss_core::models::transcript::{SpeakerRole, TranscriptTurn};

use crate::error::SessionError;
use crate::workflow::Generator;

/// The persona's sign-off when the turn ceiling cuts the interview short.
pub const CLOSING_LINE: &str = "Thanks for talking with me, doc.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewPhase {
    NotStarted,
    InProgress,
    Finished,
}

/// How the interview was conducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    Text,
    Audio,
}

/// What a submitted trainee turn needs next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The persona's continuation should be requested from the generator.
    AwaitingReply,
    /// The ceiling was reached: the canned closing line was appended and
    /// the interview is finished. No generator call.
    ClosedAtCeiling,
}

#[derive(Debug, Clone)]
pub struct Interview {
    phase: InterviewPhase,
    mode: DeliveryMode,
    transcript: Vec<TranscriptTurn>,
    completed_turns: u32,
    max_turns: u32,
}

impl Interview {
    pub fn new(max_turns: u32) -> Self {
        Self {
            phase: InterviewPhase::NotStarted,
            mode: DeliveryMode::Text,
            transcript: Vec::new(),
            completed_turns: 0,
            max_turns,
        }
    }

    pub fn phase(&self) -> InterviewPhase {
        self.phase
    }

    pub fn mode(&self) -> DeliveryMode {
        self.mode
    }

    pub fn transcript(&self) -> &[TranscriptTurn] {
        &self.transcript
    }

    /// Number of completed trainee/persona exchanges.
    pub fn completed_turns(&self) -> u32 {
        self.completed_turns
    }

    /// Record a trainee message and decide what happens next.
    ///
    /// Rejected once the interview is finished. At the ceiling the canned
    /// closing line is appended and the interview force-finishes.
    pub fn begin_trainee_turn(
        &mut self,
        text: impl Into<String>,
    ) -> Result<TurnOutcome, SessionError> {
        if self.phase == InterviewPhase::Finished {
            return Err(SessionError::InterviewAlreadyFinished);
        }

        self.transcript.push(TranscriptTurn::trainee(text));
        self.phase = InterviewPhase::InProgress;

        if self.completed_turns >= self.max_turns {
            self.transcript.push(TranscriptTurn::persona(CLOSING_LINE));
            self.phase = InterviewPhase::Finished;
            Ok(TurnOutcome::ClosedAtCeiling)
        } else {
            Ok(TurnOutcome::AwaitingReply)
        }
    }

    /// Record the persona's continuation for the turn opened by
    /// [`Interview::begin_trainee_turn`].
    pub fn record_persona_reply(&mut self, text: impl Into<String>) {
        self.transcript.push(TranscriptTurn::persona(text));
        self.completed_turns += 1;
    }

    /// Submit a trainee turn and obtain the persona's reply in one round
    /// trip. Returns the canned closing line without a generator call when
    /// the ceiling has been reached.
    pub async fn submit_turn(
        &mut self,
        generator: &Generator,
        text: &str,
    ) -> Result<String, SessionError> {
        match self.begin_trainee_turn(text)? {
            TurnOutcome::ClosedAtCeiling => Ok(CLOSING_LINE.to_string()),
            TurnOutcome::AwaitingReply => {
                let reply = chat::persona_reply(
                    &generator.client,
                    &generator.model_id,
                    PATIENT_PROMPT,
                    &self.transcript,
                )
                .await?;
                self.record_persona_reply(reply.clone());
                Ok(reply)
            }
        }
    }

    /// Streamed variant of [`Interview::submit_turn`]: persona text
    /// fragments are surfaced through `on_delta` as they arrive. The canned
    /// closing line is delivered through the same callback so both branches
    /// render identically.
    pub async fn submit_turn_streamed(
        &mut self,
        generator: &Generator,
        text: &str,
        mut on_delta: impl FnMut(&str),
    ) -> Result<String, SessionError> {
        match self.begin_trainee_turn(text)? {
            TurnOutcome::ClosedAtCeiling => {
                on_delta(CLOSING_LINE);
                Ok(CLOSING_LINE.to_string())
            }
            TurnOutcome::AwaitingReply => {
                let reply = chat::persona_reply_streamed(
                    &generator.client,
                    &generator.model_id,
                    PATIENT_PROMPT,
                    &self.transcript,
                    &mut on_delta,
                )
                .await?;
                self.record_persona_reply(reply.clone());
                Ok(reply)
            }
        }
    }

    /// Explicit termination by the trainee. Finishing an interview that
    /// never started is rejected; finishing twice is a no-op.
    pub fn finish(&mut self) -> Result<(), SessionError> {
        match self.phase {
            InterviewPhase::Finished => Ok(()),
            InterviewPhase::NotStarted => Err(SessionError::EmptyTranscript),
            InterviewPhase::InProgress => {
                self.phase = InterviewPhase::Finished;
                Ok(())
            }
        }
    }

    /// Adopt a transcript converged from the real-time voice channel and
    /// finish. The voice exchange happens entirely outside this engine;
    /// handing over the ordered transcript is the host's finish signal.
    pub fn adopt_voice_transcript(
        &mut self,
        transcript: Vec<TranscriptTurn>,
    ) -> Result<(), SessionError> {
        if self.phase == InterviewPhase::Finished {
            return Err(SessionError::InterviewAlreadyFinished);
        }
        if transcript.is_empty() {
            return Err(SessionError::EmptyTranscript);
        }

        self.completed_turns = transcript
            .iter()
            .filter(|turn| turn.role == SpeakerRole::Trainee)
            .count() as u32;
        self.transcript = transcript;
        self.mode = DeliveryMode::Audio;
        self.phase = InterviewPhase::Finished;

        Ok(())
    }
}
