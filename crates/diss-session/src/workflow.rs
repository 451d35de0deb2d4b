//! Stage orchestration: gate → interview → diagnosis → feedback, with each
//! stage's output persisted through the transcript store.
//!
//! The store and generator handles are constructed once and passed in;
//! stages never build their own clients. Transcript, diagnosis and feedback
//! persistence is best-effort — a storage failure is logged and the session
//! proceeds — while generation failures halt their stage.

use std::collections::HashSet;

use tracing::warn;
use uuid::Uuid;

use diss_bedrock::feedback::synthesize_feedback;
use diss_core::models::diagnosis::ScoreResult;
use diss_core::models::feedback::FeedbackReport;
use diss_core::models::session::SessionRecord;
use diss_storage::records;
use diss_voice::VoiceEvent;

use crate::config::SimulationConfig;
use crate::error::SessionError;
use crate::gate;
use crate::interview::DeliveryMode;
use crate::state::SessionState;

/// Capability handle for the document store.
pub struct Store {
    pub client: aws_sdk_s3::Client,
    pub bucket: String,
}

impl Store {
    pub fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

/// Capability handle for the text generator.
pub struct Generator {
    pub client: aws_sdk_bedrockruntime::Client,
    pub model_id: String,
}

impl Generator {
    pub fn new(client: aws_sdk_bedrockruntime::Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }
}

/// One trainee's pass through the simulation.
pub struct Workflow {
    store: Store,
    generator: Generator,
    pub state: SessionState,
}

impl Workflow {
    pub fn new(store: Store, generator: Generator, config: &SimulationConfig) -> Self {
        Self {
            store,
            generator,
            state: SessionState::new(config.max_trainee_turns),
        }
    }

    /// Build both service clients from the configuration and open a
    /// session.
    pub async fn connect(config: SimulationConfig) -> Self {
        let store = Store::new(
            diss_storage::client::build_client(&config.region).await,
            config.bucket.clone(),
        );
        let generator = Generator::new(
            diss_bedrock::client::build_client(&config.region).await,
            config.model_id.clone(),
        );

        Self::new(store, generator, &config)
    }

    // ── Identity gate ────────────────────────────────────────────────────

    /// Validate the trainee's token. On success the identifier is fixed for
    /// the rest of the session (re-validation keeps the original).
    pub async fn validate_identifier(&mut self, token: &str) -> Result<bool, SessionError> {
        if self.state.identifier().is_some() {
            return Ok(true);
        }

        let valid = gate::validate_identifier(&self.store, token).await?;
        if valid {
            self.state.set_identifier(token.trim().to_string());
        }

        Ok(valid)
    }

    // ── Interview engine ─────────────────────────────────────────────────

    /// Submit a trainee message and get the persona's reply.
    pub async fn submit_turn(&mut self, text: &str) -> Result<String, SessionError> {
        self.state.require_identifier()?;
        self.state.interview.submit_turn(&self.generator, text).await
    }

    /// Streamed variant: persona fragments arrive through `on_delta`.
    pub async fn submit_turn_streamed(
        &mut self,
        text: &str,
        on_delta: impl FnMut(&str),
    ) -> Result<String, SessionError> {
        self.state.require_identifier()?;
        self.state
            .interview
            .submit_turn_streamed(&self.generator, text, on_delta)
            .await
    }

    /// Explicitly end the interview and persist the transcript.
    ///
    /// Returns the generated record id, or `None` when persistence failed —
    /// the interview still finishes, and the later stages simply skip their
    /// record updates.
    pub async fn finish_interview(&mut self) -> Result<Option<Uuid>, SessionError> {
        self.state.require_identifier()?;
        self.state.interview.finish()?;
        Ok(self.persist_transcript().await)
    }

    /// End an audio-mode interview: converge the voice channel's events
    /// onto the canonical transcript, then finish and persist exactly as
    /// text mode does.
    pub async fn finish_interview_with_voice(
        &mut self,
        events: &[VoiceEvent],
    ) -> Result<Option<Uuid>, SessionError> {
        self.state.require_identifier()?;

        let transcript = diss_voice::collect_transcript(events);
        self.state.interview.adopt_voice_transcript(transcript)?;

        Ok(self.persist_transcript().await)
    }

    async fn persist_transcript(&mut self) -> Option<Uuid> {
        if let Some(id) = self.state.record_id() {
            return Some(id);
        }

        let identifier = self.state.identifier().unwrap_or("anonymous").to_string();
        let transcript = self.state.interview.transcript().to_vec();

        let record = match self.state.interview.mode() {
            DeliveryMode::Text => SessionRecord::text(identifier, transcript),
            DeliveryMode::Audio => SessionRecord::audio(identifier, transcript),
        };

        match records::insert_record(&self.store.client, &self.store.bucket, &record).await {
            Ok(id) => {
                self.state.set_record_id(id);
                Some(id)
            }
            Err(err) => {
                warn!(error = %err, "interview completed but transcript could not be persisted");
                None
            }
        }
    }

    // ── Diagnostic scorer ────────────────────────────────────────────────

    /// Score the trainee's diagnosis selections. Requires a finished
    /// interview; the result is stored in session state and written to the
    /// persisted record best-effort.
    pub async fn submit_diagnosis(
        &mut self,
        selections: &HashSet<String>,
    ) -> Result<&ScoreResult, SessionError> {
        self.state.require_identifier()?;
        self.state.apply_diagnosis(selections)?;

        if let Some(id) = self.state.record_id() {
            let results = self.state.diagnosis().cloned();
            if let Some(results) = results {
                if let Err(err) =
                    records::update_diagnosis(&self.store.client, &self.store.bucket, id, &results)
                        .await
                {
                    warn!(record_id = %id, error = %err, "diagnosis results could not be persisted");
                }
            }
        }

        self.state
            .diagnosis()
            .ok_or(SessionError::DiagnosisNotSubmitted)
    }

    // ── Feedback synthesizer ─────────────────────────────────────────────

    /// Generate the assessor's feedback report. Runs at most once per
    /// attempt: the report is cached in session state until an explicit
    /// reset. Requires a finished interview and a submitted diagnosis.
    pub async fn generate_feedback(&mut self) -> Result<&FeedbackReport, SessionError> {
        self.state.require_identifier()?;

        if self.state.feedback().is_none() {
            let score = self.state.require_feedback_ready()?.clone();
            let transcript = self.state.interview.transcript().to_vec();

            let report = synthesize_feedback(
                &self.generator.client,
                &self.generator.model_id,
                &transcript,
                &score,
            )
            .await?;

            if let Some(id) = self.state.record_id() {
                if let Err(err) =
                    records::update_feedback(&self.store.client, &self.store.bucket, id, &report)
                        .await
                {
                    warn!(record_id = %id, error = %err, "feedback report could not be persisted");
                }
            }

            self.state.store_feedback(report);
        }

        self.state.cached_feedback()
    }

    // ── Reset ────────────────────────────────────────────────────────────

    /// Restart the simulation: clears in-session state only. The persisted
    /// record of the previous attempt is kept.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
