//! All mutable in-session state, owned by one struct and passed by
//! reference through the stage handlers.

use std::collections::HashSet;

use uuid::Uuid;

use diss_core::models::diagnosis::ScoreResult;
use diss_core::models::feedback::FeedbackReport;

use crate::error::SessionError;
use crate::interview::{Interview, InterviewPhase};

#[derive(Debug, Clone)]
pub struct SessionState {
    /// Validated trainee identifier. Set once per session by the gate.
    identifier: Option<String>,
    pub interview: Interview,
    /// Generated id of the persisted session record, once the finished
    /// transcript has been stored. The sole join key for later stages.
    record_id: Option<Uuid>,
    diagnosis: Option<ScoreResult>,
    feedback: Option<FeedbackReport>,
    max_trainee_turns: u32,
}

impl SessionState {
    pub fn new(max_trainee_turns: u32) -> Self {
        Self {
            identifier: None,
            interview: Interview::new(max_trainee_turns),
            record_id: None,
            diagnosis: None,
            feedback: None,
            max_trainee_turns,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Store the validated identifier. Immutable once set: a second
    /// validation leaves the original in place.
    pub fn set_identifier(&mut self, identifier: String) {
        if self.identifier.is_none() {
            self.identifier = Some(identifier);
        }
    }

    pub fn require_identifier(&self) -> Result<&str, SessionError> {
        self.identifier.as_deref().ok_or(SessionError::NotAuthenticated)
    }

    pub fn record_id(&self) -> Option<Uuid> {
        self.record_id
    }

    pub fn set_record_id(&mut self, id: Uuid) {
        self.record_id = Some(id);
    }

    pub fn diagnosis(&self) -> Option<&ScoreResult> {
        self.diagnosis.as_ref()
    }

    pub fn feedback(&self) -> Option<&FeedbackReport> {
        self.feedback.as_ref()
    }

    /// Score the trainee's selections, enforcing the stage ordering: the
    /// interview must have finished first.
    pub fn apply_diagnosis(
        &mut self,
        selections: &HashSet<String>,
    ) -> Result<&ScoreResult, SessionError> {
        if self.interview.phase() != InterviewPhase::Finished {
            return Err(SessionError::InterviewNotFinished);
        }

        Ok(self.diagnosis.insert(diss_diagnosis::score(selections)))
    }

    /// Check that feedback generation may run: interview finished and
    /// diagnosis submitted.
    pub fn require_feedback_ready(&self) -> Result<&ScoreResult, SessionError> {
        if self.interview.phase() != InterviewPhase::Finished {
            return Err(SessionError::InterviewNotFinished);
        }
        self.diagnosis
            .as_ref()
            .ok_or(SessionError::DiagnosisNotSubmitted)
    }

    pub fn store_feedback(&mut self, report: FeedbackReport) -> &FeedbackReport {
        self.feedback.insert(report)
    }

    /// The cached feedback report for this attempt.
    pub fn cached_feedback(&self) -> Result<&FeedbackReport, SessionError> {
        self.feedback.as_ref().ok_or(SessionError::FeedbackNotGenerated)
    }

    /// Start a fresh attempt: clears the transcript, counters, stage
    /// results and the record id. The validated identifier is kept, and the
    /// previously persisted record is left untouched — the next attempt
    /// allocates a new one.
    pub fn reset(&mut self) {
        self.interview = Interview::new(self.max_trainee_turns);
        self.record_id = None;
        self.diagnosis = None;
        self.feedback = None;
    }
}
