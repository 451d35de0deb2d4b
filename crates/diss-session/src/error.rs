use thiserror::Error;

use diss_bedrock::error::BedrockError;
use diss_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The allow-list could not be consulted. Distinct from an identifier
    /// that is simply not on the list.
    #[error("identifier could not be checked: {0}")]
    IdentifierCheck(#[source] StorageError),

    #[error("no validated identifier for this session")]
    NotAuthenticated,

    #[error("the interview is already finished")]
    InterviewAlreadyFinished,

    #[error("the interview transcript is empty")]
    EmptyTranscript,

    #[error("the interview has not been finished")]
    InterviewNotFinished,

    #[error("the diagnostic assessment has not been submitted")]
    DiagnosisNotSubmitted,

    #[error("the feedback report has not been generated")]
    FeedbackNotGenerated,

    #[error("text generation failed: {0}")]
    Generation(#[from] BedrockError),

    #[error("storage operation failed: {0}")]
    Storage(#[from] StorageError),
}
