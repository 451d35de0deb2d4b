//! The `transcripts` collection: one session record per interview attempt.
//!
//! A record is created once, when a finished interview transcript is first
//! persisted, and then mutated in place by the diagnosis and feedback
//! stages. The generated record id is the sole join key — later stages
//! never look a record up by identifier or timestamp.

use aws_sdk_s3::Client;
use tracing::info;
use uuid::Uuid;

use diss_core::keys;
use diss_core::models::diagnosis::ScoreResult;
use diss_core::models::feedback::FeedbackReport;
use diss_core::models::session::SessionRecord;
use diss_core::models::transcript::TranscriptTurn;

use crate::error::StorageError;
use crate::objects;

/// Persist a freshly created session record. Returns its generated id.
pub async fn insert_record(
    client: &Client,
    bucket: &str,
    record: &SessionRecord,
) -> Result<Uuid, StorageError> {
    save_record(client, bucket, record).await?;

    info!(record_id = %record.id, identifier = %record.identifier, "session record created");

    Ok(record.id)
}

/// Load a session record by its id.
pub async fn load_record(
    client: &Client,
    bucket: &str,
    id: Uuid,
) -> Result<SessionRecord, StorageError> {
    let body = objects::get_object(client, bucket, &keys::transcript(id)).await?;
    let record: SessionRecord = serde_json::from_slice(&body)?;
    Ok(record)
}

/// Write the diagnosis results into an existing record.
pub async fn update_diagnosis(
    client: &Client,
    bucket: &str,
    id: Uuid,
    results: &ScoreResult,
) -> Result<(), StorageError> {
    let mut record = load_record(client, bucket, id).await?;
    record.diagnosis_results = Some(results.clone());
    save_record(client, bucket, &record).await?;

    info!(record_id = %id, "diagnosis results recorded");

    Ok(())
}

/// Write the assessor's feedback into an existing record.
///
/// The report is stored as a single persona turn in `assessor_messages`,
/// serialized as JSON.
pub async fn update_feedback(
    client: &Client,
    bucket: &str,
    id: Uuid,
    report: &FeedbackReport,
) -> Result<(), StorageError> {
    let mut record = load_record(client, bucket, id).await?;
    record.assessor_messages = vec![TranscriptTurn::persona(serde_json::to_string_pretty(
        report,
    )?)];
    save_record(client, bucket, &record).await?;

    info!(record_id = %id, "assessor feedback recorded");

    Ok(())
}

async fn save_record(
    client: &Client,
    bucket: &str,
    record: &SessionRecord,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(record)?;
    objects::put_object(
        client,
        bucket,
        &keys::transcript(record.id),
        body,
        Some("application/json"),
    )
    .await
}
