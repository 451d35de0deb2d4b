//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of the two logical collections in the DiSS bucket: the
//! `valid_identifiers` allow-list and the `transcripts` session records.

use uuid::Uuid;

pub const VALID_IDENTIFIERS_PREFIX: &str = "valid_identifiers/";

pub const TRANSCRIPTS_PREFIX: &str = "transcripts/";

/// Allow-list membership object for one trainee identifier. Exact-match
/// lookup is a GET on this key.
pub fn valid_identifier(identifier: &str) -> String {
    format!("{VALID_IDENTIFIERS_PREFIX}{identifier}")
}

/// One session record per completed interview attempt.
pub fn transcript(id: Uuid) -> String {
    format!("{TRANSCRIPTS_PREFIX}{id}.json")
}
