//! The identity gate: every session activity is blocked until a trainee
//! token matches the persisted allow-list exactly.

use tracing::info;

use diss_storage::identifiers;

use crate::error::SessionError;
use crate::workflow::Store;

/// Validate a trainee-supplied token against the allow-list.
///
/// Empty or whitespace-only tokens are invalid without a storage round
/// trip. A storage failure is `SessionError::IdentifierCheck` — "could not
/// check" is not the same outcome as "not on the list".
pub async fn validate_identifier(store: &Store, token: &str) -> Result<bool, SessionError> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(false);
    }

    let valid = identifiers::check_identifier(&store.client, &store.bucket, token)
        .await
        .map_err(SessionError::IdentifierCheck)?;

    info!(valid, "identifier checked against allow-list");

    Ok(valid)
}
