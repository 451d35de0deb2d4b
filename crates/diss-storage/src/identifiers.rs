//! The `valid_identifiers` allow-list.
//!
//! One membership object per identifier, of shape `{"identifier": "..."}`,
//! keyed so that exact-match lookup is a single GET. The interview workflow
//! only reads this collection; the add/remove operations serve the
//! administrative surface.

use aws_sdk_s3::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use diss_core::keys;

use crate::error::StorageError;
use crate::objects;

#[derive(Debug, Serialize, Deserialize)]
struct IdentifierDoc {
    identifier: String,
}

/// Whether the identifier exists in the allow-list. Exact match only.
pub async fn check_identifier(
    client: &Client,
    bucket: &str,
    identifier: &str,
) -> Result<bool, StorageError> {
    objects::object_exists(client, bucket, &keys::valid_identifier(identifier)).await
}

/// Add an identifier to the allow-list. Returns false if it was already
/// present.
pub async fn add_identifier(
    client: &Client,
    bucket: &str,
    identifier: &str,
) -> Result<bool, StorageError> {
    let key = keys::valid_identifier(identifier);

    if objects::object_exists(client, bucket, &key).await? {
        return Ok(false);
    }

    let doc = IdentifierDoc {
        identifier: identifier.to_string(),
    };
    let body = serde_json::to_vec_pretty(&doc)?;
    objects::put_object(client, bucket, &key, body, Some("application/json")).await?;

    info!(identifier, "identifier added to allow-list");

    Ok(true)
}

/// List every identifier in the allow-list.
pub async fn list_identifiers(
    client: &Client,
    bucket: &str,
) -> Result<Vec<String>, StorageError> {
    let object_keys =
        objects::list_objects(client, bucket, keys::VALID_IDENTIFIERS_PREFIX).await?;

    Ok(object_keys
        .iter()
        .filter_map(|key| key.strip_prefix(keys::VALID_IDENTIFIERS_PREFIX))
        .map(|identifier| identifier.to_string())
        .collect())
}

/// Remove an identifier from the allow-list. Returns false if it was not
/// present.
pub async fn remove_identifier(
    client: &Client,
    bucket: &str,
    identifier: &str,
) -> Result<bool, StorageError> {
    let key = keys::valid_identifier(identifier);

    if !objects::object_exists(client, bucket, &key).await? {
        return Ok(false);
    }

    objects::delete_object(client, bucket, &key).await?;

    info!(identifier, "identifier removed from allow-list");

    Ok(true)
}
