use aws_config::BehaviorVersion;
use diss_session::gate::validate_identifier;
use diss_session::{SessionError, Store};

/// A store handle pointing nowhere: no region, no credentials. Any request
/// that actually reaches for S3 fails.
fn offline_store() -> Store {
    let config = aws_config::SdkConfig::builder()
        .behavior_version(BehaviorVersion::latest())
        .build();
    Store::new(aws_sdk_s3::Client::new(&config), "diss-test")
}

#[tokio::test]
async fn empty_and_whitespace_tokens_fail_without_a_storage_lookup() {
    let store = offline_store();

    assert!(!validate_identifier(&store, "").await.unwrap());
    assert!(!validate_identifier(&store, "   ").await.unwrap());
    assert!(!validate_identifier(&store, "\t\n").await.unwrap());
}

#[tokio::test]
async fn unreachable_store_is_not_the_same_as_an_unknown_identifier() {
    let store = offline_store();

    let err = validate_identifier(&store, "gp-042").await.unwrap_err();
    assert!(matches!(err, SessionError::IdentifierCheck(_)));
}
