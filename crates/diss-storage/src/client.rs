use aws_config::{BehaviorVersion, Region};

/// Build an S3 client for the given region using the default credential
/// chain.
pub async fn build_client(region: &str) -> aws_sdk_s3::Client {
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await;

    aws_sdk_s3::Client::new(&config)
}
