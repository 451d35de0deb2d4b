use aws_config::{BehaviorVersion, Region};

/// Build a Bedrock runtime client for the given region using the default
/// credential chain.
pub async fn build_client(region: &str) -> aws_sdk_bedrockruntime::Client {
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await;

    aws_sdk_bedrockruntime::Client::new(&config)
}
