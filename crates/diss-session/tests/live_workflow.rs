//! End-to-end workflow test against real AWS services.
//!
//! Requires valid credentials in the environment, `DISS_REGION` and
//! `DISS_BUCKET` set, and an allow-list containing `integration-test`
//! (`diss-admin add integration-test`).
//!
//! Run with: `cargo test -p diss-session --test live_workflow -- --ignored`

use std::collections::HashSet;

use diss_session::{SimulationConfig, Workflow};

fn config_from_env() -> SimulationConfig {
    SimulationConfig {
        region: std::env::var("DISS_REGION").expect("DISS_REGION must be set"),
        bucket: std::env::var("DISS_BUCKET").expect("DISS_BUCKET must be set"),
        ..SimulationConfig::default()
    }
}

#[tokio::test]
#[ignore]
async fn full_session_produces_a_persisted_record_and_feedback() {
    let mut workflow = Workflow::connect(config_from_env()).await;

    assert!(
        workflow.validate_identifier("integration-test").await.unwrap(),
        "allow-list must contain 'integration-test'"
    );

    let reply = workflow
        .submit_turn("Hi Jai, I'm Dr Chen. How are you going today?")
        .await
        .unwrap();
    assert!(!reply.is_empty());

    let mut streamed = String::new();
    workflow
        .submit_turn_streamed("How are things at home at the moment?", |delta| {
            streamed.push_str(delta);
        })
        .await
        .unwrap();
    assert!(!streamed.is_empty());

    let record_id = workflow.finish_interview().await.unwrap();
    assert!(record_id.is_some(), "transcript should persist");

    let selections: HashSet<String> =
        [
            "Major Depressive Episode".to_string(),
            "Social Anxiety Disorder".to_string(),
        ]
        .into_iter()
        .collect();
    let score = workflow.submit_diagnosis(&selections).await.unwrap();
    assert_eq!(score.total_correct, 2);
    assert_eq!(score.total_missed, 2);

    let report = workflow.generate_feedback().await.unwrap();
    assert!(!report.detailed_feedback.is_empty());
}
