use diss_bedrock::feedback::{
    degraded_from_unparsed, degraded_from_unstructured, parse_structured,
};

fn structured_reply() -> String {
    serde_json::json!({
        "Overall Assessment": "A warm interview with strong rapport but thin risk screening.",
        "Strengths": ["Explained confidentiality early", "Used plain language throughout"],
        "Areas for Improvement": ["Substance use was never raised"],
        "HEADSS Coverage Analysis": {
            "Greeting & Rapport": true,
            "Confidentiality & Rights": true,
            "Cultural & Priority-Group Safety": false,
            "Youth-Friendly / Normalising Language": true,
            "Sensitivity to Cues & Pacing": true,
            "Home & Family": true,
            "Education / Learning Needs": true,
            "Activities, Peers & Strengths": false,
            "Drugs, Alcohol & Risk Behaviours": false,
            "Sexual Health & Relationships": false,
            "Mental Health & Suicide": true,
            "Personal Safety / Violence": false,
            "Summary & Follow-Up Plan": true
        },
        "Diagnostic Accuracy": {
            "Correctly Identified": ["Major Depressive Episode", "Social Anxiety Disorder"],
            "Incorrectly Selected": "Generalized Anxiety Disorder",
            "Missed Diagnoses": ["Body Dysmorphic Disorder"],
            "Total Correct": 2,
            "Total Incorrect": 1,
            "Total Missed": 2
        },
        "Recommendations": ["Screen for substance use in every HEADSS interview"],
        "Detailed Feedback": "The trainee opened well and held a youth-friendly tone..."
    })
    .to_string()
}

#[test]
fn structured_reply_maps_into_canonical_report() {
    let report = parse_structured(&structured_reply()).unwrap();

    assert!(report.overall_assessment.contains("warm interview"));
    assert_eq!(report.strengths.len(), 2);
    assert!(report.headss_coverage.greeting_rapport);
    assert!(!report.headss_coverage.drugs_alcohol);
    assert_eq!(
        report.diagnostic_accuracy.incorrectly_selected,
        "Generalized Anxiety Disorder"
    );
    assert_eq!(report.diagnostic_accuracy.total_correct, 2);
    assert!(report.detailed_feedback.starts_with("The trainee opened well"));
}

#[test]
fn empty_detailed_feedback_is_composed_from_itemized_fields() {
    let mut value: serde_json::Value = serde_json::from_str(&structured_reply()).unwrap();
    value["Detailed Feedback"] = serde_json::Value::String(String::new());

    let report = parse_structured(&value.to_string()).unwrap();

    assert!(!report.detailed_feedback.is_empty());
    assert!(report.detailed_feedback.contains("**Overall Assessment:**"));
    assert!(report.detailed_feedback.contains("**HEADSS Coverage Analysis:**"));
    assert!(report.detailed_feedback.contains("- Greeting & Rapport: ✅"));
}

#[test]
fn missing_optional_fields_default_instead_of_failing() {
    let reply = serde_json::json!({
        "Overall Assessment": "Brief but adequate.",
        "Detailed Feedback": "Full narrative here."
    })
    .to_string();

    let report = parse_structured(&reply).unwrap();

    assert!(report.strengths.is_empty());
    assert!(!report.headss_coverage.home_family);
    assert_eq!(report.diagnostic_accuracy.total_correct, 0);
    assert_eq!(report.detailed_feedback, "Full narrative here.");
}

#[test]
fn prose_reply_is_not_parseable() {
    assert!(parse_structured("Overall this was a good interview.").is_err());
}

#[test]
fn degraded_reports_always_carry_a_narrative() {
    let unparsed = degraded_from_unparsed("Overall this was a good interview.".to_string());
    assert_eq!(
        unparsed.detailed_feedback,
        "Overall this was a good interview."
    );
    assert!(unparsed.overall_assessment.contains("structured parsing failed"));

    let unstructured = degraded_from_unstructured("Free-form feedback text.".to_string());
    assert_eq!(unstructured.detailed_feedback, "Free-form feedback text.");
    assert!(unstructured.overall_assessment.contains("unstructured format"));

    for report in [unparsed, unstructured] {
        assert!(!report.detailed_feedback.is_empty());
        assert_eq!(report.strengths.len(), 1);
        assert_eq!(report.recommendations.len(), 1);
    }
}
