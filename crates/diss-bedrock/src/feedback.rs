//! Feedback synthesis: one request to the generator, a fixed JSON shape,
//! and a degrade ladder that always yields a usable report.
//!
//! The Converse API has no native response-format constraint, so the
//! structured attempt embeds the required JSON shape in the prompt and
//! parses the reply with serde. The ladder:
//!
//! 1. Structured attempt. If the invocation itself fails, retry once
//!    without the shape instruction and wrap the free-form text in a
//!    degraded report; if that retry also fails, the error propagates.
//! 2. If the structured reply parses, map it into [`FeedbackReport`],
//!    composing `detailed_feedback` from the itemized fields when the
//!    generator left it empty.
//! 3. If the structured reply completes but does not parse, degrade
//!    directly around the raw text — no second call.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use serde::Deserialize;
use tracing::{info, warn};

use diss_core::models::diagnosis::ScoreResult;
use diss_core::models::feedback::{DiagnosticAccuracy, FeedbackReport, HeadssCoverage};
use diss_core::models::transcript::{TranscriptTurn, render_transcript};

use crate::error::BedrockError;
use crate::prompts::ASSESSOR_PROMPT;

/// Placeholder overall assessment when the structured reply did not parse.
const UNPARSED_NOTE: &str = "Feedback generated successfully but structured parsing failed.";

/// Placeholder overall assessment when the unconstrained fallback was used.
const UNSTRUCTURED_NOTE: &str = "Feedback generated using unstructured format.";

const SCHEMA_INSTRUCTION: &str = "\
IMPORTANT: Provide your feedback as a single JSON object with exactly these \
keys and no other text:
{
  \"Overall Assessment\": \"<2-3 sentence summary>\",
  \"Strengths\": [\"<specific strength>\", ...],
  \"Areas for Improvement\": [\"<specific area>\", ...],
  \"HEADSS Coverage Analysis\": {
    \"Greeting & Rapport\": true or false,
    \"Confidentiality & Rights\": true or false,
    \"Cultural & Priority-Group Safety\": true or false,
    \"Youth-Friendly / Normalising Language\": true or false,
    \"Sensitivity to Cues & Pacing\": true or false,
    \"Home & Family\": true or false,
    \"Education / Learning Needs\": true or false,
    \"Activities, Peers & Strengths\": true or false,
    \"Drugs, Alcohol & Risk Behaviours\": true or false,
    \"Sexual Health & Relationships\": true or false,
    \"Mental Health & Suicide\": true or false,
    \"Personal Safety / Violence\": true or false,
    \"Summary & Follow-Up Plan\": true or false
  },
  \"Diagnostic Accuracy\": {
    \"Correctly Identified\": [\"<diagnosis>\", ...],
    \"Incorrectly Selected\": \"<diagnosis or empty string>\",
    \"Missed Diagnoses\": [\"<diagnosis>\", ...],
    \"Total Correct\": <integer>,
    \"Total Incorrect\": <integer>,
    \"Total Missed\": <integer>
  },
  \"Recommendations\": [\"<actionable recommendation>\", ...],
  \"Detailed Feedback\": \"<comprehensive narrative report>\"
}
Mark each HEADSS coverage element true only if the transcript shows it was \
adequately addressed.";

// ── Wire types ───────────────────────────────────────────────────────────────

/// The generator's JSON reply, exactly as prompted. Parsed here at the
/// boundary and mapped into the canonical [`FeedbackReport`] immediately;
/// missing fields default rather than fail.
#[derive(Debug, Deserialize)]
struct RawFeedback {
    #[serde(rename = "Overall Assessment", default)]
    overall_assessment: String,
    #[serde(rename = "Strengths", default)]
    strengths: Vec<String>,
    #[serde(rename = "Areas for Improvement", default)]
    areas_for_improvement: Vec<String>,
    #[serde(rename = "HEADSS Coverage Analysis", default)]
    headss_coverage: RawCoverage,
    #[serde(rename = "Diagnostic Accuracy", default)]
    diagnostic_accuracy: RawAccuracy,
    #[serde(rename = "Recommendations", default)]
    recommendations: Vec<String>,
    #[serde(rename = "Detailed Feedback", default)]
    detailed_feedback: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawCoverage {
    #[serde(rename = "Greeting & Rapport", default)]
    greeting_rapport: bool,
    #[serde(rename = "Confidentiality & Rights", default)]
    confidentiality_rights: bool,
    #[serde(rename = "Cultural & Priority-Group Safety", default)]
    cultural_safety: bool,
    #[serde(rename = "Youth-Friendly / Normalising Language", default)]
    youth_friendly_language: bool,
    #[serde(rename = "Sensitivity to Cues & Pacing", default)]
    sensitivity_pacing: bool,
    #[serde(rename = "Home & Family", default)]
    home_family: bool,
    #[serde(rename = "Education / Learning Needs", default)]
    education_learning: bool,
    #[serde(rename = "Activities, Peers & Strengths", default)]
    activities_peers: bool,
    #[serde(rename = "Drugs, Alcohol & Risk Behaviours", default)]
    drugs_alcohol: bool,
    #[serde(rename = "Sexual Health & Relationships", default)]
    sexual_health: bool,
    #[serde(rename = "Mental Health & Suicide", default)]
    mental_health_suicide: bool,
    #[serde(rename = "Personal Safety / Violence", default)]
    personal_safety: bool,
    #[serde(rename = "Summary & Follow-Up Plan", default)]
    summary_follow_up: bool,
}

#[derive(Debug, Default, Deserialize)]
struct RawAccuracy {
    #[serde(rename = "Correctly Identified", default)]
    correctly_identified: Vec<String>,
    #[serde(rename = "Incorrectly Selected", default)]
    incorrectly_selected: String,
    #[serde(rename = "Missed Diagnoses", default)]
    missed_diagnoses: Vec<String>,
    #[serde(rename = "Total Correct", default)]
    total_correct: u32,
    #[serde(rename = "Total Incorrect", default)]
    total_incorrect: u32,
    #[serde(rename = "Total Missed", default)]
    total_missed: u32,
}

impl From<RawFeedback> for FeedbackReport {
    fn from(raw: RawFeedback) -> Self {
        let coverage = HeadssCoverage {
            greeting_rapport: raw.headss_coverage.greeting_rapport,
            confidentiality_rights: raw.headss_coverage.confidentiality_rights,
            cultural_safety: raw.headss_coverage.cultural_safety,
            youth_friendly_language: raw.headss_coverage.youth_friendly_language,
            sensitivity_pacing: raw.headss_coverage.sensitivity_pacing,
            home_family: raw.headss_coverage.home_family,
            education_learning: raw.headss_coverage.education_learning,
            activities_peers: raw.headss_coverage.activities_peers,
            drugs_alcohol: raw.headss_coverage.drugs_alcohol,
            sexual_health: raw.headss_coverage.sexual_health,
            mental_health_suicide: raw.headss_coverage.mental_health_suicide,
            personal_safety: raw.headss_coverage.personal_safety,
            summary_follow_up: raw.headss_coverage.summary_follow_up,
        };

        let accuracy = DiagnosticAccuracy {
            correctly_identified: raw.diagnostic_accuracy.correctly_identified,
            incorrectly_selected: raw.diagnostic_accuracy.incorrectly_selected,
            missed_diagnoses: raw.diagnostic_accuracy.missed_diagnoses,
            total_correct: raw.diagnostic_accuracy.total_correct,
            total_incorrect: raw.diagnostic_accuracy.total_incorrect,
            total_missed: raw.diagnostic_accuracy.total_missed,
        };

        let mut report = FeedbackReport {
            overall_assessment: raw.overall_assessment,
            strengths: raw.strengths,
            areas_for_improvement: raw.areas_for_improvement,
            headss_coverage: coverage,
            diagnostic_accuracy: accuracy,
            recommendations: raw.recommendations,
            detailed_feedback: raw.detailed_feedback,
        };

        if report.detailed_feedback.trim().is_empty() {
            report.detailed_feedback = report.compose_detailed();
        }

        report
    }
}

// ── Parsing ──────────────────────────────────────────────────────────────────

/// Parse a structured generator reply into the canonical report.
pub fn parse_structured(text: &str) -> Result<FeedbackReport, serde_json::Error> {
    let raw: RawFeedback = serde_json::from_str(text)?;
    Ok(raw.into())
}

/// Wrap raw text from the structured path's unparseable reply.
pub fn degraded_from_unparsed(raw_text: String) -> FeedbackReport {
    FeedbackReport::degraded(UNPARSED_NOTE, raw_text)
}

/// Wrap raw text from the unconstrained fallback path.
pub fn degraded_from_unstructured(raw_text: String) -> FeedbackReport {
    FeedbackReport::degraded(UNSTRUCTURED_NOTE, raw_text)
}

// ── Synthesis ────────────────────────────────────────────────────────────────

/// Generate assessor feedback for a finished interview and its diagnosis
/// score. Always returns a report with a non-empty narrative; only a
/// failure of both generator calls is an error.
pub async fn synthesize_feedback(
    client: &Client,
    model_id: &str,
    transcript: &[TranscriptTurn],
    score: &ScoreResult,
) -> Result<FeedbackReport, BedrockError> {
    let user_message = format!(
        "CONVERSATION TRANSCRIPT:\n{}\n\n{}",
        render_transcript(transcript),
        score.summary_text(),
    );

    let constrained_prompt = format!("{ASSESSOR_PROMPT}\n\n{SCHEMA_INSTRUCTION}");

    match invoke_converse(client, model_id, &constrained_prompt, &user_message).await {
        Ok(reply) => match parse_structured(&reply) {
            Ok(report) => {
                info!(model_id, "structured feedback generated");
                Ok(report)
            }
            Err(err) => {
                warn!(model_id, error = %err, "structured feedback did not parse, degrading");
                Ok(degraded_from_unparsed(reply))
            }
        },
        Err(err) => {
            warn!(model_id, error = %err, "structured feedback call failed, retrying unconstrained");
            let reply = invoke_converse(client, model_id, ASSESSOR_PROMPT, &user_message).await?;
            Ok(degraded_from_unstructured(reply))
        }
    }
}

/// Core invocation using the Bedrock Converse API. Returns the reply text.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<String, BedrockError> {
    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let reply = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    Ok(reply)
}
