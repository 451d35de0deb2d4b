use serde::{Deserialize, Serialize};

/// Structured assessor feedback for one interview attempt.
///
/// `detailed_feedback` is never empty: when the generator's structured path
/// succeeds but leaves it blank it is composed from the itemized fields, and
/// on the degraded paths it carries the raw generator text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub overall_assessment: String,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub headss_coverage: HeadssCoverage,
    pub diagnostic_accuracy: DiagnosticAccuracy,
    pub recommendations: Vec<String>,
    pub detailed_feedback: String,
}

/// Coverage flags for the thirteen interview-quality criteria: five
/// rapport/process criteria, one per HEADSS topic (with the second S split
/// into mental-health and personal-safety), and the closing summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadssCoverage {
    pub greeting_rapport: bool,
    pub confidentiality_rights: bool,
    pub cultural_safety: bool,
    pub youth_friendly_language: bool,
    pub sensitivity_pacing: bool,
    pub home_family: bool,
    pub education_learning: bool,
    pub activities_peers: bool,
    pub drugs_alcohol: bool,
    pub sexual_health: bool,
    pub mental_health_suicide: bool,
    pub personal_safety: bool,
    pub summary_follow_up: bool,
}

impl HeadssCoverage {
    /// Criterion display names paired with their flags, in rubric order.
    pub fn entries(&self) -> [(&'static str, bool); 13] {
        [
            ("Greeting & Rapport", self.greeting_rapport),
            ("Confidentiality & Rights", self.confidentiality_rights),
            ("Cultural & Priority-Group Safety", self.cultural_safety),
            (
                "Youth-Friendly / Normalising Language",
                self.youth_friendly_language,
            ),
            ("Sensitivity to Cues & Pacing", self.sensitivity_pacing),
            ("Home & Family", self.home_family),
            ("Education / Learning Needs", self.education_learning),
            ("Activities, Peers & Strengths", self.activities_peers),
            ("Drugs, Alcohol & Risk Behaviours", self.drugs_alcohol),
            ("Sexual Health & Relationships", self.sexual_health),
            ("Mental Health & Suicide", self.mental_health_suicide),
            ("Personal Safety / Violence", self.personal_safety),
            ("Summary & Follow-Up Plan", self.summary_follow_up),
        ]
    }
}

/// The assessor's diagnostic-accuracy breakdown.
///
/// `incorrectly_selected` is a single free-text value rather than a list —
/// the assessor names the most significant wrong selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticAccuracy {
    pub correctly_identified: Vec<String>,
    pub incorrectly_selected: String,
    pub missed_diagnoses: Vec<String>,
    pub total_correct: u32,
    pub total_incorrect: u32,
    pub total_missed: u32,
}

impl FeedbackReport {
    /// Build a degraded report around raw generator text: the narrative
    /// carries the text verbatim and the itemized fields get fixed guidance
    /// placeholders pointing the reader at the full report.
    pub fn degraded(overall_assessment: &str, raw_text: String) -> Self {
        Self {
            overall_assessment: overall_assessment.to_string(),
            strengths: vec!["Review the full report for strengths analysis".to_string()],
            areas_for_improvement: vec![
                "Review the full report for improvement areas".to_string(),
            ],
            headss_coverage: HeadssCoverage::default(),
            diagnostic_accuracy: DiagnosticAccuracy::default(),
            recommendations: vec!["Review the full report for recommendations".to_string()],
            detailed_feedback: raw_text,
        }
    }

    /// Compose a narrative from the itemized fields as labeled Markdown
    /// sections. Used when the structured response leaves
    /// `detailed_feedback` empty.
    pub fn compose_detailed(&self) -> String {
        let list = |items: &[String]| {
            items
                .iter()
                .map(|item| format!("- {item}"))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let coverage = self
            .headss_coverage
            .entries()
            .iter()
            .map(|(name, covered)| {
                format!("- {name}: {}", if *covered { "✅" } else { "❌" })
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "**Overall Assessment:**\n{}\n\n\
             **Strengths:**\n{}\n\n\
             **Areas for Improvement:**\n{}\n\n\
             **HEADSS Coverage Analysis:**\n{}\n\n\
             **Recommendations:**\n{}",
            self.overall_assessment,
            list(&self.strengths),
            list(&self.areas_for_improvement),
            coverage,
            list(&self.recommendations),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degraded_report_carries_raw_text_and_placeholders() {
        let report = FeedbackReport::degraded(
            "Structured parsing failed.",
            "Good rapport overall, but home life went unexplored.".to_string(),
        );

        assert_eq!(
            report.detailed_feedback,
            "Good rapport overall, but home life went unexplored."
        );
        assert_eq!(report.strengths.len(), 1);
        assert!(report.strengths[0].contains("full report"));
        assert!(!report.headss_coverage.home_family);
        assert_eq!(report.diagnostic_accuracy.total_correct, 0);
    }

    #[test]
    fn compose_detailed_includes_every_section() {
        let report = FeedbackReport {
            overall_assessment: "Solid opening, thin on risk screening.".to_string(),
            strengths: vec!["Warm greeting".to_string()],
            areas_for_improvement: vec!["Ask about substance use".to_string()],
            headss_coverage: HeadssCoverage {
                greeting_rapport: true,
                ..HeadssCoverage::default()
            },
            diagnostic_accuracy: DiagnosticAccuracy::default(),
            recommendations: vec!["Practice the D in HEADSS".to_string()],
            detailed_feedback: String::new(),
        };

        let detailed = report.compose_detailed();
        assert!(detailed.contains("**Overall Assessment:**"));
        assert!(detailed.contains("- Warm greeting"));
        assert!(detailed.contains("**Areas for Improvement:**"));
        assert!(detailed.contains("- Greeting & Rapport: ✅"));
        assert!(detailed.contains("- Home & Family: ❌"));
        assert!(detailed.contains("- Practice the D in HEADSS"));
    }

    #[test]
    fn coverage_entries_enumerate_thirteen_criteria() {
        let coverage = HeadssCoverage::default();
        assert_eq!(coverage.entries().len(), 13);
    }
}
