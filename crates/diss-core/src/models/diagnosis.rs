use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The outcome of scoring a trainee's diagnostic selections against the
/// catalog's answer key.
///
/// The three label lists partition the selected-or-correct portion of the
/// catalog: a label the trainee selected lands in `correct_selections` or
/// `incorrect_selections`; a correct label left unselected lands in
/// `missed_diagnoses`. Unselected incorrect labels appear only in
/// `selections`. All lists are in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub correct_selections: Vec<String>,
    pub incorrect_selections: Vec<String>,
    pub missed_diagnoses: Vec<String>,
    pub total_correct: u32,
    pub total_incorrect: u32,
    pub total_missed: u32,
    /// The raw selection map, keyed by catalog label.
    pub selections: BTreeMap<String, bool>,
}

impl ScoreResult {
    /// Number of labels the answer key marks correct. Every correct label is
    /// either selected (counted correct) or unselected (counted missed).
    pub fn answer_key_size(&self) -> u32 {
        self.total_correct + self.total_missed
    }

    /// The rendered score summary handed to the assessor.
    pub fn summary_text(&self) -> String {
        format!(
            "DIAGNOSTIC ASSESSMENT RESULTS:\n\n\
             Correctly Identified: {}\n\
             Incorrectly Selected: {}\n\
             Missed Diagnoses: {}\n\n\
             Total Correct: {}/{}\n\
             Total Incorrect: {}\n\
             Total Missed: {}",
            self.correct_selections.join(", "),
            self.incorrect_selections.join(", "),
            self.missed_diagnoses.join(", "),
            self.total_correct,
            self.answer_key_size(),
            self.total_incorrect,
            self.total_missed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_text_reports_counts_over_answer_key() {
        let result = ScoreResult {
            correct_selections: vec!["Major Depressive Episode".to_string()],
            incorrect_selections: vec![],
            missed_diagnoses: vec![
                "Body Dysmorphic Disorder".to_string(),
                "Social Anxiety Disorder".to_string(),
            ],
            total_correct: 1,
            total_incorrect: 0,
            total_missed: 2,
            selections: BTreeMap::new(),
        };

        let summary = result.summary_text();
        assert!(summary.starts_with("DIAGNOSTIC ASSESSMENT RESULTS:"));
        assert!(summary.contains("Total Correct: 1/3"));
        assert!(summary.contains("Correctly Identified: Major Depressive Episode"));
        assert!(summary.contains(
            "Missed Diagnoses: Body Dysmorphic Disorder, Social Anxiety Disorder"
        ));
    }
}
