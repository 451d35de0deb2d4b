use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One entry in the diagnostic catalog: a candidate diagnosis, whether the
/// answer key marks it correct for the simulated case, and the descriptive
/// text shown alongside the option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnosis {
    pub label: String,
    pub correct: bool,
    pub description: String,
}

/// The fixed diagnostic catalog for the simulated case, in presentation
/// order. Fourteen candidate diagnoses, four marked correct.
pub fn catalog() -> &'static [Diagnosis] {
    static CATALOG: LazyLock<Vec<Diagnosis>> = LazyLock::new(|| {
        let entries = [
            (
                "Alcohol Use Disorder",
                false,
                "Problematic pattern of alcohol use leading to clinically significant impairment or distress",
            ),
            (
                "Attention-Deficit / Hyperactivity Disorder (ADHD)",
                false,
                "Persistent pattern of inattention and/or hyperactivity-impulsivity that interferes with functioning",
            ),
            (
                "Atypical / Restrictive-type Eating Disorder (e.g., OSFED or early Anorexia Nervosa)",
                true,
                "Disturbance in eating behavior and body image, including restrictive eating patterns",
            ),
            (
                "Bipolar I Disorder",
                false,
                "Manic episodes with or without major depressive episodes",
            ),
            (
                "Body Dysmorphic Disorder",
                true,
                "Preoccupation with perceived defects or flaws in physical appearance",
            ),
            (
                "Cannabis Use Disorder",
                false,
                "Problematic pattern of cannabis use leading to clinically significant impairment or distress",
            ),
            (
                "Conduct Disorder",
                false,
                "Repetitive and persistent pattern of behavior that violates the rights of others or major age-appropriate societal norms",
            ),
            (
                "Generalized Anxiety Disorder",
                false,
                "Excessive anxiety and worry about various aspects of life",
            ),
            (
                "Major Depressive Episode",
                true,
                "Depressed mood or loss of interest/pleasure, plus other symptoms for at least 2 weeks",
            ),
            (
                "Oppositional Defiant Disorder",
                false,
                "Pattern of angry/irritable mood, argumentative/defiant behavior, or vindictiveness",
            ),
            (
                "Post-Traumatic Stress Disorder",
                false,
                "Exposure to actual or threatened death, serious injury, or sexual violence, followed by characteristic symptoms",
            ),
            (
                "Psychotic-Spectrum Disorder",
                false,
                "Presence of delusions, hallucinations, disorganized thinking, or grossly disorganized behavior",
            ),
            (
                "Social Anxiety Disorder",
                true,
                "Marked fear or anxiety about social situations where the individual may be scrutinized by others",
            ),
            (
                "Specific Learning Disorder",
                false,
                "Difficulties learning and using academic skills, despite adequate intelligence and education",
            ),
        ];

        entries
            .iter()
            .map(|(label, correct, description)| Diagnosis {
                label: label.to_string(),
                correct: *correct,
                description: description.to_string(),
            })
            .collect()
    });

    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_fourteen_labels_four_correct() {
        let entries = catalog();
        assert_eq!(entries.len(), 14);
        assert_eq!(entries.iter().filter(|d| d.correct).count(), 4);
    }

    #[test]
    fn correct_labels_match_the_case() {
        let correct: Vec<&str> = catalog()
            .iter()
            .filter(|d| d.correct)
            .map(|d| d.label.as_str())
            .collect();

        assert_eq!(
            correct,
            [
                "Atypical / Restrictive-type Eating Disorder (e.g., OSFED or early Anorexia Nervosa)",
                "Body Dysmorphic Disorder",
                "Major Depressive Episode",
                "Social Anxiety Disorder",
            ]
        );
    }
}
