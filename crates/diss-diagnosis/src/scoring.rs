use std::collections::{BTreeMap, HashSet};

use diss_core::models::diagnosis::ScoreResult;

use crate::catalog::{Diagnosis, catalog};

/// Score a set of selected labels against the fixed catalog's answer key.
pub fn score(selected: &HashSet<String>) -> ScoreResult {
    score_against(catalog(), selected)
}

/// Score a set of selected labels against an arbitrary catalog.
///
/// Deterministic and total: every catalog label is partitioned by
/// (selected, correct) into correct-and-selected, incorrect-and-selected,
/// or correct-but-unselected; unselected incorrect labels fall into no
/// list. Labels not present in the catalog are ignored. Output lists keep
/// catalog order.
pub fn score_against(entries: &[Diagnosis], selected: &HashSet<String>) -> ScoreResult {
    let mut correct_selections = Vec::new();
    let mut incorrect_selections = Vec::new();
    let mut missed_diagnoses = Vec::new();
    let mut selections = BTreeMap::new();

    for diagnosis in entries {
        let picked = selected.contains(&diagnosis.label);
        selections.insert(diagnosis.label.clone(), picked);

        match (picked, diagnosis.correct) {
            (true, true) => correct_selections.push(diagnosis.label.clone()),
            (true, false) => incorrect_selections.push(diagnosis.label.clone()),
            (false, true) => missed_diagnoses.push(diagnosis.label.clone()),
            (false, false) => {}
        }
    }

    ScoreResult {
        total_correct: correct_selections.len() as u32,
        total_incorrect: incorrect_selections.len() as u32,
        total_missed: missed_diagnoses.len() as u32,
        correct_selections,
        incorrect_selections,
        missed_diagnoses,
        selections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(labels: &[&str]) -> HashSet<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    fn correct_labels() -> Vec<String> {
        catalog()
            .iter()
            .filter(|d| d.correct)
            .map(|d| d.label.clone())
            .collect()
    }

    #[test]
    fn exact_answer_key_scores_four_zero_zero() {
        let result = score(&correct_labels().into_iter().collect());

        assert_eq!(result.total_correct, 4);
        assert_eq!(result.total_incorrect, 0);
        assert_eq!(result.total_missed, 0);
        assert!(result.incorrect_selections.is_empty());
        assert!(result.missed_diagnoses.is_empty());
    }

    #[test]
    fn empty_selection_misses_all_four() {
        let result = score(&HashSet::new());

        assert_eq!(result.total_correct, 0);
        assert_eq!(result.total_incorrect, 0);
        assert_eq!(result.total_missed, 4);
        assert_eq!(result.missed_diagnoses, correct_labels());
    }

    #[test]
    fn output_lists_partition_the_catalog() {
        let picked = select(&[
            "Major Depressive Episode",
            "Cannabis Use Disorder",
            "Generalized Anxiety Disorder",
        ]);
        let result = score(&picked);

        // Disjointness: no label appears in more than one list.
        let mut all: Vec<&String> = result
            .correct_selections
            .iter()
            .chain(&result.incorrect_selections)
            .chain(&result.missed_diagnoses)
            .collect();
        let before = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), before);

        // Every catalog label is accounted for: the three lists plus
        // unselected-incorrect labels cover the catalog exactly.
        let unselected_incorrect = catalog()
            .iter()
            .filter(|d| !d.correct && !picked.contains(&d.label))
            .count();
        assert_eq!(before + unselected_incorrect, catalog().len());

        assert_eq!(result.total_correct, 1);
        assert_eq!(result.total_incorrect, 2);
        assert_eq!(result.total_missed, 3);
    }

    #[test]
    fn selections_map_covers_catalog_and_ignores_unknown_labels() {
        let picked = select(&["Major Depressive Episode", "Common Cold"]);
        let result = score(&picked);

        assert_eq!(result.selections.len(), catalog().len());
        assert!(!result.selections.contains_key("Common Cold"));
        assert_eq!(result.selections["Major Depressive Episode"], true);
        assert_eq!(result.total_correct, 1);
    }

    #[test]
    fn scoring_is_deterministic_and_keeps_catalog_order() {
        let picked = select(&["Social Anxiety Disorder", "Body Dysmorphic Disorder"]);
        let first = score(&picked);
        let second = score(&picked);
        assert_eq!(first, second);

        // Catalog order, not selection or alphabetical order.
        assert_eq!(
            first.correct_selections,
            vec![
                "Body Dysmorphic Disorder".to_string(),
                "Social Anxiety Disorder".to_string(),
            ]
        );
    }
}
