use practice_core::model::ScoreSummary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreSummaryVm {
    pub accuracy_label: String,
    /// Width for the accuracy bar, clamped to 0..=100.
    pub accuracy_percent: u32,
    pub multiple_choice_detail: String,
    pub short_answer_label: String,
    pub paragraph_label: String,
    pub matching_label: Option<String>,
    pub total_label: String,
}

#[must_use]
pub fn map_score_summary(summary: &ScoreSummary) -> ScoreSummaryVm {
    let accuracy = summary.multiple_choice_accuracy();
    let matching_label = (summary.matching_pairs_total() > 0).then(|| {
        format!(
            "{} of {} pairs matched",
            summary.matching_pairs_correct(),
            summary.matching_pairs_total()
        )
    });

    ScoreSummaryVm {
        accuracy_label: format!("{accuracy:.1}%"),
        accuracy_percent: accuracy.round().clamp(0.0, 100.0) as u32,
        multiple_choice_detail: format!(
            "{} of {} correct",
            summary.multiple_choice_correct(),
            summary.multiple_choice_total()
        ),
        short_answer_label: attempted_label(summary.short_answer_attempted()),
        paragraph_label: attempted_label(summary.paragraph_attempted()),
        matching_label,
        total_label: format!("{} questions in this set", summary.total_questions()),
    }
}

fn attempted_label(count: u32) -> String {
    if count == 1 {
        "1 question attempted".to_string()
    } else {
        format!("{count} questions attempted")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use practice_core::model::{MultipleChoice, Question, Response, ShortAnswer};

    fn questions() -> Vec<Question> {
        vec![
            MultipleChoice::new("Pick", vec!["a".into(), "b".into(), "c".into()], 2)
                .unwrap()
                .into(),
            ShortAnswer::new("Why?", 100).unwrap().into(),
            ShortAnswer::new("How?", 100).unwrap().into(),
        ]
    }

    #[test]
    fn labels_format_accuracy_and_plurals() {
        let mut answers = BTreeMap::new();
        answers.insert(0, Response::Text("2".to_string()));
        answers.insert(1, Response::Text("because".to_string()));
        let summary = ScoreSummary::from_responses(&questions(), &answers);

        let vm = map_score_summary(&summary);
        assert_eq!(vm.accuracy_label, "100.0%");
        assert_eq!(vm.accuracy_percent, 100);
        assert_eq!(vm.multiple_choice_detail, "1 of 1 correct");
        assert_eq!(vm.short_answer_label, "1 question attempted");
        assert_eq!(vm.paragraph_label, "0 questions attempted");
        assert_eq!(vm.matching_label, None);
        assert_eq!(vm.total_label, "3 questions in this set");
    }

    #[test]
    fn unanswered_set_reads_zero_percent() {
        let summary = ScoreSummary::from_responses(&questions(), &BTreeMap::new());
        let vm = map_score_summary(&summary);
        assert_eq!(vm.accuracy_label, "0.0%");
        assert_eq!(vm.accuracy_percent, 0);
    }
}
