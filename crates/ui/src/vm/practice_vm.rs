use practice_core::model::{PracticeSet, QuestionKind, SetId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeSetCardVm {
    pub id: SetId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub time_estimate: String,
    pub questions_label: String,
    pub kinds_label: String,
}

#[must_use]
pub fn map_practice_set_card(set: &PracticeSet) -> PracticeSetCardVm {
    let count = set.question_count();
    let questions_label = if count == 1 {
        "1 question".to_string()
    } else {
        format!("{count} questions")
    };

    let kinds_label = [
        QuestionKind::MultipleChoice,
        QuestionKind::ShortAnswer,
        QuestionKind::Paragraph,
        QuestionKind::Matching,
    ]
    .into_iter()
    .filter(|kind| set.count_of(*kind) > 0)
    .map(QuestionKind::label)
    .collect::<Vec<_>>()
    .join(" · ");

    PracticeSetCardVm {
        id: set.id(),
        title: set.title().to_string(),
        description: set.description().to_string(),
        category: set.category().to_string(),
        difficulty: set.difficulty().to_string(),
        time_estimate: set.time_estimate().to_string(),
        questions_label,
        kinds_label,
    }
}
