use practice_core::model::{
    Difficulty, LibraryEntry, Matching, MatchingPair, MultipleChoice, Paragraph, PracticeSet,
    ProblemKind, Question, QuestionError, ShortAnswer,
};

use super::records::{LibraryRecord, PracticeSetRecord, QuestionRecord};
use crate::error::CatalogError;

pub(crate) fn map_question(record: QuestionRecord) -> Result<Question, QuestionError> {
    let question = match record {
        QuestionRecord::MultipleChoice {
            question,
            options,
            correct,
        } => MultipleChoice::new(question, options, correct)?.into(),
        QuestionRecord::ShortAnswer {
            question,
            max_words,
        } => ShortAnswer::new(question, max_words)?.into(),
        QuestionRecord::Paragraph {
            question,
            expected_length,
        } => Paragraph::new(question, expected_length)?.into(),
        QuestionRecord::Matching { question, pairs } => {
            let pairs = pairs
                .into_iter()
                .map(|pair| MatchingPair::new(pair.item, pair.target))
                .collect();
            Matching::new(question, pairs)?.into()
        }
    };
    Ok(question)
}

pub(crate) fn map_practice_set(record: PracticeSetRecord) -> Result<PracticeSet, CatalogError> {
    let id = record.id;
    let questions = record
        .questions
        .into_iter()
        .enumerate()
        .map(|(index, question)| {
            map_question(question)
                .map_err(|source| CatalogError::InvalidQuestion { id, index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    PracticeSet::new(
        id,
        record.title,
        record.description,
        record.category,
        record.difficulty,
        record.time_estimate,
        record.passage,
        questions,
    )
    .map_err(|source| CatalogError::InvalidSet { id, source })
}

pub(crate) fn map_library_entry(record: LibraryRecord) -> Result<LibraryEntry, CatalogError> {
    let id = record.id;
    let invalid = |reason: String| CatalogError::InvalidLibraryEntry { id, reason };

    if record.title.trim().is_empty() {
        return Err(invalid("title cannot be empty".to_string()));
    }
    let kind: ProblemKind = record.kind.parse().map_err(invalid)?;
    let difficulty: Difficulty = record.difficulty.parse().map_err(invalid)?;

    Ok(LibraryEntry {
        id,
        title: record.title,
        description: record.description,
        kind,
        difficulty,
        question_count: record.question_count,
        time_estimate: record.time_estimate,
        author: record.author,
        tags: record.tags,
    })
}
