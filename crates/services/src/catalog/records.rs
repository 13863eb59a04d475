//! Wire shapes of the embedded data tables.

use practice_core::model::SetId;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PracticeSetRecord {
    pub id: SetId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub category: String,
    #[serde(default)]
    pub time_estimate: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub passage: String,
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub(crate) enum QuestionRecord {
    MultipleChoice {
        question: String,
        options: Vec<String>,
        correct: usize,
    },
    ShortAnswer {
        question: String,
        #[serde(rename = "maxWords")]
        max_words: u32,
    },
    Paragraph {
        question: String,
        #[serde(rename = "expectedLength", default)]
        expected_length: Option<u32>,
    },
    Matching {
        question: String,
        pairs: Vec<PairRecord>,
    },
}

#[derive(Debug, Deserialize)]
pub(crate) struct PairRecord {
    pub item: String,
    #[serde(rename = "match")]
    pub target: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LibraryRecord {
    pub id: SetId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    #[serde(rename = "questions")]
    pub question_count: u32,
    #[serde(default)]
    pub time_estimate: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
