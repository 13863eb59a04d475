use std::fmt;
use std::str::FromStr;

use crate::model::ids::SetId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProblemKind {
    Reading,
    Writing,
}

impl ProblemKind {
    pub const ALL: [ProblemKind; 2] = [ProblemKind::Reading, ProblemKind::Writing];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProblemKind::Reading => "Reading",
            ProblemKind::Writing => "Writing",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProblemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| format!("unknown problem type: {s}"))
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.label() == s)
            .ok_or_else(|| format!("unknown difficulty: {s}"))
    }
}

/// Read-only metadata for a problem shown in the library browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    pub id: SetId,
    pub title: String,
    pub description: String,
    pub kind: ProblemKind,
    pub difficulty: Difficulty,
    pub question_count: u32,
    pub time_estimate: String,
    pub author: String,
    pub tags: Vec<String>,
}

/// Library browsing filter. `None` selects every kind or difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryFilter {
    pub query: String,
    pub kind: Option<ProblemKind>,
    pub difficulty: Option<Difficulty>,
}

impl LibraryFilter {
    #[must_use]
    pub fn matches(&self, entry: &LibraryEntry) -> bool {
        self.matches_query(entry)
            && self.kind.is_none_or(|kind| kind == entry.kind)
            && self
                .difficulty
                .is_none_or(|difficulty| difficulty == entry.difficulty)
    }

    /// Entries matching the filter, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, entries: &'a [LibraryEntry]) -> Vec<&'a LibraryEntry> {
        entries.iter().filter(|entry| self.matches(entry)).collect()
    }

    fn matches_query(&self, entry: &LibraryEntry) -> bool {
        let query = self.query.to_lowercase();
        if query.is_empty() {
            return true;
        }
        entry.title.to_lowercase().contains(&query)
            || entry.description.to_lowercase().contains(&query)
    }
}
