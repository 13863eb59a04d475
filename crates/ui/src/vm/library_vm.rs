use practice_core::model::{Difficulty, LibraryEntry, LibraryFilter, ProblemKind, SetId};

/// Select value standing for "no restriction".
pub const ALL_OPTION: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryCardVm {
    pub id: SetId,
    pub title: String,
    pub description: String,
    pub kind_label: &'static str,
    pub difficulty_label: &'static str,
    pub difficulty_class: &'static str,
    pub questions_label: String,
    pub time_estimate: String,
    pub author_label: String,
    pub tags: Vec<String>,
    /// Whether a practice set exists for this entry.
    pub can_start: bool,
}

#[must_use]
pub fn map_library_card(entry: &LibraryEntry, can_start: bool) -> LibraryCardVm {
    let difficulty_class = match entry.difficulty {
        Difficulty::Easy => "badge badge--easy",
        Difficulty::Medium => "badge badge--medium",
        Difficulty::Hard => "badge badge--hard",
    };

    LibraryCardVm {
        id: entry.id,
        title: entry.title.clone(),
        description: entry.description.clone(),
        kind_label: entry.kind.label(),
        difficulty_label: entry.difficulty.label(),
        difficulty_class,
        questions_label: format!("{} questions", entry.question_count),
        time_estimate: entry.time_estimate.clone(),
        author_label: format!("By {}", entry.author),
        tags: entry.tags.clone(),
        can_start,
    }
}

/// Build a filter from the raw search box and select values.
///
/// `"all"`, blank and unrecognised select values leave that field unrestricted.
#[must_use]
pub fn filter_from_inputs(query: &str, kind: &str, difficulty: &str) -> LibraryFilter {
    LibraryFilter {
        query: query.trim().to_string(),
        kind: parse_select::<ProblemKind>(kind),
        difficulty: parse_select::<Difficulty>(difficulty),
    }
}

fn parse_select<T: std::str::FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() || raw == ALL_OPTION {
        return None;
    }
    raw.parse().ok()
}
