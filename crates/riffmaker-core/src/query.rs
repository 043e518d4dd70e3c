//! Pure filtering and ordering of the in-memory collection for display.
//!
//! Nothing here touches storage or mutates its input. The display pipeline
//! filters first, then sorts, so comparators only ever see the already
//! filtered subset.

use serde::{Deserialize, Serialize};

use riffmaker_domain::Riff;

/// How the list screen orders riffs.
///
/// Serialized kebab-case to match the persisted preference values
/// (`"newest"`, `"name-asc"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    Newest,
    Oldest,
    NameAsc,
    NameDesc,
    BpmAsc,
    BpmDesc,
}

/// Case-insensitive substring search over title, notes, and tuning value.
///
/// An empty or whitespace-only query returns the input unchanged.
pub fn search_riffs(riffs: &[Riff], query: &str) -> Vec<Riff> {
    if query.trim().is_empty() {
        return riffs.to_vec();
    }

    let query = query.to_lowercase();
    riffs
        .iter()
        .filter(|riff| {
            riff.title.to_lowercase().contains(&query)
                || riff
                    .notes
                    .as_deref()
                    .is_some_and(|notes| notes.to_lowercase().contains(&query))
                || riff
                    .tuning
                    .as_ref()
                    .is_some_and(|tuning| tuning.value().to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Stable, non-mutating sort. A missing bpm sorts as if it were 0.
pub fn sort_riffs(riffs: &[Riff], sort_by: SortOption) -> Vec<Riff> {
    let mut sorted = riffs.to_vec();
    match sort_by {
        SortOption::Newest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::Oldest => sorted.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOption::NameAsc => sorted.sort_by_cached_key(|riff| riff.title.to_lowercase()),
        SortOption::NameDesc => {
            sorted.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
        }
        SortOption::BpmAsc => {
            sorted.sort_by(|a, b| a.bpm.unwrap_or(0.0).total_cmp(&b.bpm.unwrap_or(0.0)))
        }
        SortOption::BpmDesc => {
            sorted.sort_by(|a, b| b.bpm.unwrap_or(0.0).total_cmp(&a.bpm.unwrap_or(0.0)))
        }
    }
    sorted
}
