//! Persisted mastery tracking.
//!
//! The mastery record is a set of characters the learner has completed
//! in quiz mode. Every mutation is written through immediately as a JSON
//! array of strings; malformed stored data is logged and treated as an
//! empty set, never surfaced as an error.

use std::collections::HashSet;

use crate::catalog::Category;
use crate::store::backend::StorageBackend;

/// Storage key, kept from the first release so existing progress survives.
pub const MASTERY_KEY: &str = "stroke_order_mastered_words";

/// Per-category progress summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProgress {
    pub count: usize,
    pub total: usize,
    pub complete: bool,
}

/// Cosmetic rank derived from the total mastered count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Beginner,
    Calligrapher,
    StrokeExpert,
    Master,
}

impl Tier {
    /// Thresholds at 10/20/30; reaching a threshold exactly counts as
    /// the higher tier.
    pub fn for_count(count: usize) -> Tier {
        match count {
            0..=9 => Tier::Beginner,
            10..=19 => Tier::Calligrapher,
            20..=29 => Tier::StrokeExpert,
            _ => Tier::Master,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tier::Beginner => "新手上路",
            Tier::Calligrapher => "小小書法家",
            Tier::StrokeExpert => "筆順高手",
            Tier::Master => "漢字大師",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Tier::Beginner => "🌱",
            Tier::Calligrapher => "✏️",
            Tier::StrokeExpert => "🏅",
            Tier::Master => "🏆",
        }
    }
}

/// The persisted set of mastered characters.
pub struct MasteryStore<S: StorageBackend> {
    storage: S,
    mastered: HashSet<String>,
}

impl<S: StorageBackend> MasteryStore<S> {
    /// Load the mastery set from storage. Absent or malformed data
    /// initializes to an empty set.
    pub fn load(storage: S) -> Self {
        let mastered = match storage.get(MASTERY_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(words) => words.into_iter().collect(),
                Err(err) => {
                    tracing::warn!(error = %err, "malformed mastery record, starting fresh");
                    HashSet::new()
                }
            },
            None => HashSet::new(),
        };
        Self { storage, mastered }
    }

    /// Idempotent insert; persists immediately when the set changes.
    pub fn mark_mastered(&mut self, character: &str) {
        if self.mastered.insert(character.to_string()) {
            tracing::info!(character, total = self.mastered.len(), "character mastered");
            self.persist();
        }
    }

    /// Empty the set and persist immediately.
    pub fn clear(&mut self) {
        self.mastered.clear();
        self.persist();
    }

    pub fn is_mastered(&self, character: &str) -> bool {
        self.mastered.contains(character)
    }

    /// Total mastered characters, across all categories.
    pub fn mastered_count(&self) -> usize {
        self.mastered.len()
    }

    /// Current tier for the mastered count.
    pub fn tier(&self) -> Tier {
        Tier::for_count(self.mastered.len())
    }

    /// Mastered count within one category's list.
    pub fn progress(&self, category: Category) -> CategoryProgress {
        let words = category.characters();
        let count = words.iter().filter(|w| self.mastered.contains(**w)).count();
        CategoryProgress {
            count,
            total: words.len(),
            complete: count == words.len(),
        }
    }

    /// Serialize the whole set and overwrite the stored value. Order of
    /// the serialized list is arbitrary.
    fn persist(&mut self) {
        let words: Vec<&str> = self.mastered.iter().map(String::as_str).collect();
        match serde_json::to_string(&words) {
            Ok(json) => self.storage.set(MASTERY_KEY, &json),
            Err(err) => tracing::error!(error = %err, "failed to serialize mastery record"),
        }
    }
}
