use crate::errors::FieldErrors;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Row stored for a single completed day. The owning map key is the
/// `completed_on` date, which doubles as the uniqueness index on
/// (habit, date).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRow {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitRecord {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub completions: BTreeMap<NaiveDate, CompletionRow>,
}

/// Inserting a completion for an already-completed date violates the
/// (habit, date) uniqueness constraint. Callers treat this as "already
/// completed", never as a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateCompletion;

impl std::fmt::Display for DuplicateCompletion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "completion already exists for this date")
    }
}

impl std::error::Error for DuplicateCompletion {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    Marked,
    AlreadyMarked,
}

impl MarkOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Marked => "marked",
            Self::AlreadyMarked => "already_marked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmarkOutcome {
    Unmarked,
    NotMarked,
}

impl UnmarkOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unmarked => "unmarked",
            Self::NotMarked => "not_marked",
        }
    }
}

impl HabitRecord {
    pub fn new(title: String, description: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            title,
            description,
            created_at: now,
            updated_at: now,
            completions: BTreeMap::new(),
        }
    }

    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.completions.contains_key(&date)
    }

    pub fn completion_dates(&self) -> BTreeSet<NaiveDate> {
        self.completions.keys().copied().collect()
    }

    pub fn total_completions(&self) -> u64 {
        self.completions.len() as u64
    }

    pub fn insert_completion(
        &mut self,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<(), DuplicateCompletion> {
        match self.completions.entry(date) {
            Entry::Occupied(_) => Err(DuplicateCompletion),
            Entry::Vacant(slot) => {
                slot.insert(CompletionRow {
                    created_at: now,
                    updated_at: now,
                });
                Ok(())
            }
        }
    }

    pub fn remove_completion(&mut self, date: NaiveDate) -> bool {
        self.completions.remove(&date).is_some()
    }

    /// Idempotent "mark complete for today". A duplicate insert slipping
    /// past the pre-check resolves to the same benign outcome.
    pub fn mark_completed(&mut self, today: NaiveDate, now: DateTime<Utc>) -> MarkOutcome {
        if self.completed_on(today) {
            return MarkOutcome::AlreadyMarked;
        }
        match self.insert_completion(today, now) {
            Ok(()) => MarkOutcome::Marked,
            Err(DuplicateCompletion) => MarkOutcome::AlreadyMarked,
        }
    }

    pub fn unmark_completed(&mut self, today: NaiveDate) -> UnmarkOutcome {
        if self.remove_completion(today) {
            UnmarkOutcome::Unmarked
        } else {
            UnmarkOutcome::NotMarked
        }
    }
}

/// Persisted root state. Habits are keyed by their auto-incremented id, so
/// map order is creation order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub next_habit_id: u64,
    #[serde(default)]
    pub habits: BTreeMap<u64, HabitRecord>,
}

impl AppData {
    pub fn create_habit(
        &mut self,
        title: String,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> u64 {
        self.next_habit_id += 1;
        let id = self.next_habit_id;
        self.habits.insert(id, HabitRecord::new(title, description, now));
        id
    }

    pub fn habit(&self, id: u64) -> Option<&HabitRecord> {
        self.habits.get(&id)
    }

    pub fn habit_mut(&mut self, id: u64) -> Option<&mut HabitRecord> {
        self.habits.get_mut(&id)
    }

    /// Removes the habit and, with it, every completion it owns.
    pub fn delete_habit(&mut self, id: u64) -> bool {
        self.habits.remove(&id).is_some()
    }

    pub fn all_completions(&self) -> Vec<(u64, NaiveDate)> {
        self.habits
            .iter()
            .flat_map(|(&id, habit)| habit.completions.keys().map(move |&date| (id, date)))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct HabitPayload {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl HabitPayload {
    /// Field-level validation; on failure nothing is stored.
    pub fn validate(&self) -> Result<(String, Option<String>), FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = self.title.clone().unwrap_or_default();
        if title.trim().is_empty() {
            errors
                .entry("title")
                .or_default()
                .push("can't be blank".to_string());
        } else if title.chars().count() > TITLE_MAX_CHARS {
            errors.entry("title").or_default().push(format!(
                "is too long (maximum is {TITLE_MAX_CHARS} characters)"
            ));
        }

        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX_CHARS {
                errors.entry("description").or_default().push(format!(
                    "is too long (maximum is {DESCRIPTION_MAX_CHARS} characters)"
                ));
            }
        }

        if errors.is_empty() {
            Ok((title, self.description.clone()))
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HabitResponse {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub completed_today: bool,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completions: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct OverviewDay {
    pub date: NaiveDate,
    pub day_number: u32,
    pub day_name: String,
    pub habits_completed: u32,
    pub is_today: bool,
}

#[derive(Debug, Serialize)]
pub struct FourteenDayOverview {
    pub dates: Vec<OverviewDay>,
    pub current_streak: u32,
}

#[derive(Debug, Serialize)]
pub struct HabitListResponse {
    pub habits: Vec<HabitResponse>,
    pub fourteen_day_overview: FourteenDayOverview,
}

#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    pub habit: HabitResponse,
    pub outcome: &'static str,
}
