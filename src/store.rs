//! In-memory habit list and stats record, with the state transitions
//! driven by user actions.
//!
//! Every transition takes the current day identifier explicitly and does
//! no I/O; callers persist through [`HabitStore::save`] afterwards.

use crate::errors::StorageError;
use crate::models::{Frequency, Habit, Stats};
use crate::storage::{self, KeyValueStorage};
use std::str::FromStr;
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitAction {
    MarkDone,
    Delete { confirmed: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct HabitStore {
    habits: Vec<Habit>,
    stats: Stats,
}

impl HabitStore {
    #[cfg(test)]
    pub fn new(today: &str) -> Self {
        Self {
            habits: Vec::new(),
            stats: Stats::fresh(today),
        }
    }

    #[cfg(test)]
    pub fn from_parts(habits: Vec<Habit>, stats: Stats) -> Self {
        Self { habits, stats }
    }

    /// Startup sequence: stats first (with rollover), then habits.
    ///
    /// `total_habits` is realigned with the decoded list, since skipped
    /// records would otherwise stay counted.
    pub fn load(storage: &KeyValueStorage, today: &str) -> Self {
        let mut stats = storage::load_stats(storage, today);
        let habits = storage::load_habits(storage);

        let live = habits.len() as i64;
        if stats.total_habits != live {
            warn!(stored = stats.total_habits, live, "realigning total habit count");
            stats.total_habits = live;
        }
        Self { habits, stats }
    }

    pub fn save(&self, storage: &mut KeyValueStorage) -> Result<(), StorageError> {
        storage::save_habits(storage, &self.habits)?;
        storage::save_stats(storage, &self.stats)
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    #[cfg(test)]
    pub fn find(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    pub fn roll_over(&mut self, today: &str) -> bool {
        storage::roll_over(&mut self.stats, today)
    }

    /// Adds a habit. A blank name or unknown frequency is ignored and
    /// yields `None`.
    pub fn create(&mut self, name: &str, frequency: &str) -> Option<&Habit> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let frequency = Frequency::from_str(frequency).ok()?;

        self.habits.push(Habit {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            frequency,
            streak: 0,
            done_dates: Vec::new(),
        });
        self.stats.total_habits += 1;
        self.habits.last()
    }

    /// Marks a habit done for `today`. Returns `false` when the id is
    /// unknown or the habit is already done today.
    pub fn mark_done(&mut self, id: &str, today: &str) -> bool {
        let Some(habit) = self.habits.iter_mut().find(|habit| habit.id == id) else {
            return false;
        };
        if habit.is_done_on(today) {
            return false;
        }

        habit.done_dates.push(today.to_string());
        habit.streak = habit.streak.saturating_add(1);
        self.stats.completed_today += 1;
        true
    }

    /// Removes a habit once the user has confirmed. Returns the removed
    /// habit, or `None` when unconfirmed or the id is unknown.
    pub fn delete(&mut self, id: &str, confirmed: bool, today: &str) -> Option<Habit> {
        if !confirmed {
            return None;
        }
        let index = self.habits.iter().position(|habit| habit.id == id)?;
        let removed = self.habits.remove(index);

        if removed.is_done_on(today) {
            self.stats.completed_today -= 1;
        }
        self.stats.total_habits -= 1;
        Some(removed)
    }

    /// Routes a row action to its transition. Returns whether state changed.
    pub fn dispatch(&mut self, id: &str, action: HabitAction, today: &str) -> bool {
        match action {
            HabitAction::MarkDone => self.mark_done(id, today),
            HabitAction::Delete { confirmed } => self.delete(id, confirmed, today).is_some(),
        }
    }
}
