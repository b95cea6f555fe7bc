use crate::loader::LoadError;
use crate::models::{Frequency, Habit};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;

/// Canonical habit state. Every write to the habit list goes through one of
/// the methods below.
#[derive(Debug, Default)]
pub struct HabitStore {
    habits: Vec<Habit>,
    is_loading: bool,
    error: Option<String>,
    last_id: i64,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    pub fn add(&mut self, name: impl Into<String>, frequency: Frequency) -> &Habit {
        self.add_at(name, frequency, Utc::now())
    }

    /// Appends a new habit created at `now`. Names are taken as given;
    /// validation happens before this point.
    pub fn add_at(
        &mut self,
        name: impl Into<String>,
        frequency: Frequency,
        now: DateTime<Utc>,
    ) -> &Habit {
        let id = self.next_id(now);
        self.habits.push(Habit {
            id,
            name: name.into(),
            frequency,
            completed_dates: BTreeSet::new(),
            created_at: now,
        });
        let last = self.habits.len() - 1;
        &self.habits[last]
    }

    /// Flips completion of `id` on `date`. Returns the new completion state,
    /// or `None` when no habit has that id.
    pub fn toggle(&mut self, id: &str, date: NaiveDate) -> Option<bool> {
        let habit = self.habits.iter_mut().find(|habit| habit.id == id)?;
        if habit.completed_dates.remove(&date) {
            Some(false)
        } else {
            habit.completed_dates.insert(date);
            Some(true)
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Habit> {
        let index = self.habits.iter().position(|habit| habit.id == id)?;
        Some(self.habits.remove(index))
    }

    /// Marks a load as started. Returns `false`, changing nothing, when one
    /// is already in flight.
    pub fn begin_load(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        self.error = None;
        true
    }

    /// Settles a load. Success replaces the whole habit list.
    pub fn finish_load(&mut self, outcome: Result<Vec<Habit>, LoadError>) {
        self.is_loading = false;
        match outcome {
            Ok(habits) => {
                self.habits = habits;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }

    // Millisecond timestamp, bumped past anything already handed out or present.
    fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis().max(self.last_id + 1);
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        self.last_id = candidate;
        candidate.to_string()
    }
}
