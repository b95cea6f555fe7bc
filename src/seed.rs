use crate::models::{Frequency, Habit};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

const SEED: [(&str, &str, Frequency); 10] = [
    ("1", "Drink 2 liters of water", Frequency::Daily),
    ("2", "Exercise for 30 minutes", Frequency::Daily),
    ("3", "Read 20 pages of a book", Frequency::Daily),
    ("4", "Meditate for 10 minutes", Frequency::Daily),
    ("5", "Plan the week", Frequency::Weekly),
    ("6", "Clean the house", Frequency::Weekly),
    ("7", "Learn new vocabulary", Frequency::Daily),
    ("8", "Write a journal entry", Frequency::Daily),
    ("9", "Check work emails", Frequency::Weekly),
    ("10", "Meet with friends", Frequency::Weekly),
];

static DAILY_SUGGESTIONS: [&str; 8] = [
    "Drink 8 glasses of water",
    "Exercise for 30 minutes",
    "Read for 20 minutes",
    "Meditate for 10 minutes",
    "Write in journal",
    "Take vitamins",
    "Walk 10,000 steps",
    "Practice gratitude",
];

static WEEKLY_SUGGESTIONS: [&str; 8] = [
    "Clean the house",
    "Plan meals for the week",
    "Review weekly goals",
    "Call family/friends",
    "Grocery shopping",
    "Declutter one area",
    "Learn something new",
    "Digital detox day",
];

/// The example data set the simulated fetch returns.
pub fn seed_habits(created_at: DateTime<Utc>) -> Vec<Habit> {
    SEED.iter()
        .map(|(id, name, frequency)| Habit {
            id: (*id).to_string(),
            name: (*name).to_string(),
            frequency: *frequency,
            completed_dates: BTreeSet::new(),
            created_at,
        })
        .collect()
}

pub fn suggestions(frequency: Frequency) -> &'static [&'static str] {
    match frequency {
        Frequency::Daily => &DAILY_SUGGESTIONS,
        Frequency::Weekly => &WEEKLY_SUGGESTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_name;

    #[test]
    fn seed_has_six_daily_and_four_weekly_habits() {
        let habits = seed_habits(Utc::now());
        assert_eq!(habits.len(), 10);
        let weekly = habits
            .iter()
            .filter(|habit| habit.frequency == Frequency::Weekly)
            .count();
        assert_eq!(weekly, 4);
        assert_eq!(habits.len() - weekly, 6);

        let ids: Vec<_> = habits.iter().map(|habit| habit.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
        assert!(habits.iter().all(|habit| habit.completed_dates.is_empty()));
    }

    #[test]
    fn every_suggestion_passes_name_validation() {
        for frequency in [Frequency::Daily, Frequency::Weekly] {
            for name in suggestions(frequency) {
                assert!(validate_name(name).is_ok(), "{name}");
            }
        }
    }
}
