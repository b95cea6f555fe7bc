use crate::models::{Frequency, Habit, HabitView, HabitsResponse, StatsResponse};
use crate::store::HabitStore;
use chrono::{Datelike, Duration, Local, NaiveDate};

pub const DAILY_TARGET_DAYS: u32 = 30;
pub const WEEKLY_TARGET_WEEKS: u32 = 4;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Consecutive completed days ending today. Zero when today is not done.
pub fn current_streak(habit: &Habit, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today;
    while habit.is_completed_on(day) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

/// Consecutive Monday-start weeks, ending with the current one, that each
/// hold at least one completion.
pub fn week_streak(habit: &Habit, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut start = week_start(today);
    loop {
        let end = start + Duration::days(6);
        if habit.completed_dates.range(start..=end).next().is_none() {
            break;
        }
        streak += 1;
        match start.checked_sub_signed(Duration::weeks(1)) {
            Some(prev) => start = prev,
            None => break,
        }
    }
    streak
}

/// Progress toward a month of daily completions or four weeks of weekly
/// ones, in percent.
pub fn completion_percentage(habit: &Habit, today: NaiveDate) -> f64 {
    let (progress, target) = match habit.frequency {
        Frequency::Daily => (current_streak(habit, today), DAILY_TARGET_DAYS),
        Frequency::Weekly => (week_streak(habit, today), WEEKLY_TARGET_WEEKS),
    };
    (f64::from(progress) / f64::from(target)).min(1.0) * 100.0
}

pub fn completed_today(habits: &[Habit], today: NaiveDate) -> usize {
    habits
        .iter()
        .filter(|habit| habit.is_completed_on(today))
        .count()
}

pub fn longest_streak(habits: &[Habit], today: NaiveDate) -> u32 {
    habits
        .iter()
        .map(|habit| current_streak(habit, today))
        .max()
        .unwrap_or(0)
}

pub fn build_stats(habits: &[Habit]) -> StatsResponse {
    build_stats_at(today(), habits)
}

pub fn build_stats_at(today: NaiveDate, habits: &[Habit]) -> StatsResponse {
    StatsResponse {
        total_habits: habits.len(),
        completed_today: completed_today(habits, today),
        longest_streak: longest_streak(habits, today),
    }
}

pub fn habit_view_at(today: NaiveDate, habit: &Habit) -> HabitView {
    HabitView {
        streak: current_streak(habit, today),
        completion_percentage: completion_percentage(habit, today),
        completed_today: habit.is_completed_on(today),
        habit: habit.clone(),
    }
}

pub fn snapshot_at(today: NaiveDate, store: &HabitStore) -> HabitsResponse {
    HabitsResponse {
        habits: store
            .habits()
            .iter()
            .map(|habit| habit_view_at(today, habit))
            .collect(),
        is_loading: store.is_loading(),
        error: store.error().map(str::to_string),
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeSet;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit(frequency: Frequency, dates: impl IntoIterator<Item = NaiveDate>) -> Habit {
        Habit {
            id: "h".into(),
            name: "Test habit".into(),
            frequency,
            completed_dates: dates.into_iter().collect::<BTreeSet<_>>(),
            created_at: Utc::now(),
        }
    }

    fn last_days(today: NaiveDate, k: i64) -> Vec<NaiveDate> {
        (0..k).map(|offset| today - Duration::days(offset)).collect()
    }

    #[test]
    fn streak_counts_consecutive_days_ending_today() {
        // Wednesday
        let today = day(2026, 1, 7);
        for k in [1, 2, 5, 12] {
            let h = habit(Frequency::Daily, last_days(today, k));
            assert_eq!(current_streak(&h, today), k as u32);
        }
    }

    #[test]
    fn streak_crosses_month_and_year_boundaries() {
        let today = day(2026, 1, 2);
        let h = habit(Frequency::Daily, last_days(today, 40));
        assert_eq!(current_streak(&h, today), 40);
    }

    #[test]
    fn streak_is_zero_without_today() {
        let today = day(2026, 1, 7);
        let mut dates = last_days(today - Duration::days(1), 20);
        dates.push(today - Duration::days(30));
        let h = habit(Frequency::Daily, dates);
        assert_eq!(current_streak(&h, today), 0);
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let today = day(2026, 1, 7);
        let h = habit(
            Frequency::Daily,
            [today, today - Duration::days(1), today - Duration::days(3)],
        );
        assert_eq!(current_streak(&h, today), 2);
    }

    #[test]
    fn week_streak_counts_weeks_with_any_completion() {
        // Wednesday; current week starts Monday 2026-01-05
        let today = day(2026, 1, 7);
        let h = habit(
            Frequency::Weekly,
            [day(2026, 1, 5), day(2025, 12, 31), day(2025, 12, 22)],
        );
        assert_eq!(week_streak(&h, today), 3);

        let stale = habit(Frequency::Weekly, [day(2025, 12, 31)]);
        assert_eq!(week_streak(&stale, today), 0);
    }

    #[test]
    fn daily_percentage_uses_thirty_day_target() {
        let today = day(2026, 1, 7);
        let h = habit(Frequency::Daily, last_days(today, 15));
        assert_eq!(completion_percentage(&h, today), 50.0);
    }

    #[test]
    fn weekly_percentage_uses_four_week_target() {
        let today = day(2026, 1, 7);
        let h = habit(Frequency::Weekly, [today]);
        assert_eq!(completion_percentage(&h, today), 25.0);
    }

    #[test]
    fn percentage_is_clamped_for_long_streaks() {
        let today = day(2026, 1, 7);
        let daily = habit(Frequency::Daily, last_days(today, 400));
        let weekly = habit(Frequency::Weekly, last_days(today, 400));
        let empty = habit(Frequency::Daily, []);

        assert_eq!(completion_percentage(&daily, today), 100.0);
        assert_eq!(completion_percentage(&weekly, today), 100.0);
        assert_eq!(completion_percentage(&empty, today), 0.0);
    }

    #[test]
    fn stats_for_empty_list_fall_back_to_zero() {
        let stats = build_stats_at(day(2026, 1, 7), &[]);
        assert_eq!(
            stats,
            StatsResponse {
                total_habits: 0,
                completed_today: 0,
                longest_streak: 0,
            }
        );
    }

    #[test]
    fn stats_count_today_and_take_longest_streak() {
        let today = day(2026, 1, 7);
        let habits = [
            habit(Frequency::Daily, last_days(today, 3)),
            habit(Frequency::Weekly, [today - Duration::days(1)]),
            habit(Frequency::Daily, last_days(today, 6)),
        ];
        let stats = build_stats_at(today, &habits);
        assert_eq!(stats.total_habits, 3);
        assert_eq!(stats.completed_today, 2);
        assert_eq!(stats.longest_streak, 6);
    }

    #[test]
    fn added_habit_marked_today_counts_as_completed() {
        let today = day(2026, 1, 7);
        let mut store = HabitStore::new();
        let id = store.add("Drink water", Frequency::Daily).id.clone();
        store.toggle(&id, today);

        assert_eq!(completed_today(store.habits(), today), 1);
        let snapshot = snapshot_at(today, &store);
        assert!(snapshot.habits[0].completed_today);
        assert_eq!(snapshot.habits[0].streak, 1);
    }
}
