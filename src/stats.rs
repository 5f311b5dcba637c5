use crate::models::{FourteenDayOverview, HabitRecord, OverviewDay};
use chrono::{Datelike, Duration, Local, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

const OVERVIEW_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HabitStats {
    pub completed_today: bool,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completions: u64,
}

/// Server-local "today". Handlers resolve it once per request; everything
/// below takes it as a parameter so tests can pin the date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn habit_stats(habit: &HabitRecord, today: NaiveDate) -> HabitStats {
    let dates = habit.completion_dates();
    HabitStats {
        completed_today: dates.contains(&today),
        current_streak: current_streak(&dates, today),
        longest_streak: longest_streak(&dates),
        total_completions: dates.len() as u64,
    }
}

/// Length of the consecutive run ending exactly at `today`. A habit not
/// completed today has no current streak, whatever happened before.
pub fn current_streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    if !dates.contains(&today) {
        return 0;
    }

    let mut streak = 1;
    let mut day = today - Duration::days(1);
    while dates.contains(&day) {
        streak += 1;
        day = day - Duration::days(1);
    }
    streak
}

/// Longest run of consecutive calendar dates anywhere in the history.
pub fn longest_streak(dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for &date in dates {
        run = match prev {
            Some(previous) if date == previous + Duration::days(1) => run + 1,
            _ => {
                best = best.max(run);
                1
            }
        };
        prev = Some(date);
    }

    // the final run never hits the reset branch above
    best.max(run)
}

pub fn fourteen_day_overview(completions: &[(u64, NaiveDate)]) -> FourteenDayOverview {
    fourteen_day_overview_at(today(), completions)
}

/// Aggregates the last 14 days across every habit: per-day distinct-habit
/// counts plus the "any habit completed" streak. Counts are collected for
/// window dates only, so the overall streak tops out at the window length.
pub fn fourteen_day_overview_at(
    today: NaiveDate,
    completions: &[(u64, NaiveDate)],
) -> FourteenDayOverview {
    let window_start = today - Duration::days(OVERVIEW_DAYS - 1);

    // (habit, date) pairs are unique per the storage constraint, so the
    // per-date pair count is the distinct-habit count.
    let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for &(_, date) in completions {
        if date >= window_start && date <= today {
            *per_day.entry(date).or_default() += 1;
        }
    }

    let dates = (0..OVERVIEW_DAYS)
        .map(|offset| {
            let date = window_start + Duration::days(offset);
            OverviewDay {
                date,
                day_number: date.day(),
                day_name: date.format("%a").to_string(),
                habits_completed: per_day.get(&date).copied().unwrap_or(0),
                is_today: date == today,
            }
        })
        .collect();

    let mut current_streak = 0;
    let mut day = today;
    while per_day.get(&day).copied().unwrap_or(0) > 0 {
        current_streak += 1;
        day = day - Duration::days(1);
    }

    FourteenDayOverview {
        dates,
        current_streak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn set(dates: &[NaiveDate]) -> BTreeSet<NaiveDate> {
        dates.iter().copied().collect()
    }

    #[test]
    fn current_streak_empty_set_is_zero() {
        let today = date(2026, 1, 5);
        assert_eq!(current_streak(&BTreeSet::new(), today), 0);
    }

    #[test]
    fn current_streak_today_only_is_one() {
        let today = date(2026, 1, 5);
        assert_eq!(current_streak(&set(&[today]), today), 1);
    }

    #[test]
    fn current_streak_counts_consecutive_days() {
        let today = date(2026, 1, 5);
        let dates = set(&[
            today,
            today - Duration::days(1),
            today - Duration::days(2),
        ]);
        assert_eq!(current_streak(&dates, today), 3);
    }

    #[test]
    fn current_streak_stops_at_a_gap() {
        let today = date(2026, 1, 5);
        let dates = set(&[today, today - Duration::days(2)]);
        assert_eq!(current_streak(&dates, today), 1);
    }

    #[test]
    fn current_streak_requires_today() {
        let today = date(2026, 1, 5);
        let dates = set(&[today - Duration::days(1), today - Duration::days(2)]);
        assert_eq!(current_streak(&dates, today), 0);
    }

    #[test]
    fn current_streak_spans_month_boundary() {
        let today = date(2026, 3, 2);
        let dates = set(&[
            date(2026, 3, 2),
            date(2026, 3, 1),
            date(2026, 2, 28),
            date(2026, 2, 27),
        ]);
        assert_eq!(current_streak(&dates, today), 4);
    }

    #[test]
    fn longest_streak_empty_set_is_zero() {
        assert_eq!(longest_streak(&BTreeSet::new()), 0);
    }

    #[test]
    fn longest_streak_single_date_is_one() {
        assert_eq!(longest_streak(&set(&[date(2026, 1, 5)])), 1);
    }

    #[test]
    fn longest_streak_picks_the_longest_run() {
        let start = date(2026, 1, 1);
        let mut dates = Vec::new();
        // runs of 2, 5, 3 separated by gaps; the middle run wins
        for offset in [0, 1, 4, 5, 6, 7, 8, 11, 12, 13] {
            dates.push(start + Duration::days(offset));
        }
        assert_eq!(longest_streak(&set(&dates)), 5);
    }

    #[test]
    fn longest_streak_counts_the_tail_run() {
        let start = date(2026, 1, 1);
        // short run first, longest run last
        let dates = set(&[
            start,
            start + Duration::days(3),
            start + Duration::days(4),
            start + Duration::days(5),
        ]);
        assert_eq!(longest_streak(&dates), 3);
    }

    #[test]
    fn longest_streak_ignores_recency() {
        let dates = set(&[
            date(2025, 6, 1),
            date(2025, 6, 2),
            date(2025, 6, 3),
            date(2026, 1, 5),
        ]);
        assert_eq!(longest_streak(&dates), 3);
    }

    #[test]
    fn habit_stats_combines_the_measures() {
        use chrono::Utc;

        let today = date(2026, 1, 5);
        let mut habit = HabitRecord::new("Stretch".into(), None, Utc::now());
        for offset in [0, 1, 5, 6, 7] {
            habit
                .insert_completion(today - Duration::days(offset), Utc::now())
                .unwrap();
        }

        let stats = habit_stats(&habit, today);
        assert!(stats.completed_today);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.longest_streak, 3);
        assert_eq!(stats.total_completions, 5);
    }

    #[test]
    fn overview_with_no_completions_is_all_zero() {
        let today = date(2026, 1, 5);
        let overview = fourteen_day_overview_at(today, &[]);

        assert_eq!(overview.dates.len(), 14);
        assert!(overview.dates.iter().all(|day| day.habits_completed == 0));
        assert_eq!(overview.current_streak, 0);
    }

    #[test]
    fn overview_window_is_ascending_and_flags_today() {
        let today = date(2026, 1, 5);
        let overview = fourteen_day_overview_at(today, &[]);

        let first = &overview.dates[0];
        let last = &overview.dates[13];
        assert_eq!(first.date, today - Duration::days(13));
        assert_eq!(last.date, today);
        assert!(last.is_today);
        assert_eq!(
            overview.dates.iter().filter(|day| day.is_today).count(),
            1
        );
        assert!(overview.dates.windows(2).all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn overview_labels_days() {
        // 2026-01-05 is a Monday
        let today = date(2026, 1, 5);
        let overview = fourteen_day_overview_at(today, &[]);

        let last = &overview.dates[13];
        assert_eq!(last.day_number, 5);
        assert_eq!(last.day_name, "Mon");
        assert_eq!(overview.dates[12].day_name, "Sun");
    }

    #[test]
    fn overview_counts_distinct_habits_per_day() {
        let today = date(2026, 1, 5);
        let yesterday = today - Duration::days(1);
        let completions = vec![(1, today), (1, yesterday), (2, yesterday)];

        let overview = fourteen_day_overview_at(today, &completions);

        let by_date: BTreeMap<NaiveDate, u32> = overview
            .dates
            .iter()
            .map(|day| (day.date, day.habits_completed))
            .collect();
        assert_eq!(by_date[&today], 1);
        assert_eq!(by_date[&yesterday], 2);
        assert_eq!(overview.current_streak, 2);
    }

    #[test]
    fn overview_streak_breaks_on_an_empty_day() {
        let today = date(2026, 1, 5);
        let completions = vec![(1, today), (2, today - Duration::days(2))];

        let overview = fourteen_day_overview_at(today, &completions);
        assert_eq!(overview.current_streak, 1);
    }

    #[test]
    fn overview_streak_is_zero_without_a_completion_today() {
        let today = date(2026, 1, 5);
        let completions = vec![(1, today - Duration::days(1))];

        let overview = fourteen_day_overview_at(today, &completions);
        assert_eq!(overview.current_streak, 0);
    }

    #[test]
    fn overview_streak_is_bounded_by_the_window() {
        let today = date(2026, 1, 20);
        let completions: Vec<(u64, NaiveDate)> =
            (0..20).map(|offset| (1, today - Duration::days(offset))).collect();

        let overview = fourteen_day_overview_at(today, &completions);
        assert_eq!(overview.current_streak, 14);
    }

    #[test]
    fn overview_ignores_completions_outside_the_window() {
        let today = date(2026, 1, 5);
        let completions = vec![(1, today - Duration::days(14)), (1, today + Duration::days(1))];

        let overview = fourteen_day_overview_at(today, &completions);
        assert!(overview.dates.iter().all(|day| day.habits_completed == 0));
        assert_eq!(overview.current_streak, 0);
    }
}
