use crate::models::{BoardResponse, HabitView, Stats, SummaryView};
use crate::store::HabitStore;

/// round(100 * completed / total), rounding halves up; 0 with no habits.
pub fn completion_percent(stats: &Stats) -> i64 {
    if stats.total_habits == 0 {
        return 0;
    }
    let ratio = stats.completed_today as f64 / stats.total_habits as f64;
    (ratio * 100.0 + 0.5).floor() as i64
}

pub fn build_board(store: &HabitStore, today: &str) -> BoardResponse {
    let habits = store
        .habits()
        .iter()
        .map(|habit| HabitView {
            id: habit.id.clone(),
            name: habit.name.clone(),
            frequency: habit.frequency.clone(),
            streak: habit.streak,
            done_today: habit.is_done_on(today),
        })
        .collect();

    let stats = store.stats();
    BoardResponse {
        date: today.to_string(),
        habits,
        stats: SummaryView {
            total_habits: stats.total_habits,
            completed_today: stats.completed_today,
            completion_percent: completion_percent(stats),
        },
    }
}
