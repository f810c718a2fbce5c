//! Sample training history and the figures derived from it for the
//! progress screen. The numbers are fixed; nothing here talks to the API.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: u32,
    /// `DD/MM/YYYY`.
    pub date: &'static str,
    pub plan: &'static str,
    pub exercises: u32,
    pub duration_min: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightPoint {
    pub date: &'static str,
    pub weight: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExerciseSeries {
    pub exercise: &'static str,
    pub points: &'static [WeightPoint],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonalRecord {
    pub exercise: &'static str,
    pub weight: u32,
    /// First date the top weight was reached.
    pub date: &'static str,
}

/// Options for the (placeholder) chart range selector: value, label.
pub const TIME_RANGES: [(&str, &str); 4] = [
    ("1m", "Último Mês"),
    ("3m", "Últimos 3 Meses"),
    ("6m", "Últimos 6 Meses"),
    ("1y", "Último Ano"),
];

pub const HISTORY: &[HistoryEntry] = &[
    HistoryEntry { id: 1, date: "15/10/2023", plan: "Treino Completo", exercises: 5, duration_min: 65 },
    HistoryEntry { id: 2, date: "12/10/2023", plan: "Treino Completo", exercises: 5, duration_min: 70 },
    HistoryEntry { id: 3, date: "10/10/2023", plan: "Push Pull Legs", exercises: 6, duration_min: 75 },
    HistoryEntry { id: 4, date: "08/10/2023", plan: "Push Pull Legs", exercises: 6, duration_min: 80 },
    HistoryEntry { id: 5, date: "05/10/2023", plan: "Treino Completo", exercises: 5, duration_min: 60 },
    HistoryEntry { id: 6, date: "03/10/2023", plan: "Treino ABC", exercises: 7, duration_min: 85 },
    HistoryEntry { id: 7, date: "01/10/2023", plan: "Treino ABC", exercises: 7, duration_min: 80 },
];

const fn point(date: &'static str, weight: u32) -> WeightPoint {
    WeightPoint { date, weight }
}

pub const SERIES: &[ExerciseSeries] = &[
    ExerciseSeries {
        exercise: "Supino Reto",
        points: &[
            point("01/09/2023", 50),
            point("08/09/2023", 55),
            point("15/09/2023", 55),
            point("22/09/2023", 60),
            point("29/09/2023", 65),
            point("06/10/2023", 65),
            point("13/10/2023", 70),
        ],
    },
    ExerciseSeries {
        exercise: "Agachamento",
        points: &[
            point("01/09/2023", 70),
            point("08/09/2023", 75),
            point("15/09/2023", 80),
            point("22/09/2023", 85),
            point("29/09/2023", 90),
            point("06/10/2023", 95),
            point("13/10/2023", 100),
        ],
    },
    ExerciseSeries {
        exercise: "Levantamento Terra",
        points: &[
            point("01/09/2023", 90),
            point("08/09/2023", 95),
            point("15/09/2023", 100),
            point("22/09/2023", 105),
            point("29/09/2023", 110),
            point("06/10/2023", 115),
            point("13/10/2023", 120),
        ],
    },
];

pub fn total_workouts(history: &[HistoryEntry]) -> usize {
    history.len()
}

/// Mean session length rounded to whole minutes (half rounds up); 0 for
/// an empty history.
pub fn mean_duration(history: &[HistoryEntry]) -> u32 {
    let count = u32::try_from(history.len()).unwrap_or(u32::MAX);
    if count == 0 {
        return 0;
    }
    let total: u32 = history.iter().map(|h| h.duration_min).sum();
    (total * 2 + count) / (count * 2)
}

/// Plan with the most sessions and its count. Ties go to the plan seen
/// first in `history`.
pub fn most_used_plan(history: &[HistoryEntry]) -> Option<(&'static str, usize)> {
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for entry in history {
        match counts.iter_mut().find(|(plan, _)| *plan == entry.plan) {
            Some((_, n)) => *n += 1,
            None => counts.push((entry.plan, 1)),
        }
    }
    counts
        .into_iter()
        .fold(None, |best, candidate| match best {
            Some((_, n)) if n >= candidate.1 => best,
            _ => Some(candidate),
        })
}

pub fn personal_record(series: &ExerciseSeries) -> Option<PersonalRecord> {
    let top = series.points.iter().map(|p| p.weight).max()?;
    let first = series.points.iter().find(|p| p.weight == top)?;
    Some(PersonalRecord {
        exercise: series.exercise,
        weight: top,
        date: first.date,
    })
}

pub fn personal_records(series: &[ExerciseSeries]) -> Vec<PersonalRecord> {
    series.iter().filter_map(personal_record).collect()
}

pub fn exercise_names(series: &[ExerciseSeries]) -> Vec<&'static str> {
    series.iter().map(|s| s.exercise).collect()
}
