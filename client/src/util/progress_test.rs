use super::*;

fn entry(plan: &'static str, duration_min: u32) -> HistoryEntry {
    HistoryEntry { id: 0, date: "01/01/2024", plan, exercises: 4, duration_min }
}

#[test]
fn sample_history_figures() {
    assert_eq!(total_workouts(HISTORY), 7);
    assert_eq!(mean_duration(HISTORY), 74);
    assert_eq!(most_used_plan(HISTORY), Some(("Treino Completo", 3)));
}

#[test]
fn mean_duration_rounds_half_up() {
    assert_eq!(mean_duration(&[entry("A", 60), entry("A", 61)]), 61);
    assert_eq!(mean_duration(&[entry("A", 60), entry("A", 60), entry("A", 61)]), 60);
    assert_eq!(mean_duration(&[]), 0);
}

#[test]
fn most_used_plan_prefers_first_on_tie() {
    let history = [entry("B", 50), entry("A", 50), entry("A", 50), entry("B", 50)];
    assert_eq!(most_used_plan(&history), Some(("B", 2)));
    assert_eq!(most_used_plan(&[]), None);
}

#[test]
fn personal_record_uses_first_date_of_top_weight() {
    const ROWS: &[WeightPoint] = &[point("01/01/2024", 40), point("08/01/2024", 45), point("15/01/2024", 45)];
    let series = ExerciseSeries { exercise: "Remada", points: ROWS };
    assert_eq!(
        personal_record(&series),
        Some(PersonalRecord { exercise: "Remada", weight: 45, date: "08/01/2024" })
    );
    assert_eq!(personal_record(&ExerciseSeries { exercise: "Vazio", points: &[] }), None);
}

#[test]
fn sample_personal_records() {
    let records = personal_records(SERIES);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0], PersonalRecord { exercise: "Supino Reto", weight: 70, date: "13/10/2023" });
    assert_eq!(records[2].weight, 120);
    assert_eq!(exercise_names(SERIES), vec!["Supino Reto", "Agachamento", "Levantamento Terra"]);
}
