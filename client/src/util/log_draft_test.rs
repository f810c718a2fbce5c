use super::*;
use crate::net::types::WorkoutPlanExercise;

fn catalog() -> Vec<Exercise> {
    vec![
        Exercise { id: Some(1), name: "Supino Reto".to_owned(), category: "Peito".to_owned(), equipment: "Barra".to_owned() },
        Exercise { id: Some(2), name: "Agachamento".to_owned(), category: "Pernas".to_owned(), equipment: "Barra".to_owned() },
    ]
}

fn plan() -> WorkoutPlan {
    WorkoutPlan {
        id: Some(10),
        name: "Treino Completo".to_owned(),
        days: vec!["Segunda".to_owned()],
        exercises: vec![
            WorkoutPlanExercise { id: Some(100), exercise_id: 2, sets: 4, reps: "10".to_owned(), weight: "80".to_owned() },
            WorkoutPlanExercise { id: Some(101), exercise_id: 99, sets: 3, reps: "12".to_owned(), weight: "20".to_owned() },
        ],
    }
}

#[test]
fn select_plan_seeds_three_open_sets_per_exercise() {
    let mut draft = LogDraft::new("2023-10-15");
    draft.select_plan(Some(&plan()), &catalog());

    assert_eq!(draft.plan_id, Some(10));
    assert_eq!(draft.exercises.len(), 2);
    let squat = &draft.exercises[0];
    assert_eq!(squat.name, "Agachamento");
    assert_eq!(squat.sets.len(), SEEDED_SETS);
    assert!(squat.sets.iter().all(|s| s.reps == "10" && s.weight == "80" && !s.completed));
}

#[test]
fn unknown_exercise_gets_fallback_name() {
    let mut draft = LogDraft::new("2023-10-15");
    draft.select_plan(Some(&plan()), &catalog());
    assert_eq!(draft.exercises[1].name, FALLBACK_EXERCISE_NAME);
}

#[test]
fn deselecting_plan_clears_exercises() {
    let mut draft = LogDraft::new("2023-10-15");
    draft.select_plan(Some(&plan()), &catalog());
    draft.select_plan(None, &catalog());
    assert_eq!(draft.plan_id, None);
    assert!(draft.exercises.is_empty());
}

#[test]
fn validate_requires_plan_then_exercises() {
    let mut draft = LogDraft::new("2023-10-15");
    assert_eq!(draft.validate(), Err(LogError::NoPlan));

    let empty_plan = WorkoutPlan { exercises: Vec::new(), ..plan() };
    draft.select_plan(Some(&empty_plan), &catalog());
    assert_eq!(draft.validate(), Err(LogError::NoExercises));
    assert_eq!(LogError::NoExercises.description(), "Seu treino não tem exercícios.");
}

#[test]
fn validate_builds_payload_with_edits() {
    let mut draft = LogDraft::new("2023-10-15");
    draft.notes = "  pesado hoje ".to_owned();
    draft.select_plan(Some(&plan()), &catalog());
    if let Some(sets) = draft.sets_mut(0) {
        sets[0].completed = true;
        sets.pop();
    }

    let log = draft.validate().unwrap();

    assert_eq!(log.id, None);
    assert_eq!(log.workout_plan_id, 10);
    assert_eq!(log.date, "2023-10-15");
    assert_eq!(log.notes.as_deref(), Some("pesado hoje"));
    assert_eq!(log.exercises[0].exercise_id, 2);
    assert_eq!(log.exercises[0].sets.len(), 2);
    assert!(log.exercises[0].sets[0].completed);
    assert!(log.exercises[0].sets.iter().all(|s| s.id.is_none()));
}

#[test]
fn blank_notes_are_omitted() {
    let mut draft = LogDraft::new("2023-10-15");
    draft.notes = "   ".to_owned();
    draft.select_plan(Some(&plan()), &catalog());
    assert_eq!(draft.validate().unwrap().notes, None);
}

#[test]
fn sets_mut_out_of_range_is_none() {
    let mut draft = LogDraft::new("");
    assert!(draft.sets_mut(0).is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn today_iso_is_empty_outside_the_browser() {
    assert_eq!(today_iso(), "");
}
