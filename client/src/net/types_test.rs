use super::*;

// =============================================================
// Exercise
// =============================================================

#[test]
fn exercise_draft_omits_missing_id() {
    let exercise = Exercise {
        id: None,
        name: "Supino Reto".to_owned(),
        category: "Peito".to_owned(),
        equipment: "Barra".to_owned(),
    };
    let json = serde_json::to_value(&exercise).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "name": "Supino Reto", "category": "Peito", "equipment": "Barra" })
    );
}

#[test]
fn exercise_decodes_with_missing_equipment() {
    let exercise: Exercise =
        serde_json::from_value(serde_json::json!({ "id": 3, "name": "Prancha", "category": "Core" })).unwrap();
    assert_eq!(exercise.id, Some(3));
    assert_eq!(exercise.equipment, "");
}

// =============================================================
// WorkoutPlan
// =============================================================

#[test]
fn workout_plan_uses_camel_case_exercise_id() {
    let plan = WorkoutPlan {
        id: Some(7),
        name: "Treino A".to_owned(),
        days: vec!["Segunda".to_owned(), "Quarta".to_owned()],
        exercises: vec![WorkoutPlanExercise {
            id: None,
            exercise_id: 2,
            sets: 4,
            reps: "8-12".to_owned(),
            weight: "60".to_owned(),
        }],
    };
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["exercises"][0]["exerciseId"], 2);
    assert_eq!(json["days"], serde_json::json!(["Segunda", "Quarta"]));
    assert!(json["exercises"][0].get("id").is_none());
}

// =============================================================
// WorkoutLog
// =============================================================

#[test]
fn workout_log_decodes_backend_shape() {
    let raw = serde_json::json!({
        "id": 10,
        "workoutPlanId": 7,
        "date": "2023-10-15",
        "notes": "bom treino",
        "exercises": [{
            "exerciseId": 1,
            "name": "Supino Reto",
            "sets": [{ "reps": "10", "weight": "60", "completed": true }]
        }]
    });
    let log: WorkoutLog = serde_json::from_value(raw).unwrap();
    assert_eq!(log.workout_plan_id, 7);
    assert_eq!(log.notes.as_deref(), Some("bom treino"));
    assert!(log.exercises[0].sets[0].completed);
}

#[test]
fn workout_log_without_notes_omits_field() {
    let log = WorkoutLog {
        id: None,
        workout_plan_id: 1,
        date: "2024-01-01".to_owned(),
        notes: None,
        exercises: Vec::new(),
    };
    let json = serde_json::to_value(&log).unwrap();
    assert!(json.get("notes").is_none());
    assert_eq!(json["workoutPlanId"], 1);
}

// =============================================================
// User / auth
// =============================================================

#[test]
fn weight_unit_serializes_lowercase() {
    assert_eq!(serde_json::to_value(WeightUnit::Kg).unwrap(), "kg");
    assert_eq!(serde_json::to_value(WeightUnit::Lbs).unwrap(), "lbs");
}

#[test]
fn weight_unit_from_form_value_defaults_to_kg() {
    assert_eq!(WeightUnit::from_form_value("lbs"), WeightUnit::Lbs);
    assert_eq!(WeightUnit::from_form_value("kg"), WeightUnit::Kg);
    assert_eq!(WeightUnit::from_form_value("stone"), WeightUnit::Kg);
}

#[test]
fn auth_response_decodes_user() {
    let raw = serde_json::json!({
        "token": "t-1",
        "user": { "id": 1, "name": "Ana", "email": "ana@example.com", "weightUnit": "lbs" }
    });
    let auth: AuthResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(auth.token, "t-1");
    assert_eq!(auth.user.weight_unit, WeightUnit::Lbs);
}

#[test]
fn register_request_uses_camel_case() {
    let req = RegisterRequest {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "secret".to_owned(),
        weight_unit: WeightUnit::Kg,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["weightUnit"], "kg");
}

#[test]
fn password_change_uses_camel_case() {
    let req = PasswordChange { current_password: "a".to_owned(), new_password: "b".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "currentPassword": "a", "newPassword": "b" })
    );
}

#[test]
fn preferences_default_enables_everything() {
    let prefs = Preferences::default();
    assert_eq!(prefs.weight_unit, WeightUnit::Kg);
    assert!(prefs.enable_notifications);
    assert!(prefs.auto_backup);
}
