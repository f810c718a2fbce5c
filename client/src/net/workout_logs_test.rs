use futures::executor::block_on;

use super::*;
use crate::net::api::Method;
use crate::net::mock_transport::{MockTransport, TEST_BASE_URL, echo_client, test_client};
use crate::net::types::{WorkoutLogExercise, WorkoutLogSet};

fn log() -> WorkoutLog {
    WorkoutLog {
        id: None,
        workout_plan_id: 3,
        date: "2023-10-15".to_owned(),
        notes: Some("Recorde no agachamento".to_owned()),
        exercises: vec![WorkoutLogExercise {
            id: None,
            exercise_id: 2,
            name: "Agachamento".to_owned(),
            sets: vec![
                WorkoutLogSet { id: None, reps: "10".to_owned(), weight: "100".to_owned(), completed: true },
                WorkoutLogSet { id: None, reps: "8".to_owned(), weight: "105".to_owned(), completed: false },
            ],
        }],
    }
}

#[test]
fn create_echoes_log_unchanged() {
    let api = echo_client();
    assert_eq!(block_on(create(&api, &log())).unwrap(), log());
}

#[test]
fn create_sends_camel_case_payload() {
    let api = test_client(MockTransport::new().respond(201, serde_json::to_value(log()).unwrap()));
    block_on(create(&api, &log())).unwrap();
    let request = api.transport().last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, format!("{TEST_BASE_URL}/workout-logs"));
    let body = request.body.unwrap();
    assert_eq!(body["workoutPlanId"], 3);
    assert_eq!(body["exercises"][0]["sets"][1]["completed"], false);
}

#[test]
fn get_by_id_and_delete_target_item_path() {
    let api = test_client(
        MockTransport::new()
            .respond(200, serde_json::to_value(WorkoutLog { id: Some(8), ..log() }).unwrap())
            .respond_raw(200, "{}"),
    );
    assert_eq!(block_on(get_by_id(&api, 8)).unwrap().id, Some(8));
    block_on(delete(&api, 8)).unwrap();
    let urls: Vec<_> = api.transport().requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls, vec![format!("{TEST_BASE_URL}/workout-logs/8"); 2]);
}

#[test]
fn list_and_update_round_trip() {
    let stored = WorkoutLog { id: Some(8), ..log() };
    let api = test_client(
        MockTransport::new()
            .respond(200, serde_json::json!([serde_json::to_value(&stored).unwrap()]))
            .respond(200, serde_json::to_value(&stored).unwrap()),
    );
    assert_eq!(block_on(list(&api)).unwrap(), vec![stored.clone()]);
    assert_eq!(block_on(update(&api, 8, &stored)).unwrap(), stored);
}

#[test]
fn list_tolerates_null_plan_and_notes() {
    let api = test_client(MockTransport::new().respond(
        200,
        serde_json::json!([
            { "id": 9, "workoutPlanId": null, "date": "2023-10-01", "notes": null, "exercises": [] }
        ]),
    ));

    let logs = block_on(list(&api)).unwrap();

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].workout_plan_id, 0);
    assert_eq!(logs[0].notes, None);
}
