use super::*;

fn set(reps: &str, weight: &str, completed: bool) -> WorkoutLogSet {
    WorkoutLogSet {
        id: None,
        reps: reps.to_owned(),
        weight: weight.to_owned(),
        completed,
    }
}

fn sample() -> Vec<WorkoutLogSet> {
    vec![set("12", "40", true), set("10", "45", false), set("8", "50", false), set("6", "55", true)]
}

// =============================================================
// move_set
// =============================================================

#[test]
fn up_then_down_restores_order_for_every_index() {
    for index in 1..sample().len() {
        let mut sets = sample();
        assert!(move_set(&mut sets, index, Direction::Up));
        assert!(move_set(&mut sets, index - 1, Direction::Down));
        assert_eq!(sets, sample());
    }
}

#[test]
fn down_then_up_restores_order_for_every_index() {
    for index in 0..sample().len() - 1 {
        let mut sets = sample();
        assert!(move_set(&mut sets, index, Direction::Down));
        assert!(move_set(&mut sets, index + 1, Direction::Up));
        assert_eq!(sets, sample());
    }
}

#[test]
fn moving_first_up_is_noop() {
    let mut sets = sample();
    assert!(!move_set(&mut sets, 0, Direction::Up));
    assert_eq!(sets, sample());
}

#[test]
fn moving_last_down_is_noop() {
    let mut sets = sample();
    let last = sets.len() - 1;
    assert!(!move_set(&mut sets, last, Direction::Down));
    assert_eq!(sets, sample());
}

#[test]
fn out_of_range_move_is_noop() {
    let mut sets = sample();
    assert!(!move_set(&mut sets, 10, Direction::Up));
    assert!(!move_set(&mut [], 0, Direction::Down));
    assert_eq!(sets, sample());
}

#[test]
fn move_swaps_only_the_two_entries() {
    let mut sets = sample();
    move_set(&mut sets, 1, Direction::Down);
    assert_eq!(sets[0], sample()[0]);
    assert_eq!(sets[1], sample()[2]);
    assert_eq!(sets[2], sample()[1]);
    assert_eq!(sets[3], sample()[3]);
}

// =============================================================
// remove_set
// =============================================================

#[test]
fn removing_only_set_is_rejected() {
    let mut sets = vec![set("10", "20", false)];
    assert_eq!(remove_set(&mut sets, 0), Err(SetListError::LastSet));
    assert_eq!(sets, vec![set("10", "20", false)]);
}

#[test]
fn removing_keeps_remaining_order() {
    let mut sets = sample();
    let removed = remove_set(&mut sets, 1).unwrap();
    assert_eq!(removed, sample()[1]);
    assert_eq!(sets.len(), sample().len() - 1);
    assert_eq!(sets, vec![sample()[0].clone(), sample()[2].clone(), sample()[3].clone()]);
}

#[test]
fn removing_out_of_range_is_rejected() {
    let mut sets = sample();
    assert_eq!(remove_set(&mut sets, 9), Err(SetListError::OutOfRange));
    assert_eq!(sets, sample());
}

// =============================================================
// toggle / add / update
// =============================================================

#[test]
fn toggle_flips_only_completed() {
    let mut sets = sample();
    toggle_completion(&mut sets, 1);
    assert!(sets[1].completed);
    assert_eq!(sets[1].reps, "10");
    assert_eq!(sets[1].weight, "45");
    toggle_completion(&mut sets, 1);
    assert_eq!(sets, sample());
}

#[test]
fn add_set_copies_last_reps_and_weight_uncompleted() {
    let mut sets = sample();
    add_set(&mut sets);
    assert_eq!(sets.len(), 5);
    assert_eq!(sets[4], set("6", "55", false));
}

#[test]
fn add_set_to_empty_list_starts_blank() {
    let mut sets = Vec::new();
    add_set(&mut sets);
    assert_eq!(sets, vec![set("", "", false)]);
}

#[test]
fn update_set_changes_one_field() {
    let mut sets = sample();
    update_set(&mut sets, 2, SetField::Weight, "52.5");
    update_set(&mut sets, 0, SetField::Reps, "15");
    assert_eq!(sets[2], set("8", "52.5", false));
    assert_eq!(sets[0], set("15", "40", true));
    update_set(&mut sets, 42, SetField::Reps, "1");
    assert_eq!(sets.len(), 4);
}
