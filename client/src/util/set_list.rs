//! Editing the ordered set list of one logged exercise.
//!
//! DESIGN
//! ======
//! Every operation works in place on a `Vec<WorkoutLogSet>` and touches only
//! the targeted entries. The display index is the position in the vector; no
//! set-number field is kept in sync.

#[cfg(test)]
#[path = "set_list_test.rs"]
mod set_list_test;

use crate::net::types::WorkoutLogSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetField {
    Reps,
    Weight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetListError {
    #[error("cada exercício deve ter pelo menos uma série")]
    LastSet,
    #[error("série fora do intervalo")]
    OutOfRange,
}

/// Swap the set at `index` with its neighbour in `direction`.
///
/// Returns `false` (and leaves the list untouched) when the move would cross
/// either end or `index` is out of range.
pub fn move_set(sets: &mut [WorkoutLogSet], index: usize, direction: Direction) -> bool {
    if index >= sets.len() {
        return false;
    }
    let target = match direction {
        Direction::Up if index == 0 => return false,
        Direction::Up => index - 1,
        Direction::Down if index + 1 == sets.len() => return false,
        Direction::Down => index + 1,
    };
    sets.swap(index, target);
    true
}

/// Remove the set at `index`, keeping at least one set.
///
/// # Errors
///
/// `LastSet` when only one set remains, `OutOfRange` for a bad index.
pub fn remove_set(sets: &mut Vec<WorkoutLogSet>, index: usize) -> Result<WorkoutLogSet, SetListError> {
    if sets.len() <= 1 {
        return Err(SetListError::LastSet);
    }
    if index >= sets.len() {
        return Err(SetListError::OutOfRange);
    }
    Ok(sets.remove(index))
}

/// Flip the completed flag of one set.
pub fn toggle_completion(sets: &mut [WorkoutLogSet], index: usize) {
    if let Some(set) = sets.get_mut(index) {
        set.completed = !set.completed;
    }
}

/// Append a new set copying the last one's reps and weight.
pub fn add_set(sets: &mut Vec<WorkoutLogSet>) {
    let (reps, weight) = sets
        .last()
        .map(|s| (s.reps.clone(), s.weight.clone()))
        .unwrap_or_default();
    sets.push(WorkoutLogSet {
        id: None,
        reps,
        weight,
        completed: false,
    });
}

/// Overwrite reps or weight of one set.
pub fn update_set(sets: &mut [WorkoutLogSet], index: usize, field: SetField, value: &str) {
    let Some(set) = sets.get_mut(index) else {
        return;
    };
    match field {
        SetField::Reps => value.clone_into(&mut set.reps),
        SetField::Weight => value.clone_into(&mut set.weight),
    }
}
