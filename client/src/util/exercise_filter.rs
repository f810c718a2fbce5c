//! Search and category filtering for the exercise table.
//!
//! Recomputed from the full in-memory list on every keystroke or selection;
//! filtering never goes back to the server.

#[cfg(test)]
#[path = "exercise_filter_test.rs"]
mod exercise_filter_test;

use super::catalog::ALL_CATEGORIES;
use crate::net::types::Exercise;

/// Whether one exercise passes the search text and category filter.
///
/// The name must contain `search` case-insensitively; the category must
/// equal `category` unless it is the `ALL_CATEGORIES` sentinel.
pub fn matches(exercise: &Exercise, search: &str, category: &str) -> bool {
    let needle = search.to_lowercase();
    exercise.name.to_lowercase().contains(&needle) && (category == ALL_CATEGORIES || exercise.category == category)
}

/// Visible rows, in their original order.
pub fn filter_exercises(all: &[Exercise], search: &str, category: &str) -> Vec<Exercise> {
    all.iter().filter(|e| matches(e, search, category)).cloned().collect()
}
