//! In-progress workout log built from a plan on the log-workout screen.

#[cfg(test)]
#[path = "log_draft_test.rs"]
mod log_draft_test;

use crate::net::types::{Exercise, WorkoutLog, WorkoutLogExercise, WorkoutLogSet, WorkoutPlan};

/// Sets pre-filled for each planned exercise.
pub const SEEDED_SETS: usize = 3;

/// Name used when a planned exercise is missing from the catalog.
pub const FALLBACK_EXERCISE_NAME: &str = "Exercício";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftExercise {
    pub exercise_id: i64,
    pub name: String,
    pub sets: Vec<WorkoutLogSet>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    #[error("Nenhuma ficha de treino selecionada")]
    NoPlan,
    #[error("Nenhum exercício")]
    NoExercises,
}

impl LogError {
    pub fn description(self) -> &'static str {
        match self {
            Self::NoPlan => "Por favor, selecione uma ficha de treino.",
            Self::NoExercises => "Seu treino não tem exercícios.",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogDraft {
    pub plan_id: Option<i64>,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub notes: String,
    pub exercises: Vec<DraftExercise>,
}

impl LogDraft {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    /// Switch to `plan` and rebuild the exercise list from it; `None`
    /// clears the selection and the list.
    pub fn select_plan(&mut self, plan: Option<&WorkoutPlan>, catalog: &[Exercise]) {
        self.plan_id = plan.and_then(|p| p.id);
        self.exercises = plan.map(|p| seed_exercises(p, catalog)).unwrap_or_default();
    }

    pub fn sets_mut(&mut self, exercise_index: usize) -> Option<&mut Vec<WorkoutLogSet>> {
        self.exercises.get_mut(exercise_index).map(|e| &mut e.sets)
    }

    /// Check the draft and build the payload.
    ///
    /// # Errors
    ///
    /// `NoPlan` without a selected plan, `NoExercises` for an empty draft.
    pub fn validate(&self) -> Result<WorkoutLog, LogError> {
        let Some(plan_id) = self.plan_id else {
            return Err(LogError::NoPlan);
        };
        if self.exercises.is_empty() {
            return Err(LogError::NoExercises);
        }
        let notes = self.notes.trim();
        Ok(WorkoutLog {
            id: None,
            workout_plan_id: plan_id,
            date: self.date.clone(),
            notes: (!notes.is_empty()).then(|| notes.to_owned()),
            exercises: self
                .exercises
                .iter()
                .map(|e| WorkoutLogExercise {
                    id: None,
                    exercise_id: e.exercise_id,
                    name: e.name.clone(),
                    sets: e.sets.iter().map(|s| WorkoutLogSet { id: None, ..s.clone() }).collect(),
                })
                .collect(),
        })
    }
}

/// One draft exercise per plan entry, each with `SEEDED_SETS` open sets.
pub fn seed_exercises(plan: &WorkoutPlan, catalog: &[Exercise]) -> Vec<DraftExercise> {
    plan.exercises
        .iter()
        .map(|planned| DraftExercise {
            exercise_id: planned.exercise_id,
            name: exercise_name(catalog, planned.exercise_id),
            sets: (0..SEEDED_SETS)
                .map(|_| WorkoutLogSet {
                    id: None,
                    reps: planned.reps.clone(),
                    weight: planned.weight.clone(),
                    completed: false,
                })
                .collect(),
        })
        .collect()
}

pub fn exercise_name(catalog: &[Exercise], exercise_id: i64) -> String {
    catalog
        .iter()
        .find(|e| e.id == Some(exercise_id))
        .map_or_else(|| FALLBACK_EXERCISE_NAME.to_owned(), |e| e.name.clone())
}

/// Today's date (`YYYY-MM-DD`, UTC) from the browser clock; empty during SSR.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.chars().take(10).collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
