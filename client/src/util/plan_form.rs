//! Editable draft behind the workout plan create/edit form.
//!
//! DESIGN
//! ======
//! Rows carry a local `key` so the view can address them while the user
//! reorders or deletes; keys never reach the wire. `validate` is the only
//! way to turn a draft into a `WorkoutPlan`.

#[cfg(test)]
#[path = "plan_form_test.rs"]
mod plan_form_test;

use crate::net::types::{WorkoutPlan, WorkoutPlanExercise};

/// Sets assigned to a freshly added row.
pub const DEFAULT_SETS: u32 = 3;
pub const DEFAULT_REPS: &str = "8-12";
pub const DEFAULT_WEIGHT: &str = "0";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanExerciseRow {
    pub key: u64,
    /// `0` until the user picks an exercise.
    pub exercise_id: i64,
    pub sets: u32,
    pub reps: String,
    pub weight: String,
}

/// A single edit applied to one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowEdit {
    Exercise(i64),
    Sets(u32),
    Reps(String),
    Weight(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("Nome obrigatório")]
    MissingName,
    #[error("Nenhum dia selecionado")]
    NoDays,
    #[error("Nenhum exercício adicionado")]
    NoExercises,
    #[error("Exercício inválido")]
    UnselectedExercise,
}

impl PlanError {
    pub fn description(self) -> &'static str {
        match self {
            Self::MissingName => "Por favor, dê um nome à sua ficha de treino.",
            Self::NoDays => "Por favor, selecione pelo menos um dia de treino.",
            Self::NoExercises => "Por favor, adicione pelo menos um exercício à sua ficha de treino.",
            Self::UnselectedExercise => "Por favor, selecione um exercício para todas as entradas.",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanDraft {
    pub name: String,
    pub days: Vec<String>,
    pub rows: Vec<PlanExerciseRow>,
    next_key: u64,
}

impl PlanDraft {
    /// Seed a draft from a stored plan (edit mode).
    pub fn from_plan(plan: &WorkoutPlan) -> Self {
        let mut draft = Self {
            name: plan.name.clone(),
            days: plan.days.clone(),
            ..Self::default()
        };
        for exercise in &plan.exercises {
            let key = draft.allocate_key();
            draft.rows.push(PlanExerciseRow {
                key,
                exercise_id: exercise.exercise_id,
                sets: exercise.sets,
                reps: exercise.reps.clone(),
                weight: exercise.weight.clone(),
            });
        }
        draft
    }

    fn allocate_key(&mut self) -> u64 {
        self.next_key += 1;
        self.next_key
    }

    pub fn has_day(&self, day: &str) -> bool {
        self.days.iter().any(|d| d == day)
    }

    /// Select an unselected day (appended) or deselect a selected one.
    pub fn toggle_day(&mut self, day: &str) {
        if self.has_day(day) {
            self.days.retain(|d| d != day);
        } else {
            self.days.push(day.to_owned());
        }
    }

    /// Append a row with default targets and return its key.
    pub fn add_row(&mut self) -> u64 {
        let key = self.allocate_key();
        self.rows.push(PlanExerciseRow {
            key,
            exercise_id: 0,
            sets: DEFAULT_SETS,
            reps: DEFAULT_REPS.to_owned(),
            weight: DEFAULT_WEIGHT.to_owned(),
        });
        key
    }

    pub fn row(&self, key: u64) -> Option<&PlanExerciseRow> {
        self.rows.iter().find(|r| r.key == key)
    }

    /// 1-based position of the row, for "Exercício N" labels.
    pub fn position(&self, key: u64) -> Option<usize> {
        self.rows.iter().position(|r| r.key == key).map(|i| i + 1)
    }

    pub fn remove_row(&mut self, key: u64) {
        self.rows.retain(|r| r.key != key);
    }

    pub fn update_row(&mut self, key: u64, edit: RowEdit) {
        let Some(row) = self.rows.iter_mut().find(|r| r.key == key) else {
            return;
        };
        match edit {
            RowEdit::Exercise(id) => row.exercise_id = id,
            RowEdit::Sets(sets) => row.sets = sets,
            RowEdit::Reps(reps) => row.reps = reps,
            RowEdit::Weight(weight) => row.weight = weight,
        }
    }

    /// Check the draft and build the payload, keeping `id` for updates.
    ///
    /// # Errors
    ///
    /// The first failed rule, in form order: name, days, exercises, picks.
    pub fn validate(&self, id: Option<i64>) -> Result<WorkoutPlan, PlanError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PlanError::MissingName);
        }
        if self.days.is_empty() {
            return Err(PlanError::NoDays);
        }
        if self.rows.is_empty() {
            return Err(PlanError::NoExercises);
        }
        if self.rows.iter().any(|r| r.exercise_id == 0) {
            return Err(PlanError::UnselectedExercise);
        }
        Ok(WorkoutPlan {
            id,
            name: name.to_owned(),
            days: self.days.clone(),
            exercises: self
                .rows
                .iter()
                .map(|r| WorkoutPlanExercise {
                    id: None,
                    exercise_id: r.exercise_id,
                    sets: r.sets,
                    reps: r.reps.clone(),
                    weight: r.weight.clone(),
                })
                .collect(),
        })
    }
}

/// Parse the sets input; blanks and junk become 1, the input's minimum.
pub fn parse_sets(raw: &str) -> u32 {
    raw.trim().parse::<u32>().ok().filter(|n| *n >= 1).unwrap_or(1)
}

/// Parse an id `<select>` value; unparsable means "none chosen" (0).
pub fn parse_id(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}
