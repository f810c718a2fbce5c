//! Create/edit form for a workout plan: name, training days, and a list of
//! exercise rows with set, rep, and weight targets.
//!
//! DESIGN
//! ======
//! All edits go through a `PlanDraft` held in one signal. Rows render under
//! `For` keyed by the draft's local row key, so typing in one row never
//! rebuilds the others. Validation failures surface as destructive toasts
//! and stop the submit; the page only ever sees a valid `WorkoutPlan`.

#[cfg(test)]
#[path = "workout_plan_form_test.rs"]
mod workout_plan_form_test;

use leptos::prelude::*;

use crate::net::types::{Exercise, WorkoutPlan};
use crate::state::toast::{notify_error, use_toasts};
use crate::util::catalog::WEEKDAYS;
use crate::util::plan_form::{PlanDraft, PlanExerciseRow, RowEdit, parse_id, parse_sets};

pub fn submit_label(busy: bool, editing: bool) -> &'static str {
    match (busy, editing) {
        (true, true) => "Salvando...",
        (true, false) => "Criando...",
        (false, true) => "Salvar Alterações",
        (false, false) => "Criar Ficha de Treino",
    }
}

/// Option text for an exercise in the row picker.
pub fn exercise_option_label(exercise: &Exercise) -> String {
    if exercise.equipment.is_empty() {
        exercise.name.clone()
    } else {
        format!("{} ({})", exercise.name, exercise.equipment)
    }
}

#[component]
pub fn WorkoutPlanForm(
    #[prop(optional)] initial: Option<WorkoutPlan>,
    #[prop(into)] catalog: Signal<Vec<Exercise>>,
    #[prop(into)] catalog_loading: Signal<bool>,
    on_submit: Callback<WorkoutPlan>,
    on_cancel: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let toasts = use_toasts();
    let id = initial.as_ref().and_then(|p| p.id);
    let draft = RwSignal::new(initial.as_ref().map(PlanDraft::from_plan).unwrap_or_default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match draft.with_untracked(|d| d.validate(id)) {
            Ok(plan) => on_submit.run(plan),
            Err(err) => notify_error(toasts, &err.to_string(), err.description()),
        }
    };

    let add_row = move |_: leptos::ev::MouseEvent| {
        draft.update(|d| {
            d.add_row();
        });
    };

    let day_boxes = WEEKDAYS
        .into_iter()
        .map(|day| {
            view! {
                <label class="form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.has_day(day))
                        on:change=move |_| draft.update(|d| d.toggle_day(day))
                    />
                    {day}
                </label>
            }
        })
        .collect::<Vec<_>>();

    let row_view = move |key: u64| {
        let field = move |read: fn(&PlanExerciseRow) -> String| {
            move || draft.with(|d| d.row(key).map(read).unwrap_or_default())
        };
        view! {
            <div class="plan-row">
                <div class="plan-row__header">
                    <h4>{move || format!("Exercício {}", draft.with(|d| d.position(key).unwrap_or(0)))}</h4>
                    <button
                        type="button"
                        class="btn btn--ghost"
                        on:click=move |_| draft.update(|d| d.remove_row(key))
                        aria-label="Remover"
                    >
                        "✕"
                    </button>
                </div>
                <div class="plan-row__grid">
                    <label class="form__label">
                        "Exercício"
                        <select
                            class="form__input"
                            prop:value=field(|r| r.exercise_id.to_string())
                            on:change=move |ev| {
                                let id = parse_id(&event_target_value(&ev));
                                draft.update(|d| d.update_row(key, RowEdit::Exercise(id)));
                            }
                        >
                            <option value="0">"Selecione um exercício"</option>
                            {move || {
                                let selected = draft.with(|d| d.row(key).map_or(0, |r| r.exercise_id));
                                catalog
                                    .get()
                                    .into_iter()
                                    .filter_map(|ex| {
                                        let ex_id = ex.id?;
                                        Some(view! {
                                            <option value=ex_id.to_string() selected=ex_id == selected>
                                                {exercise_option_label(&ex)}
                                            </option>
                                        })
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <label class="form__label">
                        "Séries"
                        <input
                            class="form__input"
                            type="number"
                            min="1"
                            prop:value=field(|r| r.sets.to_string())
                            on:input=move |ev| {
                                let sets = parse_sets(&event_target_value(&ev));
                                draft.update(|d| d.update_row(key, RowEdit::Sets(sets)));
                            }
                        />
                    </label>
                    <label class="form__label">
                        "Repetições"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="ex., 8-12 ou 10"
                            prop:value=field(|r| r.reps.clone())
                            on:input=move |ev| {
                                let reps = event_target_value(&ev);
                                draft.update(|d| d.update_row(key, RowEdit::Reps(reps)));
                            }
                        />
                    </label>
                    <label class="form__label">
                        "Peso Inicial"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="ex., 50"
                            prop:value=field(|r| r.weight.clone())
                            on:input=move |ev| {
                                let weight = event_target_value(&ev);
                                draft.update(|d| d.update_row(key, RowEdit::Weight(weight)));
                            }
                        />
                    </label>
                </div>
            </div>
        }
    };

    view! {
        <form class="form" on:submit=submit>
            <section class="card">
                <h2 class="card__title">"Informações Básicas"</h2>
                <p class="card__description">"Digite os detalhes básicos da sua ficha de treino."</p>
                <label class="form__label">
                    "Nome da Ficha de Treino"
                    <input
                        class="form__input"
                        type="text"
                        placeholder="ex., Treino Completo"
                        required
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| {
                            let name = event_target_value(&ev);
                            draft.update(|d| d.name = name);
                        }
                    />
                </label>
                <fieldset class="form__days">
                    <legend>"Dias de Treino"</legend>
                    {day_boxes}
                </fieldset>
            </section>

            <section class="card">
                <h2 class="card__title">"Exercícios"</h2>
                <p class="card__description">"Adicione exercícios à sua ficha de treino."</p>
                <Show
                    when=move || !catalog_loading.get()
                    fallback=|| view! { <p class="card__empty">"Carregando exercícios..."</p> }
                >
                    <Show
                        when=move || draft.with(|d| !d.rows.is_empty())
                        fallback=move || {
                            view! {
                                <div class="card__empty">
                                    <p>"Nenhum exercício adicionado ainda."</p>
                                    <button type="button" class="btn btn--primary" on:click=add_row>
                                        "+ Adicionar Exercício"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <For
                            each=move || draft.with(|d| d.rows.iter().map(|r| r.key).collect::<Vec<_>>())
                            key=|key| *key
                            children=row_view
                        />
                        <button type="button" class="btn btn--block" on:click=add_row>
                            "+ Adicionar Outro Exercício"
                        </button>
                    </Show>
                </Show>
            </section>

            <div class="form__actions">
                <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancelar"
                </button>
                <button
                    type="submit"
                    class="btn btn--primary"
                    disabled=move || busy.get() || catalog_loading.get()
                >
                    {move || submit_label(busy.get(), id.is_some())}
                </button>
            </div>
        </form>
    }
}
