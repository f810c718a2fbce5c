//! Record a training session against a workout plan.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plans and the exercise catalog load on mount. Picking a plan seeds a
//! `LogDraft`; the set editor then mutates that draft through the
//! `util::set_list` operations. Rows are keyed by position and read their
//! values from the draft, so reordering or removing sets never rebuilds the
//! inputs the user is typing in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::browser_api;
use crate::net::types::{Exercise, WorkoutLogSet, WorkoutPlan};
use crate::net::{exercises, workout_logs, workout_plans};
use crate::state::session::use_session;
use crate::state::toast::{notify_error, notify_failure, notify_success, use_toasts};
use crate::util::auth::install_unauth_redirect;
use crate::util::log_draft::{LogDraft, today_iso};
use crate::util::plan_form::parse_id;
use crate::util::request_guard::RequestGuard;
use crate::util::set_list::{self, Direction, SetField, SetListError};

#[component]
pub fn LogWorkoutPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());
    let guard = RequestGuard::install();

    let plans = RwSignal::new(Vec::<WorkoutPlan>::new());
    let plans_loading = RwSignal::new(true);
    let catalog = RwSignal::new(Vec::<Exercise>::new());
    let draft = RwSignal::new(LogDraft::new(today_iso()));
    let busy = RwSignal::new(false);

    guard.spawn(async { workout_plans::list(&browser_api()).await }, move |result| {
        match result {
            Ok(list) => plans.set(list),
            Err(err) => notify_failure(
                toasts,
                session,
                "Erro ao carregar fichas de treino",
                "Não foi possível carregar a lista de fichas de treino.",
                &err,
            ),
        }
        plans_loading.set(false);
    });
    guard.spawn(async { exercises::list(&browser_api()).await }, move |result| match result {
        Ok(list) => catalog.set(list),
        Err(err) => leptos::logging::warn!("exercise catalog unavailable, using fallback names: {err}"),
    });

    let on_plan_change = move |ev: leptos::ev::Event| {
        let id = parse_id(&event_target_value(&ev));
        let plan = plans.with_untracked(|all| all.iter().find(|p| p.id == Some(id)).cloned());
        catalog.with_untracked(|catalog| draft.update(|d| d.select_plan(plan.as_ref(), catalog)));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let log = match draft.with_untracked(LogDraft::validate) {
            Ok(log) => log,
            Err(err) => {
                notify_error(toasts, &err.to_string(), err.description());
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        guard.spawn(async move { workout_logs::create(&browser_api(), &log).await }, move |result| {
            busy.set(false);
            match result {
                Ok(_) => {
                    notify_success(toasts, "Treino registrado", "Seu treino foi registrado com sucesso.");
                    navigate("/progress", NavigateOptions::default());
                }
                Err(err) => notify_failure(
                    toasts,
                    session,
                    "Falha ao registrar treino",
                    "Houve um erro ao registrar seu treino. Por favor, tente novamente.",
                    &err,
                ),
            }
        });
    };

    let back = use_navigate();

    view! {
        <div class="page page--narrow">
            <h1>"Registrar Treino"</h1>
            <form class="form" on:submit=on_submit>
                <section class="card">
                    <h2 class="card__title">"Detalhes do Treino"</h2>
                    <p class="card__description">"Selecione sua ficha de treino e insira os detalhes."</p>
                    <label class="form__label">
                        "Ficha de Treino"
                        <select
                            class="form__input"
                            disabled=move || plans_loading.get()
                            on:change=on_plan_change
                        >
                            <option value="" selected=move || draft.with(|d| d.plan_id.is_none())>
                                {move || {
                                    if plans_loading.get() { "Carregando..." } else { "Selecione uma ficha de treino" }
                                }}
                            </option>
                            {move || {
                                let selected = draft.with(|d| d.plan_id);
                                plans
                                    .get()
                                    .into_iter()
                                    .filter_map(|plan| {
                                        let id = plan.id?;
                                        Some(view! {
                                            <option value=id.to_string() selected=selected == Some(id)>
                                                {plan.name}
                                            </option>
                                        })
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <label class="form__label">
                        "Data"
                        <input
                            class="form__input"
                            type="date"
                            required
                            prop:value=move || draft.with(|d| d.date.clone())
                            on:input=move |ev| {
                                let date = event_target_value(&ev);
                                draft.update(|d| d.date = date);
                            }
                        />
                    </label>
                    <label class="form__label">
                        "Observações"
                        <textarea
                            class="form__input form__input--tall"
                            placeholder="Como foi seu treino? Algum recorde pessoal ou desafios?"
                            prop:value=move || draft.with(|d| d.notes.clone())
                            on:input=move |ev| {
                                let notes = event_target_value(&ev);
                                draft.update(|d| d.notes = notes);
                            }
                        ></textarea>
                    </label>
                </section>

                <Show when=move || draft.with(|d| d.plan_id.is_some())>
                    <section class="card">
                        <h2 class="card__title">"Exercícios"</h2>
                        <p class="card__description">
                            "Registre suas séries, repetições e pesos para cada exercício."
                        </p>
                        <For
                            each=move || 0..draft.with(|d| d.exercises.len())
                            key=|index| *index
                            children=move |exercise_index| {
                                view! { <ExerciseSets draft=draft exercise_index=exercise_index /> }
                            }
                        />
                    </section>
                </Show>

                <div class="form__actions">
                    <button
                        type="button"
                        class="btn"
                        on:click=move |_| back("/", NavigateOptions::default())
                    >
                        "Cancelar"
                    </button>
                    <button
                        type="submit"
                        class="btn btn--primary"
                        disabled=move || busy.get() || plans_loading.get()
                    >
                        {move || if busy.get() { "Salvando..." } else { "Registrar Treino" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Set editor for one exercise of the draft.
#[component]
fn ExerciseSets(draft: RwSignal<LogDraft>, exercise_index: usize) -> impl IntoView {
    let toasts = use_toasts();

    let name = move || draft.with(|d| d.exercises.get(exercise_index).map(|e| e.name.clone()).unwrap_or_default());
    let set_count = move || draft.with(|d| d.exercises.get(exercise_index).map_or(0, |e| e.sets.len()));
    let edit = move |apply: &dyn Fn(&mut Vec<WorkoutLogSet>)| {
        draft.update(|d| {
            if let Some(sets) = d.sets_mut(exercise_index) {
                apply(sets);
            }
        });
    };

    let add = move |_| edit(&|sets| set_list::add_set(sets));

    view! {
        <div class="log-exercise">
            <div class="log-exercise__name">{name}</div>
            <For
                each=move || 0..set_count()
                key=|index| *index
                children=move |set_index| {
                    let read = move |field: fn(&WorkoutLogSet) -> String| {
                        move || {
                            draft.with(|d| {
                                d.exercises
                                    .get(exercise_index)
                                    .and_then(|e| e.sets.get(set_index))
                                    .map(field)
                                    .unwrap_or_default()
                            })
                        }
                    };
                    let completed = move || {
                        draft.with(|d| {
                            d.exercises
                                .get(exercise_index)
                                .and_then(|e| e.sets.get(set_index))
                                .is_some_and(|s| s.completed)
                        })
                    };
                    let remove = move |_| {
                        let mut outcome = None;
                        draft.update(|d| {
                            if let Some(sets) = d.sets_mut(exercise_index) {
                                outcome = Some(set_list::remove_set(sets, set_index));
                            }
                        });
                        if let Some(Err(SetListError::LastSet)) = outcome {
                            notify_error(
                                toasts,
                                "Não é possível remover série",
                                "Cada exercício deve ter pelo menos uma série.",
                            );
                        }
                    };
                    view! {
                        <div class="set-row" class:set-row--completed=completed>
                            <span class="set-row__index">{format!("#{}", set_index + 1)}</span>
                            <label class="form__label form__label--compact">
                                "Repetições"
                                <input
                                    class="form__input"
                                    prop:value=read(|s| s.reps.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        edit(&|sets| set_list::update_set(sets, set_index, SetField::Reps, &value));
                                    }
                                />
                            </label>
                            <label class="form__label form__label--compact">
                                "Peso"
                                <input
                                    class="form__input"
                                    prop:value=read(|s| s.weight.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        edit(&|sets| set_list::update_set(sets, set_index, SetField::Weight, &value));
                                    }
                                />
                            </label>
                            <div class="set-row__actions">
                                <button
                                    type="button"
                                    class="btn btn--ghost"
                                    class:btn--success=completed
                                    title="Completar"
                                    on:click=move |_| edit(&|sets| set_list::toggle_completion(sets, set_index))
                                >
                                    "✓"
                                </button>
                                <button
                                    type="button"
                                    class="btn btn--ghost"
                                    title="Mover para cima"
                                    disabled=move || set_index == 0
                                    on:click=move |_| {
                                        edit(&|sets| {
                                            set_list::move_set(sets, set_index, Direction::Up);
                                        });
                                    }
                                >
                                    "▲"
                                </button>
                                <button
                                    type="button"
                                    class="btn btn--ghost"
                                    title="Mover para baixo"
                                    disabled=move || set_index + 1 >= set_count()
                                    on:click=move |_| {
                                        edit(&|sets| {
                                            set_list::move_set(sets, set_index, Direction::Down);
                                        });
                                    }
                                >
                                    "▼"
                                </button>
                                <button type="button" class="btn btn--ghost" title="Remover" on:click=remove>
                                    "🗑"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
            <button type="button" class="btn btn--block" on:click=add>
                "+ Adicionar Série"
            </button>
        </div>
    }
}
