//! Shared create/edit form for a single exercise.
//!
//! DESIGN
//! ======
//! The form owns its field signals and hands a finished `Exercise` to the
//! page through `on_submit`; the page does the request, the toasts, and the
//! navigation.

#[cfg(test)]
#[path = "exercise_form_test.rs"]
mod exercise_form_test;

use leptos::prelude::*;

use crate::net::types::Exercise;
use crate::util::catalog::{CATEGORIES, EQUIPMENT};

/// Build the payload from raw field values, keeping `id` for updates.
///
/// # Errors
///
/// Returns the message to show when a field is blank.
pub fn exercise_from_fields(
    id: Option<i64>,
    name: &str,
    category: &str,
    equipment: &str,
) -> Result<Exercise, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Informe o nome do exercício.");
    }
    if category.is_empty() {
        return Err("Selecione uma categoria.");
    }
    if equipment.is_empty() {
        return Err("Selecione o tipo de equipamento.");
    }
    Ok(Exercise {
        id,
        name: name.to_owned(),
        category: category.to_owned(),
        equipment: equipment.to_owned(),
    })
}

pub fn submit_label(busy: bool, editing: bool) -> &'static str {
    match (busy, editing) {
        (true, _) => "Salvando...",
        (false, true) => "Atualizar Exercício",
        (false, false) => "Criar Exercício",
    }
}

#[component]
pub fn ExerciseForm(
    #[prop(optional)] initial: Option<Exercise>,
    on_submit: Callback<Exercise>,
    on_cancel: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let id = initial.as_ref().and_then(|e| e.id);
    let initial = initial.unwrap_or_default();
    let name = RwSignal::new(initial.name);
    let category = RwSignal::new(initial.category);
    let equipment = RwSignal::new(initial.equipment);
    let error = RwSignal::new(None::<&'static str>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match exercise_from_fields(id, &name.get_untracked(), &category.get_untracked(), &equipment.get_untracked()) {
            Ok(exercise) => {
                error.set(None);
                on_submit.run(exercise);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <form class="form" on:submit=submit>
            <label class="form__label">
                "Nome do Exercício"
                <input
                    class="form__input"
                    type="text"
                    placeholder="ex., Supino Reto"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>

            <label class="form__label">
                "Categoria"
                <select
                    class="form__input"
                    required
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="" disabled>"Selecione uma categoria"</option>
                    {CATEGORIES
                        .into_iter()
                        .map(|c| view! { <option value=c selected=move || category.get() == c>{c}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label class="form__label">
                "Equipamento"
                <select
                    class="form__input"
                    required
                    prop:value=move || equipment.get()
                    on:change=move |ev| equipment.set(event_target_value(&ev))
                >
                    <option value="" disabled>"Selecione o tipo de equipamento"</option>
                    {EQUIPMENT
                        .into_iter()
                        .map(|e| view! { <option value=e selected=move || equipment.get() == e>{e}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <Show when=move || error.get().is_some()>
                <p class="form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <div class="form__actions">
                <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancelar"
                </button>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || submit_label(busy.get(), id.is_some())}
                </button>
            </div>
        </form>
    }
}
