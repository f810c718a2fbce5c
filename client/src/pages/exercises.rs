//! Exercise library: searchable, filterable table with edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! The full list is fetched once on mount. Search and category filtering run
//! over that cached list on every keystroke and never re-fetch; a delete
//! drops the row locally after the backend confirms.

#[cfg(test)]
#[path = "exercises_test.rs"]
mod exercises_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDeleteDialog;
use crate::net::api::browser_api;
use crate::net::exercises;
use crate::net::types::Exercise;
use crate::state::session::use_session;
use crate::state::toast::{notify_failure, notify_success, use_toasts};
use crate::util::auth::install_unauth_redirect;
use crate::util::catalog::{ALL_CATEGORIES, ALL_CATEGORIES_LABEL, CATEGORIES};
use crate::util::exercise_filter::filter_exercises;
use crate::util::request_guard::RequestGuard;

/// Remove the deleted row from the cached list.
pub fn without_exercise(items: &mut Vec<Exercise>, id: i64) {
    items.retain(|e| e.id != Some(id));
}

#[component]
pub fn ExercisesPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    install_unauth_redirect(session, use_navigate());
    let guard = RequestGuard::install();

    let items = RwSignal::new(Vec::<Exercise>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(ALL_CATEGORIES.to_owned());
    let pending_delete = RwSignal::new(None::<Exercise>);

    guard.spawn(async { exercises::list(&browser_api()).await }, move |result| {
        match result {
            Ok(list) => items.set(list),
            Err(err) => notify_failure(
                toasts,
                session,
                "Erro ao carregar exercícios",
                "Não foi possível carregar a lista de exercícios.",
                &err,
            ),
        }
        loading.set(false);
    });

    let visible = Memo::new(move |_| items.with(|all| filter_exercises(all, &search.get(), &category.get())));

    let confirm_delete = Callback::new(move |()| {
        let Some(exercise) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let Some(id) = exercise.id else {
            return;
        };
        guard.spawn(async move { exercises::delete(&browser_api(), id).await }, move |result| match result {
            Ok(()) => {
                items.update(|list| without_exercise(list, id));
                notify_success(toasts, "Exercício excluído", "O exercício foi excluído com sucesso.");
            }
            Err(err) => notify_failure(
                toasts,
                session,
                "Erro ao excluir exercício",
                "Não foi possível excluir o exercício.",
                &err,
            ),
        });
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1>"Exercícios"</h1>
                    <p class="page__subtitle">
                        "Gerencie sua biblioteca de exercícios. Adicione, edite ou remova exercícios."
                    </p>
                </div>
                <a class="btn btn--primary" href="/exercises/new">
                    "+ Adicionar Exercício"
                </a>
            </div>

            <section class="card">
                <h2 class="card__title">"Biblioteca de Exercícios"</h2>
                <p class="card__description">"Navegue e pesquise por todos os exercícios disponíveis."</p>
                <div class="filters">
                    <input
                        class="form__input filters__search"
                        type="search"
                        placeholder="Pesquisar exercícios..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select
                        class="form__input filters__category"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value=ALL_CATEGORIES>{ALL_CATEGORIES_LABEL}</option>
                        {CATEGORIES
                            .into_iter()
                            .map(|c| view! { <option value=c>{c}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <table class="table">
                    <thead>
                        <tr>
                            <th>"Nome"</th>
                            <th>"Categoria"</th>
                            <th>"Equipamento"</th>
                            <th class="table__actions">"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <tr>
                                        <td colspan="4" class="table__empty">"Carregando exercícios..."</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let rows = visible.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="4" class="table__empty">
                                            "Nenhum exercício encontrado. Tente ajustar sua pesquisa ou adicione um novo exercício."
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            rows.into_iter()
                                .map(|exercise| {
                                    let edit_href = exercise
                                        .id
                                        .map(|id| format!("/exercises/{id}/edit"))
                                        .unwrap_or_default();
                                    let target = exercise.clone();
                                    view! {
                                        <tr>
                                            <td class="table__strong">{exercise.name}</td>
                                            <td>
                                                <span class="badge">{exercise.category}</span>
                                            </td>
                                            <td>{exercise.equipment}</td>
                                            <td class="table__actions">
                                                <a class="btn btn--ghost" href=edit_href title="Editar">
                                                    "✎"
                                                </a>
                                                <button
                                                    class="btn btn--ghost"
                                                    title="Excluir"
                                                    on:click=move |_| pending_delete.set(Some(target.clone()))
                                                >
                                                    "🗑"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </section>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDeleteDialog
                    title="Excluir Exercício"
                    message=Signal::derive(move || {
                        pending_delete
                            .get()
                            .map(|e| format!("Tem certeza que deseja excluir \"{}\"?", e.name))
                            .unwrap_or_default()
                    })
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                    on_confirm=confirm_delete
                />
            </Show>
        </div>
    }
}
