//! Workout plan list with edit and delete.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDeleteDialog;
use crate::net::api::browser_api;
use crate::net::types::WorkoutPlan;
use crate::net::workout_plans;
use crate::state::session::use_session;
use crate::state::toast::{notify_failure, notify_success, use_toasts};
use crate::util::auth::install_unauth_redirect;
use crate::util::catalog::day_abbreviation;
use crate::util::request_guard::RequestGuard;

#[component]
pub fn WorkoutPlansPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    install_unauth_redirect(session, use_navigate());
    let guard = RequestGuard::install();

    let plans = RwSignal::new(Vec::<WorkoutPlan>::new());
    let loading = RwSignal::new(true);
    let pending_delete = RwSignal::new(None::<WorkoutPlan>);

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
        loading.set(false);
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked().and_then(|p| p.id) else {
            pending_delete.set(None);
            return;
        };
        pending_delete.set(None);
        guard.spawn(async move { workout_plans::delete(&browser_api(), id).await }, move |result| match result {
            Ok(()) => {
                plans.update(|list| list.retain(|p| p.id != Some(id)));
                notify_success(toasts, "Ficha de treino excluída", "A ficha de treino foi excluída com sucesso.");
            }
            Err(err) => notify_failure(
                toasts,
                session,
                "Erro ao excluir ficha de treino",
                "Não foi possível excluir a ficha de treino.",
                &err,
            ),
        });
    });

    let table = move || {
        let rows = plans
            .get()
            .into_iter()
            .map(|plan| {
                let edit_href = plan.id.map(|id| format!("/workout-plans/{id}/edit")).unwrap_or_default();
                let exercise_count = plan.exercises.len();
                let target = plan.clone();
                view! {
                    <tr>
                        <td class="table__strong">
                            <a href=edit_href.clone()>{plan.name}</a>
                        </td>
                        <td>
                            {plan
                                .days
                                .iter()
                                .map(|day| view! { <span class="badge">{day_abbreviation(day)}</span> })
                                .collect::<Vec<_>>()}
                        </td>
                        <td>{exercise_count}</td>
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
            .collect::<Vec<_>>();
        view! {
            <table class="table">
                <thead>
                    <tr>
                        <th>"Nome"</th>
                        <th>"Dias de Treino"</th>
                        <th>"Exercícios"</th>
                        <th class="table__actions">"Ações"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1>"Fichas de Treino"</h1>
                    <p class="page__subtitle">"Crie e gerencie suas rotinas de treino."</p>
                </div>
                <a class="btn btn--primary" href="/workout-plans/new">
                    "+ Criar Nova Ficha"
                </a>
            </div>

            <section class="card">
                <h2 class="card__title">"Suas Fichas de Treino"</h2>
                <p class="card__description">"Visualize e gerencie todas as suas fichas de treino."</p>
                {move || {
                    if loading.get() {
                        view! { <p class="card__empty">"Carregando fichas de treino..."</p> }.into_any()
                    } else if plans.with(Vec::is_empty) {
                        view! {
                            <div class="card__empty">
                                <h3>"Nenhuma ficha de treino ainda"</h3>
                                <p>"Crie sua primeira ficha de treino para começar."</p>
                                <a class="btn btn--primary" href="/workout-plans/new">
                                    "Criar Ficha de Treino"
                                </a>
                            </div>
                        }
                            .into_any()
                    } else {
                        table().into_any()
                    }
                }}
            </section>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDeleteDialog
                    title="Excluir Ficha de Treino"
                    message=Signal::derive(move || {
                        pending_delete
                            .get()
                            .map(|p| format!("Tem certeza que deseja excluir \"{}\"?", p.name))
                            .unwrap_or_default()
                    })
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                    on_confirm=confirm_delete
                />
            </Show>
        </div>
    }
}
