//! Edit an existing exercise (`/exercises/:id/edit`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::exercise_form::ExerciseForm;
use crate::net::api::browser_api;
use crate::net::exercises;
use crate::net::types::Exercise;
use crate::state::session::use_session;
use crate::state::toast::{notify_failure, notify_success, use_toasts};
use crate::util::auth::install_unauth_redirect;
use crate::util::nav::parse_id_param;
use crate::util::request_guard::RequestGuard;

#[component]
pub fn ExerciseEditPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());
    let guard = RequestGuard::install();
    let params = use_params_map();
    let id = params.with_untracked(|p| parse_id_param(p.get("id").as_deref()));

    let exercise = RwSignal::new(None::<Exercise>);
    let loading = RwSignal::new(id.is_some());
    let busy = RwSignal::new(false);

    if let Some(id) = id {
        guard.spawn(async move { exercises::get_by_id(&browser_api(), id).await }, move |result| {
            match result {
                Ok(found) => exercise.set(Some(found)),
                Err(err) => notify_failure(
                    toasts,
                    session,
                    "Erro ao carregar exercício",
                    "Não foi possível carregar o exercício.",
                    &err,
                ),
            }
            loading.set(false);
        });
    }

    let back = navigate.clone();
    let on_cancel = Callback::new(move |()| back("/exercises", NavigateOptions::default()));

    let on_submit = Callback::new(move |updated: Exercise| {
        let Some(id) = updated.id else {
            return;
        };
        busy.set(true);
        let navigate = navigate.clone();
        let name = updated.name.clone();
        guard.spawn(async move { exercises::update(&browser_api(), id, &updated).await }, move |result| {
            busy.set(false);
            match result {
                Ok(_) => {
                    notify_success(toasts, "Exercício atualizado", &format!("{name} foi atualizado com sucesso."));
                    navigate("/exercises", NavigateOptions::default());
                }
                Err(err) => notify_failure(
                    toasts,
                    session,
                    "Falha ao atualizar exercício",
                    "Houve um erro ao atualizar o exercício. Por favor, tente novamente.",
                    &err,
                ),
            }
        });
    });

    view! {
        <div class="page page--narrow">
            <h1>"Editar Exercício"</h1>
            <section class="card">
                {move || {
                    if loading.get() {
                        view! { <p class="card__empty">"Carregando exercício..."</p> }.into_any()
                    } else if let Some(found) = exercise.get() {
                        view! { <ExerciseForm initial=found on_submit=on_submit on_cancel=on_cancel busy=busy /> }.into_any()
                    } else {
                        view! {
                            <p class="card__empty">"Exercício não encontrado."</p>
                            <a class="btn" href="/exercises">"Voltar"</a>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}
