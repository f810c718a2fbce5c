//! Add an exercise to the library.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::exercise_form::ExerciseForm;
use crate::net::api::browser_api;
use crate::net::exercises;
use crate::net::types::Exercise;
use crate::state::session::use_session;
use crate::state::toast::{notify_failure, notify_success, use_toasts};
use crate::util::auth::install_unauth_redirect;
use crate::util::request_guard::RequestGuard;

#[component]
pub fn ExerciseNewPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());
    let guard = RequestGuard::install();
    let busy = RwSignal::new(false);

    let back = navigate.clone();
    let on_cancel = Callback::new(move |()| back("/exercises", NavigateOptions::default()));

    let on_submit = Callback::new(move |exercise: Exercise| {
        busy.set(true);
        let navigate = navigate.clone();
        let name = exercise.name.clone();
        guard.spawn(async move { exercises::create(&browser_api(), &exercise).await }, move |result| {
            busy.set(false);
            match result {
                Ok(_) => {
                    notify_success(
                        toasts,
                        "Exercício criado",
                        &format!("{name} foi adicionado à sua biblioteca de exercícios."),
                    );
                    navigate("/exercises", NavigateOptions::default());
                }
                Err(err) => notify_failure(
                    toasts,
                    session,
                    "Falha ao criar exercício",
                    "Houve um erro ao criar o exercício. Por favor, tente novamente.",
                    &err,
                ),
            }
        });
    });

    view! {
        <div class="page page--narrow">
            <h1>"Adicionar Novo Exercício"</h1>
            <section class="card">
                <h2 class="card__title">"Detalhes do Exercício"</h2>
                <p class="card__description">
                    "Digite os detalhes do novo exercício que você deseja adicionar à sua biblioteca."
                </p>
                <ExerciseForm on_submit=on_submit on_cancel=on_cancel busy=busy />
            </section>
        </div>
    }
}
