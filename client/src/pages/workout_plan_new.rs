//! Create a workout plan.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::workout_plan_form::WorkoutPlanForm;
use crate::net::api::browser_api;
use crate::net::types::{Exercise, WorkoutPlan};
use crate::net::{exercises, workout_plans};
use crate::state::session::use_session;
use crate::state::toast::{notify_failure, notify_success, use_toasts};
use crate::util::auth::install_unauth_redirect;
use crate::util::request_guard::RequestGuard;

#[component]
pub fn WorkoutPlanNewPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());
    let guard = RequestGuard::install();

    let catalog = RwSignal::new(Vec::<Exercise>::new());
    let catalog_loading = RwSignal::new(true);
    let busy = RwSignal::new(false);

    guard.spawn(async { exercises::list(&browser_api()).await }, move |result| {
        match result {
            Ok(list) => catalog.set(list),
            Err(err) => notify_failure(
                toasts,
                session,
                "Erro ao carregar exercícios",
                "Não foi possível carregar a lista de exercícios.",
                &err,
            ),
        }
        catalog_loading.set(false);
    });

    let back = navigate.clone();
    let on_cancel = Callback::new(move |()| back("/workout-plans", NavigateOptions::default()));

    let on_submit = Callback::new(move |plan: WorkoutPlan| {
        busy.set(true);
        let navigate = navigate.clone();
        let name = plan.name.clone();
        guard.spawn(async move { workout_plans::create(&browser_api(), &plan).await }, move |result| {
            busy.set(false);
            match result {
                Ok(_) => {
                    notify_success(toasts, "Ficha de treino criada", &format!("{name} foi criada com sucesso."));
                    navigate("/workout-plans", NavigateOptions::default());
                }
                Err(err) => notify_failure(
                    toasts,
                    session,
                    "Falha ao criar ficha de treino",
                    "Houve um erro ao criar a ficha de treino. Por favor, tente novamente.",
                    &err,
                ),
            }
        });
    });

    view! {
        <div class="page page--narrow">
            <h1>"Criar Nova Ficha de Treino"</h1>
            <WorkoutPlanForm
                catalog=catalog
                catalog_loading=catalog_loading
                on_submit=on_submit
                on_cancel=on_cancel
                busy=busy
            />
        </div>
    }
}
