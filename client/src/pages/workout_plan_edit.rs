//! Edit a workout plan (`/workout-plans/:id/edit`).
//!
//! The plan and the exercise catalog load side by side; the form mounts
//! once the plan is in, seeded from it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::workout_plan_form::WorkoutPlanForm;
use crate::net::api::browser_api;
use crate::net::types::{Exercise, WorkoutPlan};
use crate::net::{exercises, workout_plans};
use crate::state::session::use_session;
use crate::state::toast::{notify_failure, notify_success, use_toasts};
use crate::util::auth::install_unauth_redirect;
use crate::util::nav::parse_id_param;
use crate::util::request_guard::RequestGuard;

#[component]
pub fn WorkoutPlanEditPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());
    let guard = RequestGuard::install();
    let id = use_params_map().with_untracked(|p| parse_id_param(p.get("id").as_deref()));

    let plan = RwSignal::new(None::<WorkoutPlan>);
    let plan_loading = RwSignal::new(id.is_some());
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

    if let Some(id) = id {
        guard.spawn(async move { workout_plans::get_by_id(&browser_api(), id).await }, move |result| {
            match result {
                Ok(found) => plan.set(Some(found)),
                Err(err) => notify_failure(
                    toasts,
                    session,
                    "Erro ao carregar ficha de treino",
                    "Não foi possível carregar a ficha de treino.",
                    &err,
                ),
            }
            plan_loading.set(false);
        });
    }

    let back = navigate.clone();
    let on_cancel = Callback::new(move |()| back("/workout-plans", NavigateOptions::default()));

    let on_submit = Callback::new(move |updated: WorkoutPlan| {
        let Some(id) = updated.id else {
            return;
        };
        busy.set(true);
        let navigate = navigate.clone();
        let name = updated.name.clone();
        guard.spawn(async move { workout_plans::update(&browser_api(), id, &updated).await }, move |result| {
            busy.set(false);
            match result {
                Ok(_) => {
                    notify_success(toasts, "Ficha de treino atualizada", &format!("{name} foi atualizada com sucesso."));
                    navigate("/workout-plans", NavigateOptions::default());
                }
                Err(err) => notify_failure(
                    toasts,
                    session,
                    "Falha ao atualizar ficha de treino",
                    "Houve um erro ao atualizar a ficha de treino. Por favor, tente novamente.",
                    &err,
                ),
            }
        });
    });

    view! {
        <div class="page page--narrow">
            <h1>"Editar Ficha de Treino"</h1>
            {move || {
                if plan_loading.get() {
                    view! { <p class="card__empty">"Carregando ficha de treino..."</p> }.into_any()
                } else if let Some(found) = plan.get() {
                    view! {
                        <WorkoutPlanForm
                            initial=found
                            catalog=catalog
                            catalog_loading=catalog_loading
                            on_submit=on_submit
                            on_cancel=on_cancel
                            busy=busy
                        />
                    }
                        .into_any()
                } else {
                    view! {
                        <p class="card__empty">"Ficha de treino não encontrada."</p>
                        <a class="btn" href="/workout-plans">"Voltar"</a>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
