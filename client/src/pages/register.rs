//! Account creation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::browser_api;
use crate::net::auth::{register, validate_register};
use crate::net::types::WeightUnit;
use crate::state::session::{sync_session, use_session};
use crate::state::toast::{notify_error, notify_failure, notify_success, use_toasts};
use crate::util::request_guard::RequestGuard;

const FAILURE_TITLE: &str = "Falha no cadastro";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let guard = RequestGuard::install();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let weight_unit = RwSignal::new(WeightUnit::Kg);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_register(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
            weight_unit.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                notify_error(toasts, FAILURE_TITLE, message);
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        guard.spawn(async move { register(&browser_api(), &request).await }, move |result| {
            busy.set(false);
            match result {
                Ok(_) => {
                    sync_session(session);
                    notify_success(toasts, "Conta criada", "Seu cadastro foi realizado com sucesso.");
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => notify_failure(
                    toasts,
                    session,
                    FAILURE_TITLE,
                    "Não foi possível criar sua conta. Por favor, tente novamente.",
                    &err,
                ),
            }
        });
    };

    let text_field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form__label">
                {label}
                <input
                    class="form__input"
                    type=kind
                    required
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Cadastrar"</h1>
                <p class="auth-card__subtitle">"Crie sua conta para começar a registrar seus treinos."</p>
                <form class="form" on:submit=on_submit>
                    {text_field("Nome", "text", name)}
                    {text_field("Email", "email", email)}
                    {text_field("Senha", "password", password)}
                    {text_field("Confirmar Senha", "password", confirm)}
                    <label class="form__label">
                        "Unidade de Peso"
                        <select
                            class="form__input"
                            prop:value=move || weight_unit.get().as_str()
                            on:change=move |ev| weight_unit.set(WeightUnit::from_form_value(&event_target_value(&ev)))
                        >
                            <option value="kg">"Quilogramas (kg)"</option>
                            <option value="lbs">"Libras (lbs)"</option>
                        </select>
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Cadastrando..." } else { "Cadastrar" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Já tem uma conta? "
                    <a href="/login">"Entrar"</a>
                </p>
            </div>
        </div>
    }
}
