//! Email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::browser_api;
use crate::net::auth::{login, validate_login};
use crate::state::session::{sync_session, use_session};
use crate::state::toast::{notify_error, notify_failure, notify_success, use_toasts};
use crate::util::request_guard::RequestGuard;

const FAILURE_TITLE: &str = "Falha no login";

pub fn welcome_message(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() { "Bem-vindo de volta!".to_owned() } else { format!("Bem-vindo de volta, {name}!") }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let guard = RequestGuard::install();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                notify_error(toasts, FAILURE_TITLE, message);
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        guard.spawn(async move { login(&browser_api(), &request).await }, move |result| {
            busy.set(false);
            match result {
                Ok(response) => {
                    sync_session(session);
                    notify_success(toasts, "Login realizado", &welcome_message(&response.user.name));
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => notify_failure(toasts, session, FAILURE_TITLE, "Email ou senha inválidos.", &err),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Entrar"</h1>
                <p class="auth-card__subtitle">"Acesse sua conta para acompanhar seus treinos."</p>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            placeholder="voce@exemplo.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Senha"
                        <input
                            class="form__input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Não tem uma conta? "
                    <a href="/register">"Cadastre-se"</a>
                </p>
            </div>
        </div>
    }
}
