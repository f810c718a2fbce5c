//! Account settings: profile details, password change, and preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The profile tab starts from the cached session user and only asks the
//! backend when nothing is cached. A successful profile save rewrites that
//! cache (see `net::users::update_profile`), so the header picks up the new
//! name through `sync_session`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::browser_api;
use crate::net::types::{Preferences, ProfileUpdate, WeightUnit};
use crate::net::users;
use crate::state::session::{sync_session, use_session};
use crate::state::toast::{notify_error, notify_failure, notify_success, use_toasts};
use crate::util::auth::install_unauth_redirect;
use crate::util::request_guard::RequestGuard;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileTab {
    Profile,
    Password,
    Preferences,
}

impl ProfileTab {
    const ALL: [Self; 3] = [Self::Profile, Self::Password, Self::Preferences];

    fn label(self) -> &'static str {
        match self {
            Self::Profile => "Perfil",
            Self::Password => "Senha",
            Self::Preferences => "Preferências",
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    install_unauth_redirect(session, use_navigate());
    let guard = RequestGuard::install();

    let tab = RwSignal::new(ProfileTab::Profile);
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let weight_unit = RwSignal::new(WeightUnit::Kg);
    let notifications = RwSignal::new(Preferences::default().enable_notifications);
    let auto_backup = RwSignal::new(Preferences::default().auto_backup);

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    guard.spawn(async { users::load_profile(&browser_api()).await }, move |result| {
        match result {
            Ok(user) => {
                name.set(user.name);
                email.set(user.email);
                weight_unit.set(user.weight_unit);
            }
            Err(err) => notify_failure(
                toasts,
                session,
                "Erro ao carregar perfil",
                "Não foi possível carregar os dados do seu perfil.",
                &err,
            ),
        }
        loading.set(false);
    });

    let submit_profile = {
        let guard = guard.clone();
        Callback::new(move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let update = ProfileUpdate {
                name: name.get_untracked(),
                email: email.get_untracked(),
                weight_unit: weight_unit.get_untracked(),
            };
            guard.spawn(async move { users::update_profile(&browser_api(), &update).await }, move |result| {
                busy.set(false);
                match result {
                    Ok(()) => {
                        sync_session(session);
                        notify_success(toasts, "Perfil atualizado", "Seu perfil foi atualizado com sucesso.");
                    }
                    Err(err) => notify_failure(
                        toasts,
                        session,
                        "Falha ao atualizar perfil",
                        "Houve um erro ao atualizar seu perfil. Por favor, tente novamente.",
                        &err,
                    ),
                }
            });
        })
    };

    let submit_password = {
        let guard = guard.clone();
        Callback::new(move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let change = match users::validate_password_change(
                &current_password.get_untracked(),
                &new_password.get_untracked(),
                &confirm_password.get_untracked(),
            ) {
                Ok(change) => change,
                Err(message) => {
                    notify_error(toasts, "Senhas não coincidem", message);
                    return;
                }
            };
            busy.set(true);
            guard.spawn(async move { users::change_password(&browser_api(), &change).await }, move |result| {
                busy.set(false);
                match result {
                    Ok(()) => {
                        current_password.set(String::new());
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                        notify_success(toasts, "Senha atualizada", "Sua senha foi atualizada com sucesso.");
                    }
                    Err(err) => notify_failure(
                        toasts,
                        session,
                        "Falha ao atualizar senha",
                        "Houve um erro ao atualizar sua senha. Por favor, tente novamente.",
                        &err,
                    ),
                }
            });
        })
    };

    let submit_preferences = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let preferences = Preferences {
            weight_unit: weight_unit.get_untracked(),
            enable_notifications: notifications.get_untracked(),
            auto_backup: auto_backup.get_untracked(),
        };
        guard.spawn(
            async move { users::update_preferences(&browser_api(), &preferences).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(()) => notify_success(
                        toasts,
                        "Preferências atualizadas",
                        "Suas preferências foram atualizadas com sucesso.",
                    ),
                    Err(err) => notify_failure(
                        toasts,
                        session,
                        "Falha ao atualizar preferências",
                        "Houve um erro ao atualizar suas preferências. Por favor, tente novamente.",
                        &err,
                    ),
                }
            },
        );
    });

    let tab_bar = move || {
        ProfileTab::ALL
            .into_iter()
            .map(|t| {
                view! {
                    <button
                        class="tabs__trigger"
                        class:tabs__trigger--active=move || tab.get() == t
                        on:click=move |_| tab.set(t)
                    >
                        {t.label()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let password_input = |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form__label">
                {label}
                <input
                    class="form__input"
                    type="password"
                    required
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="page page--narrow">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__loading">"Carregando perfil..."</p> }
            >
                <h1>"Configurações de Perfil"</h1>
                <div class="tabs">{tab_bar}</div>

                <Show when=move || tab.get() == ProfileTab::Profile>
                    <form class="card form" on:submit=move |ev| submit_profile.run(ev)>
                        <h2 class="card__title">"Informações do Perfil"</h2>
                        <p class="card__description">"Atualize suas informações pessoais."</p>
                        <label class="form__label">
                            "Nome"
                            <input
                                class="form__input"
                                required
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__label">
                            "Email"
                            <input
                                class="form__input"
                                type="email"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Salvando..." } else { "Salvar Alterações" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || tab.get() == ProfileTab::Password>
                    <form class="card form" on:submit=move |ev| submit_password.run(ev)>
                        <h2 class="card__title">"Alterar Senha"</h2>
                        <p class="card__description">"Atualize sua senha para manter sua conta segura."</p>
                        {password_input("Senha Atual", current_password)}
                        {password_input("Nova Senha", new_password)}
                        {password_input("Confirmar Nova Senha", confirm_password)}
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Atualizando..." } else { "Atualizar Senha" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || tab.get() == ProfileTab::Preferences>
                    <form class="card form" on:submit=move |ev| submit_preferences.run(ev)>
                        <h2 class="card__title">"Preferências"</h2>
                        <p class="card__description">"Personalize sua experiência no aplicativo."</p>
                        <fieldset class="form__radios">
                            <legend>"Unidade de Peso"</legend>
                            <label class="form__check">
                                <input
                                    type="radio"
                                    name="weight-unit"
                                    prop:checked=move || weight_unit.get() == WeightUnit::Kg
                                    on:change=move |_| weight_unit.set(WeightUnit::Kg)
                                />
                                "Quilogramas (kg)"
                            </label>
                            <label class="form__check">
                                <input
                                    type="radio"
                                    name="weight-unit"
                                    prop:checked=move || weight_unit.get() == WeightUnit::Lbs
                                    on:change=move |_| weight_unit.set(WeightUnit::Lbs)
                                />
                                "Libras (lbs)"
                            </label>
                        </fieldset>
                        <label class="form__switch">
                            <span>
                                "Ativar Notificações"
                                <small>"Receba lembretes para seus treinos agendados."</small>
                            </span>
                            <input
                                type="checkbox"
                                prop:checked=move || notifications.get()
                                on:change=move |ev| notifications.set(event_target_checked(&ev))
                            />
                        </label>
                        <label class="form__switch">
                            <span>
                                "Backup Automático"
                                <small>"Faça backup automático dos seus dados de treino."</small>
                            </span>
                            <input
                                type="checkbox"
                                prop:checked=move || auto_backup.get()
                                on:change=move |ev| auto_backup.set(event_target_checked(&ev))
                            />
                        </label>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Salvando..." } else { "Salvar Preferências" }}
                        </button>
                    </form>
                </Show>
            </Show>
        </div>
    }
}
