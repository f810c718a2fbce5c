//! Sticky site header with navigation, account menu, and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is mounted once for the whole app. It refreshes the shared
//! session signal from storage when mounted and every time the window regains
//! focus, so a login or logout in another tab shows up here.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::auth;
use crate::state::session::{browser_session_store, sync_session, use_session};
use crate::state::ui::UiState;
use crate::util::nav::{is_active, visible_routes};

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || sync_session(session));
        let focus = window_event_listener(leptos::ev::focus, move |_| sync_session(session));
        on_cleanup(move || focus.remove());
    }

    let logged_in = move || session.with(|s| s.is_logged_in());
    let routes = move || visible_routes(logged_in());

    let on_logout = move || {
        auth::logout(&browser_session_store());
        sync_session(session);
        ui.update(UiState::close_menu);
        navigate("/", NavigateOptions::default());
    };

    let nav_links = move |mobile: bool| {
        routes()
            .into_iter()
            .map(|route| {
                let active = move || is_active(route.href, &pathname.get());
                view! {
                    <a
                        href=route.href
                        class="site-header__link"
                        class:site-header__link--active=active
                        class:site-header__link--mobile=mobile
                        on:click=move |_| ui.update(UiState::close_menu)
                    >
                        {route.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    let account = move || {
        if logged_in() {
            let on_logout = on_logout.clone();
            view! {
                <span class="site-header__user">{move || session.with(|s| s.display_name())}</span>
                <a href="/profile" class="btn btn--ghost" on:click=move |_| ui.update(UiState::close_menu)>
                    "Perfil"
                </a>
                <button class="btn btn--ghost site-header__logout" on:click=move |_| on_logout()>
                    "Sair"
                </button>
            }
            .into_any()
        } else {
            view! {
                <a href="/login" class="btn btn--ghost" on:click=move |_| ui.update(UiState::close_menu)>
                    "Entrar"
                </a>
                <a href="/register" class="btn btn--primary" on:click=move |_| ui.update(UiState::close_menu)>
                    "Cadastrar"
                </a>
            }
            .into_any()
        }
    };

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">
                <span class="site-header__logo" aria-hidden="true">"🏋"</span>
                <span class="site-header__title">"Controle de Academia"</span>
            </a>

            <nav class="site-header__nav">{move || nav_links(false)}</nav>

            <div class="site-header__actions">
                <div class="site-header__account">{account.clone()}</div>
                <button
                    class="btn site-header__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Alternar tema"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <button
                    class="btn site-header__menu-toggle"
                    on:click=move |_| ui.update(UiState::toggle_menu)
                    aria-label="Abrir menu"
                >
                    "☰"
                </button>
            </div>

            <Show when=move || ui.get().menu_open>
                <div class="site-header__mobile-menu">
                    {move || nav_links(true)}
                    <div class="site-header__mobile-account">{account.clone()}</div>
                </div>
            </Show>
        </header>
    }
}
