//! Toast stack rendered in the page corner.
//!
//! Each toast schedules its own removal after `TOAST_LIFETIME_MS`; the close
//! button removes it immediately.

use leptos::prelude::*;

use crate::state::toast::{ToastVariant, use_toasts};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    #[cfg(feature = "hydrate")]
                    {
                        let expire = gloo_timers::callback::Timeout::new(crate::config::TOAST_LIFETIME_MS, move || {
                            toasts.update(|t| t.dismiss(id));
                        });
                        expire.forget();
                    }
                    view! {
                        <div
                            class="toast"
                            class:toast--destructive=toast.variant == ToastVariant::Destructive
                        >
                            <div class="toast__body">
                                <p class="toast__title">{toast.title}</p>
                                <p class="toast__description">{toast.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                                aria-label="Fechar"
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
