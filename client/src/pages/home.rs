//! Public landing page.

use leptos::prelude::*;

use crate::state::session::use_session;

struct Feature {
    title: &'static str,
    headline: &'static str,
    caption: &'static str,
    href: &'static str,
    action: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Exercícios",
        headline: "100+",
        caption: "Exercícios pré-definidos",
        href: "/exercises",
        action: "Gerenciar Exercícios",
    },
    Feature {
        title: "Fichas de Treino",
        headline: "Criar",
        caption: "Fichas de treino personalizadas",
        href: "/workout-plans",
        action: "Gerenciar Fichas",
    },
    Feature {
        title: "Acompanhar Progresso",
        headline: "Análises",
        caption: "Visualize seu progresso ao longo do tempo",
        href: "/progress",
        action: "Ver Progresso",
    },
    Feature {
        title: "Perfil",
        headline: "Configurações",
        caption: "Gerencie sua conta",
        href: "/profile",
        action: "Ver Perfil",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="home-page">
            <div class="home-page__intro">
                <h1>"Sistema de Controle de Academia"</h1>
                <p>"Acompanhe seus treinos, monitore seu progresso e alcance seus objetivos de fitness"</p>
            </div>
            <div class="home-page__grid">
                {FEATURES
                    .iter()
                    .map(|f| {
                        view! {
                            <section class="card">
                                <h2 class="card__title">{f.title}</h2>
                                <div class="card__figure">{f.headline}</div>
                                <p class="card__description">{f.caption}</p>
                                <a class="btn btn--primary btn--block" href=f.href>
                                    {f.action}
                                </a>
                            </section>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Show when=move || session.with(|s| !s.loading && !s.is_logged_in())>
                <div class="home-page__auth">
                    <a class="btn" href="/login">"Entrar"</a>
                    <a class="btn btn--primary" href="/register">"Cadastrar"</a>
                </div>
            </Show>
        </div>
    }
}
