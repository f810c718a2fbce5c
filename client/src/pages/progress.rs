//! Progress dashboard: summary cards, exercise records, and session history.
//!
//! The figures come from the fixed sample in `util::progress`; charts are
//! placeholders.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;
use crate::util::auth::install_unauth_redirect;
use crate::util::progress::{
    self, HISTORY, SERIES, TIME_RANGES, exercise_names, mean_duration, most_used_plan, personal_records,
    total_workouts,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProgressTab {
    Overview,
    Exercises,
    History,
}

impl ProgressTab {
    const ALL: [Self; 3] = [Self::Overview, Self::Exercises, Self::History];

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Visão Geral",
            Self::Exercises => "Progresso de Exercícios",
            Self::History => "Histórico de Treinos",
        }
    }
}

#[component]
pub fn ProgressPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    let tab = RwSignal::new(ProgressTab::Overview);

    let tabs = ProgressTab::ALL
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
        .collect::<Vec<_>>();

    view! {
        <div class="page">
            <h1>"Acompanhamento de Progresso"</h1>
            <p class="page__subtitle">
                "Acompanhe seu progresso nos treinos e veja suas melhorias ao longo do tempo."
            </p>
            <div class="tabs">{tabs}</div>
            {move || match tab.get() {
                ProgressTab::Overview => view! { <OverviewTab /> }.into_any(),
                ProgressTab::Exercises => view! { <ExercisesTab /> }.into_any(),
                ProgressTab::History => view! { <HistoryTab /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn OverviewTab() -> impl IntoView {
    let (plan, plan_count) = most_used_plan(HISTORY).unwrap_or(("-", 0));

    view! {
        <div class="stat-grid">
            <section class="card">
                <h3 class="card__title">"Total de Treinos"</h3>
                <div class="stat">{total_workouts(HISTORY)}</div>
                <p class="card__description">"Últimos 30 dias"</p>
            </section>
            <section class="card">
                <h3 class="card__title">"Duração Média"</h3>
                <div class="stat">{format!("{} min", mean_duration(HISTORY))}</div>
                <p class="card__description">"Por treino"</p>
            </section>
            <section class="card">
                <h3 class="card__title">"Ficha Mais Usada"</h3>
                <div class="stat">{plan}</div>
                <p class="card__description">{format!("{plan_count} treinos")}</p>
            </section>
        </div>
        <section class="card">
            <h2 class="card__title">"Frequência de Treinos"</h2>
            <p class="card__description">"Número de treinos por semana no último mês."</p>
            <div class="chart-placeholder">
                <p>"O gráfico de frequência de treinos apareceria aqui"</p>
            </div>
        </section>
    }
}

#[component]
fn ExercisesTab() -> impl IntoView {
    let names = exercise_names(SERIES);
    let selected = RwSignal::new(names.first().copied().unwrap_or_default().to_owned());
    let range = RwSignal::new(TIME_RANGES[0].0.to_owned());

    let exercise_options = names
        .into_iter()
        .map(|name| view! { <option value=name>{name}</option> })
        .collect::<Vec<_>>();
    let range_options = TIME_RANGES
        .into_iter()
        .map(|(value, label)| view! { <option value=value>{label}</option> })
        .collect::<Vec<_>>();

    let records = personal_records(SERIES)
        .into_iter()
        .map(|record: progress::PersonalRecord| {
            view! {
                <section class="card card--compact">
                    <h4 class="card__title">{record.exercise}</h4>
                    <div class="stat">{format!("{} kg", record.weight)}</div>
                    <p class="card__description">{format!("Alcançado em {}", record.date)}</p>
                </section>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="card">
            <div class="card__header-row">
                <div>
                    <h2 class="card__title">"Progresso de Exercícios"</h2>
                    <p class="card__description">"Acompanhe seus ganhos de força ao longo do tempo."</p>
                </div>
                <div class="filters">
                    <select
                        class="form__input"
                        prop:value=move || selected.get()
                        on:change=move |ev| selected.set(event_target_value(&ev))
                    >
                        {exercise_options}
                    </select>
                    <select
                        class="form__input"
                        prop:value=move || range.get()
                        on:change=move |ev| range.set(event_target_value(&ev))
                    >
                        {range_options}
                    </select>
                </div>
            </div>
            <div class="chart-placeholder">
                <p>{move || format!("O gráfico de progresso para {} apareceria aqui", selected.get())}</p>
            </div>
        </section>
        <section class="card">
            <h2 class="card__title">"Recordes Pessoais"</h2>
            <p class="card__description">"Seus melhores desempenhos para cada exercício."</p>
            <div class="stat-grid">{records}</div>
        </section>
    }
}

#[component]
fn HistoryTab() -> impl IntoView {
    let rows = HISTORY
        .iter()
        .map(|entry| {
            view! {
                <div class="history-row">
                    <div>
                        <div class="history-row__plan">{entry.plan}</div>
                        <div class="history-row__date">{entry.date}</div>
                    </div>
                    <div class="history-row__badges">
                        <span class="badge">{format!("{} exercícios", entry.exercises)}</span>
                        <span class="badge">{format!("{} min", entry.duration_min)}</span>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="card">
            <h2 class="card__title">"Treinos Recentes"</h2>
            <p class="card__description">"Seu histórico de treinos dos últimos 30 dias."</p>
            <div class="history">{rows}</div>
        </section>
    }
}
