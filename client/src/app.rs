//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{header::Header, toaster::Toaster};
use crate::pages::{
    exercise_edit::ExerciseEditPage, exercise_new::ExerciseNewPage, exercises::ExercisesPage, home::HomePage,
    log_workout::LogWorkoutPage, login::LoginPage, profile::ProfilePage, progress::ProgressPage,
    register::RegisterPage, workout_plan_edit::WorkoutPlanEditPage, workout_plan_new::WorkoutPlanNewPage,
    workout_plans::WorkoutPlansPage,
};
use crate::state::{session::provide_session, toast::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, toast, and UI contexts and sets up client-side
/// routing. The theme preference lives in browser storage, so it is read
/// once after hydration rather than during render.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_session();
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(toasts);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/gymtrack.css"/>
        <Title text="Controle de Academia"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "Página não encontrada.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("exercises") view=ExercisesPage/>
                    <Route path=(StaticSegment("exercises"), StaticSegment("new")) view=ExerciseNewPage/>
                    <Route
                        path=(StaticSegment("exercises"), ParamSegment("id"), StaticSegment("edit"))
                        view=ExerciseEditPage
                    />
                    <Route path=StaticSegment("workout-plans") view=WorkoutPlansPage/>
                    <Route path=(StaticSegment("workout-plans"), StaticSegment("new")) view=WorkoutPlanNewPage/>
                    <Route
                        path=(StaticSegment("workout-plans"), ParamSegment("id"), StaticSegment("edit"))
                        view=WorkoutPlanEditPage
                    />
                    <Route path=StaticSegment("log-workout") view=LogWorkoutPage/>
                    <Route path=StaticSegment("progress") view=ProgressPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}
