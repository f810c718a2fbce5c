//! Header navigation entries and their visibility.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavRoute {
    pub href: &'static str,
    pub label: &'static str,
    /// Shown to signed-out visitors too.
    pub public: bool,
}

pub const ROUTES: [NavRoute; 5] = [
    NavRoute { href: "/", label: "Início", public: true },
    NavRoute { href: "/exercises", label: "Exercícios", public: false },
    NavRoute { href: "/workout-plans", label: "Fichas de Treino", public: false },
    NavRoute { href: "/log-workout", label: "Registrar Treino", public: false },
    NavRoute { href: "/progress", label: "Progresso", public: false },
];

/// Routes the header shows, in menu order.
pub fn visible_routes(logged_in: bool) -> Vec<NavRoute> {
    ROUTES.iter().copied().filter(|r| r.public || logged_in).collect()
}

/// Whether `href` is the page currently shown.
pub fn is_active(href: &str, pathname: &str) -> bool {
    href == pathname
}

/// Parse the `:id` segment of an edit route; anything but a positive
/// integer means "no such record".
pub fn parse_id_param(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok().filter(|id| *id > 0)
}
