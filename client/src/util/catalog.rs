//! Fixed option lists offered by the forms.
//!
//! These are client-side constants. The backend is not assumed to validate
//! against them, so records carrying other values still render.

/// Body-part categories for exercises.
pub const CATEGORIES: [&str; 6] = ["Peito", "Costas", "Pernas", "Ombros", "Braços", "Core"];

/// Equipment choices for exercises.
pub const EQUIPMENT: [&str; 8] = [
    "Barra",
    "Halteres",
    "Máquina",
    "Cabo",
    "Peso Corporal",
    "Kettlebell",
    "Elástico",
    "Outro",
];

/// Training days, Monday first.
pub const WEEKDAYS: [&str; 7] = ["Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado", "Domingo"];

/// Sentinel filter value matching every category.
pub const ALL_CATEGORIES: &str = "all";

/// Label shown for the `ALL_CATEGORIES` option.
pub const ALL_CATEGORIES_LABEL: &str = "Todos";

/// First three characters of a day name, for compact badges.
pub fn day_abbreviation(day: &str) -> String {
    day.chars().take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_abbreviation_handles_multibyte_names() {
        assert_eq!(day_abbreviation("Sábado"), "Sáb");
        assert_eq!(day_abbreviation("Terça"), "Ter");
        assert_eq!(day_abbreviation("Se"), "Se");
    }

    #[test]
    fn sentinel_is_not_a_real_category() {
        assert!(!CATEGORIES.contains(&ALL_CATEGORIES));
    }
}
