use super::*;

fn exercise(id: i64, name: &str, category: &str) -> Exercise {
    Exercise {
        id: Some(id),
        name: name.to_owned(),
        category: category.to_owned(),
        equipment: "Barra".to_owned(),
    }
}

fn catalog() -> Vec<Exercise> {
    vec![
        exercise(1, "Supino Reto", "Peito"),
        exercise(2, "Agachamento", "Pernas"),
        exercise(3, "Supino Inclinado", "Peito"),
        exercise(4, "Leg Press", "Pernas"),
    ]
}

#[test]
fn search_is_case_insensitive_substring() {
    let all = vec![exercise(1, "Supino Reto", "Peito"), exercise(2, "Agachamento", "Pernas")];
    let visible = filter_exercises(&all, "supino", ALL_CATEGORIES);
    assert_eq!(visible, vec![exercise(1, "Supino Reto", "Peito")]);
}

#[test]
fn category_filter_excludes_other_categories_regardless_of_search() {
    let visible = filter_exercises(&catalog(), "", "Pernas");
    assert!(visible.iter().all(|e| e.category == "Pernas"));
    assert_eq!(visible.len(), 2);

    assert!(filter_exercises(&catalog(), "supino", "Pernas").is_empty());
}

#[test]
fn empty_search_with_all_returns_everything_in_order() {
    assert_eq!(filter_exercises(&catalog(), "", ALL_CATEGORIES), catalog());
}

#[test]
fn search_and_category_combine() {
    let visible = filter_exercises(&catalog(), "PRESS", "Pernas");
    assert_eq!(visible, vec![exercise(4, "Leg Press", "Pernas")]);
}

#[test]
fn search_matches_accented_names() {
    let all = vec![exercise(5, "Tríceps Corda", "Braços")];
    assert!(matches(&all[0], "TRÍCEPS", "Braços"));
    assert!(!matches(&all[0], "triceps", "Braços"));
}
