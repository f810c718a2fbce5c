use super::*;

fn exercise(id: i64, name: &str) -> Exercise {
    Exercise {
        id: Some(id),
        name: name.to_owned(),
        category: "Peito".to_owned(),
        equipment: "Barra".to_owned(),
    }
}

#[test]
fn without_exercise_drops_only_the_matching_id() {
    let mut list = vec![exercise(1, "Supino Reto"), exercise(2, "Crucifixo"), exercise(3, "Flexão")];
    without_exercise(&mut list, 2);
    let names: Vec<_> = list.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Supino Reto", "Flexão"]);
}

#[test]
fn without_exercise_unknown_id_is_noop() {
    let mut list = vec![exercise(1, "Supino Reto")];
    without_exercise(&mut list, 99);
    assert_eq!(list.len(), 1);
}
