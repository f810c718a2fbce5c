use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push("Salvo", "ok", ToastVariant::Default);
    let b = state.push("Erro", "falhou", ToastVariant::Destructive);
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].variant, ToastVariant::Destructive);
}

#[test]
fn push_drops_oldest_beyond_limit() {
    let mut state = ToastState::default();
    for i in 0..5 {
        state.push(&format!("t{i}"), "", ToastVariant::Default);
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    let titles: Vec<_> = state.items.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["t2", "t3", "t4"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push("a", "", ToastVariant::Default);
    let b = state.push("b", "", ToastVariant::Default);
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}
