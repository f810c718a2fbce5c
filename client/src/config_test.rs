use super::*;

#[test]
fn normalize_base_url_strips_trailing_slashes() {
    assert_eq!(normalize_base_url("https://api.example.com/api/"), "https://api.example.com/api");
    assert_eq!(normalize_base_url("https://api.example.com//"), "https://api.example.com");
}

#[test]
fn normalize_base_url_falls_back_on_blank_input() {
    assert_eq!(normalize_base_url("   "), DEFAULT_API_BASE_URL);
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}
