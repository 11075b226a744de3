use super::*;

#[test]
fn is_active_href_requires_an_exact_path_match() {
    assert!(is_active_href(Some("/sell"), "/sell"));
    assert!(is_active_href(Some("/"), "/"));
    assert!(!is_active_href(Some("/sell"), "/sell/"));
    assert!(!is_active_href(Some("/"), "/sell"));
}

#[test]
fn is_active_href_ignores_missing_hrefs() {
    assert!(!is_active_href(None, "/"));
}

#[test]
fn is_active_href_does_not_match_queries_or_fragments() {
    assert!(!is_active_href(Some("/sell?tab=drafts"), "/sell"));
    assert!(!is_active_href(Some("#"), "/"));
}
