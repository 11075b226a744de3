//! Active navigation link marking.
//!
//! The nav link whose `href` equals the current location path gains the
//! `active` class and `aria-current="page"`. At most one link per page is
//! expected to match.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Flag the nav link matching the current location. Idempotent.
pub fn mark_active_link() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Ok(path) = window.location().pathname() else {
            return;
        };
        let Ok(links) = document.query_selector_all("a.nav-link") else {
            return;
        };
        for i in 0..links.length() {
            let Some(el) = links
                .item(i)
                .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
            else {
                continue;
            };
            if is_active_href(el.get_attribute("href").as_deref(), &path) {
                let _ = el.class_list().add_1("active");
                let _ = el.set_attribute("aria-current", "page");
            }
        }
    }
}

/// Whether a link href addresses the current path. Hrefs are compared as
/// written, no normalization: `/sell` matches `/sell` and nothing else.
#[cfg(any(test, feature = "hydrate"))]
fn is_active_href(href: Option<&str>, current_path: &str) -> bool {
    href == Some(current_path)
}
