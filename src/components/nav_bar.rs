//! Top navigation bar.
//!
//! Links are plain anchors, so every navigation is a full page load; the
//! link matching the current path is flagged by `enhance::nav` after
//! hydration.

use leptos::prelude::*;

/// Site-wide navigation chrome.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">"Northline Supply"</a>
            <nav class="nav-bar__links">
                <a class="nav-link" href="/">"Catalog"</a>
                <a class="nav-link" href="/sell">"Sell"</a>
            </nav>
        </header>
    }
}
