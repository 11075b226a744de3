//! Root application component with routing and page enhancements.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{home::HomePage, product::ProductPage, sell::SellPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Renders storefront chrome around the routed page and installs the page
/// enhancements once the client is live.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Enhancements read the rendered document, so run them after the tree
    // settles; the next-tick retry picks up late-inserted markup.
    Effect::new(move || {
        crate::enhance::install();
        #[cfg(feature = "hydrate")]
        gloo_timers::callback::Timeout::new(0, crate::enhance::install).forget();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Northline Supply"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("products"), ParamSegment("id")) view=ProductPage/>
                    <Route path=StaticSegment("sell") view=SellPage/>
                </Routes>
            </main>
        </Router>
    }
}
