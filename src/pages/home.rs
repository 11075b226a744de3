//! Catalog landing page.

use leptos::prelude::*;

use crate::catalog::demo_products;
use crate::components::product_card::ProductCard;

/// Product grid with a load-time announcement banner.
#[component]
pub fn HomePage() -> impl IntoView {
    let products = demo_products();

    view! {
        <section class="home">
            <div class="alert alert--info" role="status">
                "Spring restock is live. Wholesale tiers apply automatically at checkout."
            </div>
            <h1 class="home__title">"Catalog"</h1>
            <div class="home__grid">
                {products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product/> })
                    .collect_view()}
            </div>
        </section>
    }
}
