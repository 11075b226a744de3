//! Product card for the catalog grid.
//!
//! DESIGN
//! ======
//! Keeps listing presentation consistent on the landing page while
//! centralizing the link and wholesale-terms affordances.

use leptos::prelude::*;

use crate::catalog::{Product, format_price};

/// A clickable card linking to a product page.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/products/{}", product.id);
    let price_line = product
        .price_from_cents()
        .map_or_else(|| "price on request".to_owned(), |cents| {
            format!("from {}", format_price(cents))
        });
    let options_line = if product.variations.len() == 1 {
        "1 option".to_owned()
    } else {
        format!("{} options", product.variations.len())
    };
    let moq_hint = format!(
        "Minimum order quantity: {} units at the wholesale tier",
        product.moq
    );

    view! {
        <a class="product-card" href=href>
            <span class="product-card__name">{product.name}</span>
            <span class="product-card__price">{price_line}</span>
            <span class="product-card__meta">
                {options_line}
                <span class="product-card__moq" attr:data-tooltip=moq_hint>
                    {format!("MOQ {}", product.moq)}
                </span>
            </span>
        </a>
    }
}
