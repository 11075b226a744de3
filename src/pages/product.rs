//! Product detail page.
//!
//! ARCHITECTURE
//! ============
//! Resolves the product from the route param, renders the variation table,
//! and mounts one product-scoped chat widget configured for the default
//! variation. An unknown id renders a not-found body instead of a widget.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalog::{Product, find_product, format_price};
use crate::components::chat_widget::{ChatWidget, ChatWidgetConfig};

/// Product detail with wholesale terms and the chat widget.
#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let product = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
            .and_then(find_product)
    };

    view! {
        <section class="product">
            {move || match product() {
                Some(product) => product_body(product).into_any(),
                None => view! { <p class="product__missing">"Product not found."</p> }.into_any(),
            }}
        </section>
    }
}

fn product_body(product: Product) -> impl IntoView {
    let config = match product.default_variation() {
        Some(variation) => ChatWidgetConfig::new(product.id).with_variation(variation.id),
        None => ChatWidgetConfig::new(product.id),
    };
    let rows = product
        .variations
        .iter()
        .map(|variation| {
            let stock_line = if variation.stock == 0 {
                "Out of stock".to_owned()
            } else {
                format!("{} units", variation.stock)
            };
            view! {
                <tr>
                    <td>{variation.label}</td>
                    <td>{format_price(variation.price_cents)}</td>
                    <td>{stock_line}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="product__layout">
            <div class="product__info">
                <h1 class="product__name">{product.name}</h1>
                <p class="product__description">{product.description}</p>
                <p class="product__terms">
                    <span
                        class="product__bulk"
                        attr:data-popover="Orders above three times the MOQ qualify for the distributor tier. Ask in chat for a custom quote."
                        attr:data-popover-title="Bulk pricing"
                    >
                        "Bulk pricing"
                    </span>
                    <span class="product__moq">{format!("MOQ {} units", product.moq)}</span>
                </p>
                <table class="product__variations">
                    <thead>
                        <tr>
                            <th>"Variation"</th>
                            <th>"Unit price"</th>
                            <th>"Stock"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            <ChatWidget config=config/>
        </div>
    }
}
