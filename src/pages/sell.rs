//! New-listing form for sellers.
//!
//! The photo field drives a live preview: selecting a file reads it as a
//! data URL and mirrors it into the preview image below the field.

use leptos::prelude::*;

#[cfg(test)]
#[path = "sell_test.rs"]
mod sell_test;

/// Id of the preview image the upload field writes into.
const LISTING_PREVIEW_ID: &str = "listing-image-preview";

/// Draft-listing form with live image preview.
#[component]
pub fn SellPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_listing_input(&name.get(), &price.get()) {
            Ok(summary) => notice.set(summary),
            Err(problem) => notice.set(problem.to_owned()),
        }
    };

    let on_image_change = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::Event| {
                use wasm_bindgen::JsCast;

                let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                else {
                    return;
                };
                crate::enhance::preview::preview_image(&input, LISTING_PREVIEW_ID);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    view! {
        <section class="sell">
            <h1 class="sell__title">"List a product"</h1>
            <form class="sell__form" on:submit=on_submit>
                <label class="sell__field">
                    "Product name"
                    <input
                        class="sell__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="sell__field">
                    "Wholesale unit price (USD)"
                    <input
                        class="sell__input"
                        type="text"
                        inputmode="decimal"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>
                <label class="sell__field">
                    "Product photo"
                    <input
                        class="sell__input"
                        type="file"
                        accept="image/*"
                        on:change=on_image_change
                    />
                </label>
                <img
                    id=LISTING_PREVIEW_ID
                    class="sell__preview"
                    alt="Listing preview"
                    hidden=true
                />
                <button class="sell__submit" type="submit">"Save draft"</button>
            </form>
            {move || {
                let text = notice.get();
                (!text.is_empty()).then(|| view! { <p class="sell__notice">{text}</p> })
            }}
        </section>
    }
}

/// Check draft fields, returning a confirmation line or the first problem.
fn validate_listing_input(name: &str, price: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a product name first.");
    }
    let Ok(value) = price.trim().parse::<f64>() else {
        return Err("Enter the unit price as a number, like 12.50.");
    };
    if value <= 0.0 {
        return Err("The unit price must be above zero.");
    }
    Ok(format!("Draft saved: {name} at ${value:.2} per unit."))
}
