//! Hover tooltips and click-toggled popovers.
//!
//! DESIGN
//! ======
//! Elements opt in through data attributes: `data-tooltip="text"` for hover
//! bubbles, `data-popover="body"` (plus optional `data-popover-title`) for
//! click-toggled ones. Bubbles are plain fixed-position divs appended to the
//! body and positioned from the trigger's bounding rect; only one bubble of
//! each kind is open at a time. Triggers are marked once bound so repeat
//! activation cannot stack listeners.

#[cfg(test)]
#[path = "tooltips_test.rs"]
mod tooltips_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Minimum distance bubbles keep from the viewport edges.
#[cfg(any(test, feature = "hydrate"))]
const GUTTER_PX: f64 = 8.0;

/// Vertical gap between a trigger and its bubble.
#[cfg(any(test, feature = "hydrate"))]
const BUBBLE_OFFSET_PX: f64 = 10.0;

/// Attach hover tooltips to every `[data-tooltip]` element. Idempotent.
pub fn activate_all() {
    #[cfg(feature = "hydrate")]
    {
        for el in flagged_elements("[data-tooltip]", "data-tooltip-bound") {
            attach_tooltip(&el);
        }
    }
}

/// Attach click-toggled popovers to every `[data-popover]` element.
/// Idempotent.
pub fn activate_popovers() {
    #[cfg(feature = "hydrate")]
    {
        for el in flagged_elements("[data-popover]", "data-popover-bound") {
            attach_popover(&el);
        }
    }
}

/// Matching elements not yet carrying the marker attribute; marks them.
#[cfg(feature = "hydrate")]
fn flagged_elements(selector: &str, marker: &str) -> Vec<web_sys::Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut fresh = Vec::new();
    for i in 0..nodes.length() {
        let Some(el) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        if el.get_attribute(marker).is_some() {
            continue;
        }
        let _ = el.set_attribute(marker, "true");
        fresh.push(el);
    }
    fresh
}

#[cfg(feature = "hydrate")]
fn attach_tooltip(el: &web_sys::Element) {
    let show_el = el.clone();
    let show = Closure::wrap(Box::new(move |_ev: web_sys::MouseEvent| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(text) = show_el.get_attribute("data-tooltip") else {
            return;
        };
        clear_bubbles(&document, ".tooltip-bubble");
        let rect = show_el.get_bounding_client_rect();
        let (x, y) = tooltip_position(rect.left(), rect.top(), rect.width());
        spawn_bubble(&document, "tooltip-bubble", None, &text, x, y);
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    let hide = Closure::wrap(Box::new(move |_ev: web_sys::MouseEvent| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            clear_bubbles(&document, ".tooltip-bubble");
        }
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    let _ = el.add_event_listener_with_callback("mouseenter", show.as_ref().unchecked_ref());
    let _ = el.add_event_listener_with_callback("mouseleave", hide.as_ref().unchecked_ref());
    // Page-lifetime listeners; the closures are never reclaimed.
    show.forget();
    hide.forget();
}

#[cfg(feature = "hydrate")]
fn attach_popover(el: &web_sys::Element) {
    let toggle_el = el.clone();
    let toggle = Closure::wrap(Box::new(move |_ev: web_sys::MouseEvent| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let was_open = toggle_el.get_attribute("data-popover-open").is_some();
        // One popover at a time: close everything, then reopen if this
        // trigger was closed.
        clear_bubbles(&document, ".popover-bubble");
        clear_open_markers(&document);
        if was_open {
            return;
        }
        let Some(body) = toggle_el.get_attribute("data-popover") else {
            return;
        };
        let title = toggle_el.get_attribute("data-popover-title");
        let rect = toggle_el.get_bounding_client_rect();
        let (x, y) = popover_position(rect.left(), rect.bottom(), rect.width());
        let _ = toggle_el.set_attribute("data-popover-open", "true");
        spawn_bubble(&document, "popover-bubble", title.as_deref(), &body, x, y);
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    let _ = el.add_event_listener_with_callback("click", toggle.as_ref().unchecked_ref());
    toggle.forget();
}

/// Append a positioned bubble div to the body.
#[cfg(feature = "hydrate")]
fn spawn_bubble(
    document: &web_sys::Document,
    class: &str,
    title: Option<&str>,
    body: &str,
    x: f64,
    y: f64,
) {
    let Ok(bubble) = document.create_element("div") else {
        return;
    };
    bubble.set_class_name(class);
    if let Some(title) = title {
        if let Ok(heading) = document.create_element("strong") {
            heading.set_text_content(Some(title));
            let _ = bubble.append_child(&heading);
        }
        if let Ok(text) = document.create_element("span") {
            text.set_text_content(Some(body));
            let _ = bubble.append_child(&text);
        }
    } else {
        bubble.set_text_content(Some(body));
    }
    if let Some(html) = bubble.dyn_ref::<web_sys::HtmlElement>() {
        let style = html.style();
        let _ = style.set_property("left", &format!("{x}px"));
        let _ = style.set_property("top", &format!("{y}px"));
    }
    if let Some(host) = document.body() {
        let _ = host.append_child(&bubble);
    }
}

#[cfg(feature = "hydrate")]
fn clear_bubbles(document: &web_sys::Document, selector: &str) {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        {
            el.remove();
        }
    }
}

#[cfg(feature = "hydrate")]
fn clear_open_markers(document: &web_sys::Document) {
    let Ok(nodes) = document.query_selector_all("[data-popover-open]") else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        {
            let _ = el.remove_attribute("data-popover-open");
        }
    }
}

/// Fixed-position anchor for a bubble centered above a trigger rect.
#[cfg(any(test, feature = "hydrate"))]
fn tooltip_position(rect_left: f64, rect_top: f64, rect_width: f64) -> (f64, f64) {
    let x = (rect_left + rect_width / 2.0).max(GUTTER_PX);
    let y = (rect_top - BUBBLE_OFFSET_PX).max(GUTTER_PX);
    (x, y)
}

/// Fixed-position anchor for a bubble centered below a trigger rect.
#[cfg(any(test, feature = "hydrate"))]
fn popover_position(rect_left: f64, rect_bottom: f64, rect_width: f64) -> (f64, f64) {
    let x = (rect_left + rect_width / 2.0).max(GUTTER_PX);
    let y = rect_bottom + BUBBLE_OFFSET_PX;
    (x, y)
}
