//! Timed dismissal of alert banners.
//!
//! Every `.alert` present when the enhancement installs is closed after a
//! fixed delay: a closing class first, so CSS can fade the banner out, then
//! removal from the document.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// How long banners stay up before dismissal starts.
pub const ALERT_DISMISS_MS: u32 = 5_000;

/// Fade window granted between the closing class and node removal.
pub const ALERT_FADE_MS: u32 = 300;

/// Schedule dismissal of every alert banner currently in the document.
/// Banners inserted later are not scheduled; a repeat call skips banners
/// already marked.
pub fn schedule_dismissal() {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(alerts) = document.query_selector_all(".alert") else {
            return;
        };
        for i in 0..alerts.length() {
            let Some(el) = alerts
                .item(i)
                .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
            else {
                continue;
            };
            if el.get_attribute("data-dismiss-scheduled").is_some() {
                continue;
            }
            let _ = el.set_attribute("data-dismiss-scheduled", "true");
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(ALERT_DISMISS_MS).await;
                let _ = el.class_list().add_1("alert--closing");
                gloo_timers::future::TimeoutFuture::new(ALERT_FADE_MS).await;
                el.remove();
            });
        }
    }
}
