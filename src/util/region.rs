//! Optional UI region handles.
//!
//! DESIGN
//! ======
//! Widgets and pages address imperative DOM targets (focus, scrolling, image
//! sources) by element id, and a target can legitimately be missing: the
//! hosting markup may omit a region, or the code may be running natively
//! where there is no DOM at all. [`Region`] makes absence a first-class
//! state. Every operation on an absent region is a defined no-op, so
//! callers never scatter existence checks or panic on a misconfigured id.

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;

/// Handle to a UI element that may or may not be present.
#[derive(Clone, Debug, Default)]
pub struct Region {
    #[cfg(feature = "hydrate")]
    el: Option<web_sys::HtmlElement>,
}

impl Region {
    /// Resolve a region by element id. Absent when the id does not resolve
    /// or there is no DOM.
    #[must_use]
    pub fn by_id(id: &str) -> Self {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let el = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(id))
                .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
            Self { el }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Self::default()
        }
    }

    /// An always-absent region.
    #[must_use]
    pub fn absent() -> Self {
        Self::default()
    }

    /// Whether the region resolved to a live element.
    #[must_use]
    pub fn is_present(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.el.is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self;
            false
        }
    }

    /// Move keyboard focus to the region.
    pub fn focus(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(el) = &self.el {
            let _ = el.focus();
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = self;
    }

    /// Scroll the region to its maximum vertical extent.
    pub fn scroll_to_bottom(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(el) = &self.el {
            el.set_scroll_top(el.scroll_height());
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = self;
    }

    /// Set the region's `src` attribute (image and media regions).
    pub fn set_source(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        if let Some(el) = &self.el {
            let _ = el.set_attribute("src", url);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (self, url);
    }

    /// Make the region visible by clearing the `hidden` attribute.
    pub fn reveal(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(el) = &self.el {
            let _ = el.remove_attribute("hidden");
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = self;
    }

    /// Hide the region via the `hidden` attribute.
    pub fn conceal(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(el) = &self.el {
            let _ = el.set_attribute("hidden", "");
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = self;
    }
}
