//! Sitewide page enhancements.
//!
//! DESIGN
//! ======
//! Each enhancement is an independent, fire-once initializer over the
//! document: no shared state and no ordering requirements between them.
//! [`install`] runs them all after hydration. Every initializer marks the
//! nodes it touches, so the next-tick retry for late-inserted markup cannot
//! double-bind anything.

pub mod alerts;
pub mod nav;
pub mod preview;
pub mod tooltips;

/// Run every page-level enhancement. Safe to call repeatedly.
pub fn install() {
    #[cfg(feature = "hydrate")]
    {
        tooltips::activate_all();
        tooltips::activate_popovers();
        alerts::schedule_dismissal();
        nav::mark_active_link();
    }
}
