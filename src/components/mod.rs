//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and the product chat surface; pages
//! own routing concerns and pass configuration down as props.

pub mod chat_widget;
pub mod nav_bar;
pub mod product_card;
