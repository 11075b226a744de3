//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped concerns (params, form state) and delegates
//! chrome to `components`.

pub mod home;
pub mod product;
pub mod sell;
