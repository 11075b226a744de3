//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs mutated through small, natively testable
//! operations; components wrap them in signals and render from the result.

pub mod chat;
