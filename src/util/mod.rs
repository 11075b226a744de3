//! Cross-cutting helpers shared by components and pages.

pub mod region;
