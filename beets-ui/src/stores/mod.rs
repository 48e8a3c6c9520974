//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing.

pub mod app;
pub mod toasts;

pub use app::*;
pub use toasts::*;
