//! beets-ui - Stores and view components for the beets web front-end
//!
//! Components are pure and props-based: they draw the render descriptions
//! produced by the `beets-core` controllers and report user events through
//! callbacks. Fetching lives in the web crate.

pub mod components;
pub mod stores;
pub mod timers;

pub use components::*;
