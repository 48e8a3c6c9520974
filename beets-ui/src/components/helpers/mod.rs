//! Small shared pieces

mod error_banner;
mod loading_spinner;

pub use error_banner::ErrorBanner;
pub use loading_spinner::{InlineSpinner, LoadingSpinner};
