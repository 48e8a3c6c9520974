//! Top-level application state store
//!
//! Components access state via lensing: `app.state.library().read()`

use super::toasts::ToastState;
use beets_core::browser::LibraryBrowser;
use beets_core::connection::ConnectionStatus;
use beets_core::detail::ItemDetail;
use beets_core::runner::{RunKind, TranscriptRunner};
use beets_core::settings::SettingsPanel;
use dioxus::prelude::*;

/// Top-level application state combining all sub-states
#[derive(Clone, Debug, PartialEq, Store)]
pub struct AppState {
    /// Library table: browse, search, artist filter
    pub library: LibraryBrowser,
    /// Text in the library search box
    pub search_input: String,
    /// Item detail modal
    pub detail: ItemDetail,
    /// Command console
    pub console: TranscriptRunner,
    /// Text in the command input
    pub command_input: String,
    /// Import form
    pub import: TranscriptRunner,
    /// Text in the import path input
    pub import_path: String,
    /// Title bar connection badge
    pub connection: ConnectionStatus,
    /// Settings page
    pub settings: SettingsPanel,
    /// Visible toasts
    pub toasts: ToastState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            library: LibraryBrowser::default(),
            search_input: String::new(),
            detail: ItemDetail::default(),
            console: TranscriptRunner::new(RunKind::Command),
            command_input: String::new(),
            import: TranscriptRunner::new(RunKind::Import),
            import_path: String::new(),
            connection: ConnectionStatus::default(),
            settings: SettingsPanel::default(),
            toasts: ToastState::default(),
        }
    }
}

impl AppState {
    /// Initial state with the configured page size and sort order
    pub fn with_library(library: LibraryBrowser) -> Self {
        Self {
            library,
            ..Self::default()
        }
    }
}
