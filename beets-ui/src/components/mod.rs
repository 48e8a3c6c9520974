//! Shared UI components

pub mod app_layout;
pub mod button;
pub mod console;
pub mod helpers;
pub mod icons;
pub mod library;
pub mod modal;
pub mod select;
pub mod settings;
pub mod text_input;
pub mod title_bar;
pub mod toast;

pub use app_layout::AppLayoutView;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use console::{CommandConsoleView, ImportFormView, TranscriptView};
pub use helpers::{ErrorBanner, InlineSpinner, LoadingSpinner};
pub use icons::{
    AlertTriangleIcon, CheckIcon, ChevronLeftIcon, ChevronRightIcon, FolderIcon, LaptopIcon,
    LoaderIcon, MusicIcon, RefreshIcon, SearchIcon, ServerIcon, SettingsIcon, TerminalIcon, XIcon,
};
pub use library::{ItemDetailModal, LibraryTableView, LibraryToolbar, LibraryView, PaginationBar};
pub use modal::{Modal, ModalPanel};
pub use select::{SelectChoice, SelectField};
pub use settings::SettingsView;
pub use text_input::{TextArea, TextInput, TextInputSize};
pub use title_bar::{NavItem, TitleBarView};
pub use toast::ToastStackView;
