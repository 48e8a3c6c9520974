mod commands;
mod import;
mod layout;
mod library;
mod settings;

pub use commands::Commands;
pub use import::Import;
pub use layout::AppLayout;
pub use library::Library;
pub use settings::Settings;
