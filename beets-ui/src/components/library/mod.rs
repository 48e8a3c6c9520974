//! Library page views

mod item_detail;
mod table;
mod toolbar;
mod view;

pub use item_detail::ItemDetailModal;
pub use table::{LibraryTableView, PaginationBar};
pub use toolbar::LibraryToolbar;
pub use view::LibraryView;
