//! Library view - pure rendering, no data fetching
//!
//! Accepts `ReadStore<LibraryBrowser>` and draws the controller's table
//! description, so every change to the browser re-renders exactly this view.

use super::table::{LibraryTableView, PaginationBar};
use super::toolbar::LibraryToolbar;
use beets_core::browser::LibraryBrowser;
use beets_core::models::AlbumSummary;
use beets_core::SortKey;
use dioxus::prelude::*;

#[component]
pub fn LibraryView(
    state: ReadStore<LibraryBrowser>,
    search_value: String,
    on_search_input: EventHandler<String>,
    on_search_submit: EventHandler<()>,
    on_clear: EventHandler<()>,
    on_sort_change: EventHandler<SortKey>,
    on_page_size_change: EventHandler<u32>,
    on_artist_change: EventHandler<String>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_item_click: EventHandler<i64>,
    on_album_click: EventHandler<AlbumSummary>,
) -> Element {
    let browser = state.read();
    let table = browser.table();
    let view = browser.view().clone();
    let artists = browser.artists().to_vec();
    let revision = browser.revision();
    drop(browser);

    rsx! {
        div { class: "container mx-auto px-6 py-8 flex flex-col gap-4",
            h1 { class: "text-2xl font-bold text-white", "Music Library" }
            LibraryToolbar {
                search_value,
                on_search_input,
                on_search_submit,
                show_clear: table.show_clear,
                on_clear,
                loading: table.loading,
                sort: view.sort,
                on_sort_change,
                page_size: view.page_size,
                on_page_size_change,
                artists,
                selected_artist: view.selected_artist.clone().unwrap_or_default(),
                on_artist_change,
                revision,
            }
            div { class: "flex items-center justify-between text-sm text-gray-400 min-h-[1.5rem]",
                span { "{table.summary}" }
                if let Some(controls) = table.pagination {
                    PaginationBar { controls, on_previous, on_next }
                }
            }
            LibraryTableView {
                rows: table.rows,
                loading: table.loading,
                on_item_click,
                on_album_click,
            }
        }
    }
}
