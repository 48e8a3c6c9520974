//! Library table and pagination controls

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, LoadingSpinner};
use beets_core::browser::{AlbumRow, ItemRow, PaginationControls, TableRows};
use beets_core::models::AlbumSummary;
use dioxus::prelude::*;

const ITEM_COLUMNS: [&str; 6] = ["Title", "Artist", "Album", "Year", "Length", "Format"];
const ALBUM_COLUMNS: [&str; 4] = ["Album", "Artist", "Year", "Album Artist"];

#[component]
pub fn LibraryTableView(
    rows: TableRows,
    loading: bool,
    on_item_click: EventHandler<i64>,
    on_album_click: EventHandler<AlbumSummary>,
) -> Element {
    // First load: nothing to keep on screen yet.
    if loading && rows.is_empty() {
        return rsx! {
            LoadingSpinner { message: "Loading library...".to_string() }
        };
    }

    let columns: &[&str] = match &rows {
        TableRows::Albums(_) => &ALBUM_COLUMNS,
        _ => &ITEM_COLUMNS,
    };
    let column_count = columns.len();
    let dim = if loading { "opacity-50" } else { "" };

    rsx! {
        div { class: "overflow-x-auto rounded-lg border border-gray-800 {dim}",
            table { class: "w-full text-sm text-left",
                thead { class: "bg-gray-800 text-gray-400 uppercase text-xs",
                    tr {
                        for column in columns.iter() {
                            th { key: "{column}", class: "px-4 py-2", "{column}" }
                        }
                    }
                }
                tbody {
                    match rows {
                        TableRows::Items(items) => rsx! {
                            for row in items {
                                ItemRowView { key: "{row.id}", row, on_click: on_item_click }
                            }
                        },
                        TableRows::Albums(albums) => rsx! {
                            for (i, row) in albums.into_iter().enumerate() {
                                AlbumRowView { key: "{i}", row, on_click: on_album_click }
                            }
                        },
                        TableRows::Empty(message) => rsx! {
                            tr {
                                td {
                                    class: "px-4 py-8 text-center text-gray-500",
                                    colspan: "{column_count}",
                                    "{message}"
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

const ROW_CLASS: &str = "border-t border-gray-800 hover:bg-gray-800/60 cursor-pointer";

#[component]
fn ItemRowView(row: ItemRow, on_click: EventHandler<i64>) -> Element {
    let id = row.id;
    rsx! {
        tr { class: ROW_CLASS, onclick: move |_| on_click.call(id),
            td { class: "px-4 py-2 text-white", "{row.title}" }
            td { class: "px-4 py-2", "{row.artist}" }
            td { class: "px-4 py-2", "{row.album}" }
            td { class: "px-4 py-2", "{row.year}" }
            td { class: "px-4 py-2 tabular-nums", "{row.length}" }
            td { class: "px-4 py-2 text-gray-400", "{row.format}" }
        }
    }
}

#[component]
fn AlbumRowView(row: AlbumRow, on_click: EventHandler<AlbumSummary>) -> Element {
    let source = row.source.clone();
    rsx! {
        tr {
            class: ROW_CLASS,
            onclick: move |_| on_click.call(source.clone()),
            td { class: "px-4 py-2 text-white", "{row.album}" }
            td { class: "px-4 py-2", "{row.artist}" }
            td { class: "px-4 py-2", "{row.year}" }
            td { class: "px-4 py-2 text-gray-400", "{row.album_artist}" }
        }
    }
}

#[component]
pub fn PaginationBar(
    controls: PaginationControls,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let page_count = controls.page_count.max(1);

    rsx! {
        nav { class: "flex items-center gap-2", aria_label: "Pagination",
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                disabled: controls.previous_disabled,
                onclick: move |_| on_previous.call(()),
                ChevronLeftIcon { class: "w-4 h-4" }
                "Previous"
            }
            span { class: "tabular-nums", "Page {controls.page} of {page_count}" }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                disabled: controls.next_disabled,
                onclick: move |_| on_next.call(()),
                "Next"
                ChevronRightIcon { class: "w-4 h-4" }
            }
        }
    }
}
