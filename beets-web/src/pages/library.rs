use crate::app_service::use_app;
use beets_core::models::AlbumSummary;
use beets_core::SortKey;
use beets_ui::stores::AppStateStoreExt;
use beets_ui::LibraryView;
use dioxus::prelude::*;

#[component]
pub fn Library() -> Element {
    let app = use_app();

    use_hook({
        let app = app.clone();
        move || app.load_library()
    });

    // Pass the lens directly; LibraryView subscribes to what it reads
    let state = app.state.library();
    let search_value = app.state.search_input().read().clone();

    rsx! {
        LibraryView {
            state,
            search_value,
            on_search_input: {
                let app = app.clone();
                move |text: String| app.set_search_input(text)
            },
            on_search_submit: {
                let app = app.clone();
                move |_| app.search()
            },
            on_clear: {
                let app = app.clone();
                move |_| app.clear_filter()
            },
            on_sort_change: {
                let app = app.clone();
                move |sort: SortKey| app.set_sort(sort)
            },
            on_page_size_change: {
                let app = app.clone();
                move |size: u32| app.set_page_size(size)
            },
            on_artist_change: {
                let app = app.clone();
                move |artist: String| app.filter_by_artist(artist)
            },
            on_previous: {
                let app = app.clone();
                move |_| app.previous_page()
            },
            on_next: {
                let app = app.clone();
                move |_| app.next_page()
            },
            on_item_click: {
                let app = app.clone();
                move |id: i64| app.open_item(id)
            },
            on_album_click: move |album: AlbumSummary| app.open_album(album),
        }
    }
}
