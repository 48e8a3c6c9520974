//! Search box, sort, page size and artist filter

use crate::components::icons::{SearchIcon, XIcon};
use crate::components::{
    Button, ButtonSize, ButtonVariant, SelectChoice, SelectField, TextInput, TextInputSize,
};
use beets_core::config::PAGE_SIZE_OPTIONS;
use beets_core::SortKey;
use dioxus::prelude::*;

#[component]
pub fn LibraryToolbar(
    search_value: String,
    on_search_input: EventHandler<String>,
    on_search_submit: EventHandler<()>,
    show_clear: bool,
    on_clear: EventHandler<()>,
    loading: bool,
    sort: SortKey,
    on_sort_change: EventHandler<SortKey>,
    page_size: u32,
    on_page_size_change: EventHandler<u32>,
    artists: Vec<String>,
    selected_artist: String,
    on_artist_change: EventHandler<String>,
    /// Bumped whenever a listing request settles
    revision: u64,
) -> Element {
    // The native select keeps whatever the user picked; re-keying it makes
    // it show the artist the listing actually has.
    let mut ignored_picks = use_signal(|| 0u32);
    let artist_key = artist_select_key(&selected_artist, revision, ignored_picks());

    let sort_choices: Vec<SelectChoice> = SortKey::ALL
        .iter()
        .map(|key| SelectChoice::new(key.as_str(), format!("Sort: {}", key.label())))
        .collect();
    let size_choices: Vec<SelectChoice> = PAGE_SIZE_OPTIONS
        .iter()
        .map(|size| SelectChoice::new(size.to_string(), format!("{} per page", size)))
        .collect();
    let artist_choices: Vec<SelectChoice> = artists
        .iter()
        .map(|artist| SelectChoice::new(artist.clone(), artist.clone()))
        .collect();

    rsx! {
        div { class: "flex flex-wrap items-center gap-3",
            div { class: "flex items-center gap-2 flex-1 min-w-[16rem]",
                TextInput {
                    value: search_value,
                    on_input: on_search_input,
                    on_submit: Some(on_search_submit),
                    size: TextInputSize::Small,
                    placeholder: Some("Search library (beets query syntax)"),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Small,
                    disabled: loading,
                    onclick: move |_| on_search_submit.call(()),
                    SearchIcon { class: "w-4 h-4" }
                    "Search"
                }
                if show_clear {
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        disabled: loading,
                        onclick: move |_| on_clear.call(()),
                        XIcon { class: "w-4 h-4" }
                        "Clear"
                    }
                }
            }
            SelectField {
                key: "{artist_key}",
                value: selected_artist,
                choices: artist_choices,
                placeholder: Some("All artists".to_string()),
                disabled: loading,
                aria_label: Some("Filter by artist".to_string()),
                onchange: move |artist: String| {
                    if artist.trim().is_empty() {
                        ignored_picks += 1;
                    } else {
                        on_artist_change.call(artist);
                    }
                },
            }
            SelectField {
                value: sort.as_str().to_string(),
                choices: sort_choices,
                disabled: loading,
                aria_label: Some("Sort by".to_string()),
                onchange: move |value: String| {
                    if let Some(key) = SortKey::parse(&value) {
                        on_sort_change.call(key);
                    }
                },
            }
            SelectField {
                value: page_size.to_string(),
                choices: size_choices,
                disabled: loading,
                aria_label: Some("Items per page".to_string()),
                onchange: move |value: String| {
                    if let Ok(size) = value.parse::<u32>() {
                        on_page_size_change.call(size);
                    }
                },
            }
        }
    }
}

fn artist_select_key(selected: &str, revision: u64, ignored_picks: u32) -> String {
    format!("{}-{}-{}", selected, revision, ignored_picks)
}
