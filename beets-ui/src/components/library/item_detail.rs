//! Item detail modal

use crate::components::icons::MusicIcon;
use crate::components::{ErrorBanner, InlineSpinner, LoadingSpinner, Modal, ModalPanel};
use beets_core::detail::{ArtView, DetailBody, ItemDetail};
use dioxus::prelude::*;

#[component]
pub fn ItemDetailModal(state: ReadStore<ItemDetail>, on_close: EventHandler<()>) -> Element {
    let is_open_memo = use_memo(move || state.read().is_open());
    let is_open: ReadSignal<bool> = is_open_memo.into();
    let panel = state.read().panel();

    rsx! {
        Modal { is_open, on_close: move |_| on_close.call(()),
            if let Some(panel) = panel {
                ModalPanel { title: panel.title, on_close: move |_| on_close.call(()),
                    match panel.body {
                        DetailBody::Loading => rsx! {
                            LoadingSpinner { message: "Loading item details...".to_string() }
                        },
                        DetailBody::Failed(message) => rsx! {
                            ErrorBanner { message }
                        },
                        DetailBody::Loaded { fields, art } => rsx! {
                            div { class: "flex flex-col md:flex-row gap-6",
                                AlbumArt { art }
                                dl { class: "grid grid-cols-[max-content_1fr] gap-x-6 gap-y-2 text-sm flex-1",
                                    for (label, value) in fields {
                                        div { key: "{label}", class: "contents",
                                            dt { class: "text-gray-400", "{label}" }
                                            dd { class: "text-gray-100 break-all", "{value}" }
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn AlbumArt(art: ArtView) -> Element {
    rsx! {
        div { class: "w-48 h-48 shrink-0 rounded-lg bg-gray-900 flex items-center justify-center overflow-hidden",
            match art {
                ArtView::Loading => rsx! {
                    InlineSpinner { class: "w-6 h-6 animate-spin" }
                },
                ArtView::Image { src } => rsx! {
                    img { class: "w-full h-full object-cover", src, alt: "Album art" }
                },
                ArtView::Placeholder => rsx! {
                    div { class: "flex flex-col items-center gap-2 text-gray-500 text-xs text-center px-4",
                        MusicIcon { class: "w-10 h-10" }
                        "No album art available"
                    }
                },
            }
        }
    }
}
