use crate::components::icons::LoaderIcon;
use dioxus::prelude::*;

/// Centered spinner with a message, for whole sections
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-12",
            div { class: "animate-spin rounded-full h-10 w-10 border-b-2 border-indigo-500" }
            p { class: "ml-4 text-gray-300", "{message}" }
        }
    }
}

/// Small spinner for use inside text (badges, art placeholders)
#[component]
pub fn InlineSpinner(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        span { role: "status", class: "inline-flex",
            LoaderIcon { class }
            span { class: "sr-only", "Loading..." }
        }
    }
}
