//! Inline failure message for a section that could not load

use crate::components::icons::{AlertTriangleIcon, RefreshIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(
    message: String,
    /// Shows a retry button when set
    #[props(default)]
    on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            role: "alert",
            class: "flex items-start gap-3 bg-red-900/40 border border-red-800 text-red-100 px-4 py-3 rounded-lg",
            AlertTriangleIcon { class: "w-5 h-5 mt-0.5 shrink-0 text-red-400" }
            p { class: "flex-1 text-sm break-words", "{message}" }
            if let Some(on_retry) = on_retry {
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Small,
                    onclick: move |_| on_retry.call(()),
                    RefreshIcon { class: "w-4 h-4" }
                    "Retry"
                }
            }
        }
    }
}
