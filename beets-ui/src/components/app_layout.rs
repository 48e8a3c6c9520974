//! App layout view component

use dioxus::prelude::*;

/// Title bar on top, scrolling page content below, and a slot for overlays
/// (toasts, modals).
#[component]
pub fn AppLayoutView(
    children: Element,
    #[props(default)] title_bar: Option<Element>,
    #[props(default)] extra: Option<Element>,
) -> Element {
    rsx! {
        div { class: "h-screen flex flex-col bg-gray-900 text-gray-200",
            if let Some(tb) = title_bar {
                {tb}
            }
            main { class: "flex-1 overflow-y-auto", {children} }
            if let Some(ex) = extra {
                {ex}
            }
        }
    }
}
