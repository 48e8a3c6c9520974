//! Modal built on the native `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap and Escape-to-close.
//! The dialog manages its own display, so layout classes go on the inner
//! container, never on the `<dialog>` itself. `showModal()` throws when the
//! dialog is already open, hence the `open` attribute check.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;
use dioxus::prelude::*;
use tracing::warn;
use wasm_bindgen_x::JsCast;

static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Call a zero-argument method (`showModal` / `close`) on the dialog element.
fn call_dialog_method(dialog_id: &str, method: &str, want_open: bool) {
    let Some(element) = web_sys_x::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(dialog_id))
    else {
        return;
    };
    if element.has_attribute("open") == want_open {
        return;
    }
    if let Ok(func) = js_sys_x::Reflect::get(&element, &method.into()) {
        if let Some(func) = func.dyn_ref::<js_sys_x::Function>() {
            if let Err(e) = func.call0(&element) {
                warn!("dialog {} failed on {}: {:?}", dialog_id, method, e);
            }
        }
    }
}

#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    /// Escape key, backdrop click or the close button
    on_close: EventHandler<()>,
    children: Element,
    #[props(default)] class: Option<String>,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{}", id)
    });
    let effect_id = dialog_id.clone();

    use_effect(move || {
        if is_open() {
            call_dialog_method(&effect_id, "showModal", true);
        } else {
            call_dialog_method(&effect_id, "close", false);
        }
    });

    let dialog_class = class.unwrap_or_default();

    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/80 {dialog_class}",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center",
                    onclick: move |_| on_close.call(()),
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}

/// Titled panel for use inside a [`Modal`]
#[component]
pub fn ModalPanel(
    title: String,
    on_close: EventHandler<()>,
    #[props(default = "max-w-3xl")] width: &'static str,
    children: Element,
) -> Element {
    rsx! {
        div { class: "bg-gray-800 rounded-lg shadow-xl w-[90vw] {width} max-h-[85vh] flex flex-col",
            div { class: "flex items-center justify-between px-6 py-4 border-b border-gray-700",
                h2 { class: "text-lg font-semibold text-white truncate", "{title}" }
                ChromelessButton {
                    class: Some("text-gray-400 hover:text-white".to_string()),
                    aria_label: Some("Close".to_string()),
                    onclick: move |_| on_close.call(()),
                    XIcon { class: "w-5 h-5" }
                }
            }
            div { class: "p-6 overflow-y-auto", {children} }
        }
    }
}
