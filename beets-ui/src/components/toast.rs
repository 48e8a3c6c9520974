//! Toast stack, bottom right

use crate::components::icons::{AlertTriangleIcon, CheckIcon, XIcon};
use crate::components::ChromelessButton;
use crate::stores::Toast;
use beets_core::NoticeLevel;
use dioxus::prelude::*;

#[component]
pub fn ToastStackView(toasts: Vec<Toast>, on_dismiss: EventHandler<u64>) -> Element {
    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 max-w-md",
            for toast in toasts {
                ToastView {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    on_dismiss: move |id| on_dismiss.call(id),
                }
            }
        }
    }
}

#[component]
fn ToastView(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let (color, role) = match toast.level {
        NoticeLevel::Success => ("bg-green-600", "status"),
        NoticeLevel::Error => ("bg-red-600", "alert"),
    };
    let id = toast.id;

    rsx! {
        div { class: "{color} text-white px-5 py-3 rounded-lg shadow-lg", role,
            div { class: "flex items-center justify-between gap-4",
                match toast.level {
                    NoticeLevel::Success => rsx! {
                        CheckIcon { class: "w-4 h-4 flex-shrink-0" }
                    },
                    NoticeLevel::Error => rsx! {
                        AlertTriangleIcon { class: "w-4 h-4 flex-shrink-0" }
                    },
                }
                span { class: "flex-1 break-words", "{toast.message}" }
                ChromelessButton {
                    class: Some("text-white hover:text-gray-200".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| on_dismiss.call(id),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
