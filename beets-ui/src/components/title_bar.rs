//! Title bar with page navigation and the connection badge

use crate::components::icons::{AlertTriangleIcon, LaptopIcon, ServerIcon, SettingsIcon};
use crate::components::{ChromelessButton, InlineSpinner};
use beets_core::connection::{BadgeTone, ConnectionStatus};
use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

#[component]
pub fn TitleBarView(
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    connection: ConnectionStatus,
    on_settings_click: EventHandler<()>,
    #[props(default)] settings_active: bool,
) -> Element {
    let settings_class = if settings_active {
        "p-1.5 rounded text-white bg-gray-700"
    } else {
        "p-1.5 rounded text-gray-400 hover:text-white hover:bg-gray-700 transition-colors"
    };

    rsx! {
        header {
            id: "title-bar",
            class: "shrink-0 h-12 bg-gray-950 flex items-center justify-between px-4 border-b border-gray-800",
            div { class: "flex gap-2 items-center",
                span { class: "text-white font-semibold mr-4", "beets" }
                for item in nav_items.iter() {
                    NavButton {
                        key: "{item.id}",
                        is_active: item.is_active,
                        on_click: {
                            let id = item.id.clone();
                            move |_| on_nav_click.call(id.clone())
                        },
                        "{item.label}"
                    }
                }
            }
            div { class: "flex items-center gap-3",
                ConnectionBadge {
                    status: connection,
                    on_click: move |_| on_settings_click.call(()),
                }
                ChromelessButton {
                    class: Some(settings_class.to_string()),
                    aria_label: Some("Settings".to_string()),
                    onclick: move |_| on_settings_click.call(()),
                    SettingsIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}

#[component]
fn NavButton(is_active: bool, on_click: EventHandler<()>, children: Element) -> Element {
    let class = if is_active {
        "text-white text-sm px-3 py-1.5 rounded bg-gray-700 transition-colors"
    } else {
        "text-gray-400 text-sm px-3 py-1.5 rounded hover:bg-gray-700 hover:text-white transition-colors"
    };

    rsx! {
        ChromelessButton {
            class: Some(class.to_string()),
            onclick: move |_| on_click.call(()),
            {children}
        }
    }
}

/// Connection mode badge. Once resolved it links to the settings page.
#[component]
fn ConnectionBadge(status: ConnectionStatus, on_click: EventHandler<()>) -> Element {
    let color = match status.tone() {
        BadgeTone::Neutral => "bg-gray-600",
        BadgeTone::Success => "bg-green-700 hover:bg-green-600",
        BadgeTone::Info => "bg-indigo-700 hover:bg-indigo-600",
        BadgeTone::Danger => "bg-red-700 hover:bg-red-600",
    };
    let class = format!(
        "inline-flex items-center gap-1.5 text-xs font-medium text-white px-2 py-1 rounded {color}"
    );
    let label = status.label().to_string();

    let icon = match &status {
        ConnectionStatus::Checking => rsx! {
            InlineSpinner { class: "w-3 h-3 animate-spin" }
        },
        ConnectionStatus::Local => rsx! {
            LaptopIcon { class: "w-3 h-3" }
        },
        ConnectionStatus::Remote { .. } => rsx! {
            ServerIcon { class: "w-3 h-3" }
        },
        ConnectionStatus::Unreachable => rsx! {
            AlertTriangleIcon { class: "w-3 h-3" }
        },
    };

    if !status.links_to_settings() {
        return rsx! {
            span { class: "{class}", {icon} span { "{label}" } }
        };
    }

    rsx! {
        ChromelessButton {
            class: Some(class),
            title: Some("Connection settings".to_string()),
            onclick: move |_| on_click.call(()),
            {icon}
            span { "{label}" }
        }
    }
}
