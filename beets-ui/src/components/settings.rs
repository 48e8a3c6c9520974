//! Settings page view

use crate::components::icons::{AlertTriangleIcon, CheckIcon, RefreshIcon, XIcon};
use crate::components::{
    Button, ButtonSize, ButtonVariant, ErrorBanner, LoadingSpinner, Modal, TextArea,
};
use beets_core::settings::{entries, HealthReport, HealthTone, Loadable, MaintenanceAction, SettingsPanel};
use dioxus::prelude::*;
use serde_json::Value;

#[component]
pub fn SettingsView(
    state: ReadStore<SettingsPanel>,
    /// Backend origin; empty when served by the backend itself
    api_url: String,
    on_refresh: EventHandler<()>,
    on_draft_input: EventHandler<String>,
    on_save: EventHandler<()>,
    on_request_maintenance: EventHandler<MaintenanceAction>,
    on_confirm_maintenance: EventHandler<()>,
    on_cancel_maintenance: EventHandler<()>,
) -> Element {
    let panel = state.read();
    let health = panel.health().clone();
    let report = panel.health_report();
    let info = panel.info().clone();
    let plugins = panel.plugins().clone();
    let config_loaded = panel.config().loaded().is_some();
    let config_error = match panel.config() {
        Loadable::Failed(message) => Some(message.clone()),
        _ => None,
    };
    let draft = panel.draft().to_string();
    let saving = panel.is_saving();
    let maintenance_running = panel.is_running_maintenance();
    let confirming = panel.confirming();
    drop(panel);

    let dialog_open_memo = use_memo(move || state.read().confirming().is_some());
    let dialog_open: ReadSignal<bool> = dialog_open_memo.into();

    rsx! {
        div { class: "container mx-auto px-6 py-8 flex flex-col gap-8",
            div { class: "flex items-center justify-between",
                div {
                    h1 { class: "text-2xl font-bold text-white", "Settings" }
                    p { class: "text-xs text-gray-500 font-mono mt-1",
                        if api_url.is_empty() {
                            "API: same origin"
                        } else {
                            "API: {api_url}"
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Small,
                    onclick: move |_| on_refresh.call(()),
                    RefreshIcon { class: "w-4 h-4" }
                    "Refresh"
                }
            }

            Section { title: "Installation",
                match (&health, report) {
                    (_, Some(report)) => rsx! {
                        HealthReportView { report }
                    },
                    (Loadable::Failed(message), None) => rsx! {
                        ErrorBanner { message: message.clone(), on_retry: Some(on_refresh) }
                    },
                    _ => rsx! {
                        LoadingSpinner { message: "Checking installation...".to_string() }
                    },
                }
            }

            Section { title: "Beets Info",
                EntriesView { section: info, empty: "No information available", on_retry: on_refresh }
            }

            Section { title: "Plugins",
                EntriesView { section: plugins, empty: "No plugins enabled", on_retry: on_refresh }
            }

            Section { title: "Configuration",
                if let Some(message) = config_error {
                    ErrorBanner { message, on_retry: Some(on_refresh) }
                } else if !config_loaded {
                    LoadingSpinner { message: "Loading configuration...".to_string() }
                } else {
                    div { class: "flex flex-col gap-3",
                        TextArea {
                            value: draft,
                            on_input: on_draft_input,
                            disabled: saving,
                        }
                        div { class: "flex justify-end",
                            Button {
                                variant: ButtonVariant::Primary,
                                size: ButtonSize::Medium,
                                loading: saving,
                                onclick: move |_| on_save.call(()),
                                "Save Configuration"
                            }
                        }
                    }
                }
            }

            Section { title: "Database Maintenance",
                div { class: "flex gap-3",
                    for (action, label) in [MaintenanceAction::Initialize, MaintenanceAction::Reset]
                        .map(|action| (action, action.title()))
                    {
                        Button {
                            key: "{label}",
                            variant: ButtonVariant::Danger,
                            size: ButtonSize::Medium,
                            disabled: maintenance_running,
                            onclick: move |_| on_request_maintenance.call(action),
                            "{label}"
                        }
                    }
                }
            }
        }

        MaintenanceConfirmDialog {
            is_open: dialog_open,
            action: confirming,
            on_confirm: on_confirm_maintenance,
            on_cancel: on_cancel_maintenance,
        }
    }
}

#[component]
fn Section(title: &'static str, children: Element) -> Element {
    rsx! {
        section { class: "bg-gray-800/50 rounded-lg border border-gray-800 p-6",
            h2 { class: "text-lg font-semibold text-white mb-4", "{title}" }
            {children}
        }
    }
}

#[component]
fn HealthReportView(report: HealthReport) -> Element {
    let banner = match report.tone {
        HealthTone::Success => "bg-green-900/50 border-green-700 text-green-100",
        HealthTone::Warning => "bg-yellow-900/50 border-yellow-700 text-yellow-100",
        HealthTone::Danger => "bg-red-900/50 border-red-700 text-red-100",
    };

    rsx! {
        div { class: "border rounded-lg px-4 py-3 mb-4 {banner}", "{report.headline}" }
        ul { class: "flex flex-col gap-2 text-sm",
            for line in report.lines {
                li { key: "{line.text}", class: line_class(line.tone),
                    if line.ok {
                        CheckIcon { class: "w-4 h-4" }
                    } else if line.tone == HealthTone::Danger {
                        XIcon { class: "w-4 h-4" }
                    } else {
                        AlertTriangleIcon { class: "w-4 h-4" }
                    }
                    span { class: "text-gray-200", "{line.text}" }
                }
            }
        }
    }
}

fn line_class(tone: HealthTone) -> &'static str {
    match tone {
        HealthTone::Success => "flex items-center gap-2 text-green-400",
        HealthTone::Warning => "flex items-center gap-2 text-yellow-400",
        HealthTone::Danger => "flex items-center gap-2 text-red-400",
    }
}

/// Asks before touching the library database. The confirm button names the
/// action so a misclick on the wrong button is caught here.
#[component]
fn MaintenanceConfirmDialog(
    is_open: ReadSignal<bool>,
    action: Option<MaintenanceAction>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Modal { is_open, on_close: move |_| on_cancel.call(()),
            if let Some(action) = action {
                div { class: "bg-gray-800 rounded-lg p-6 max-w-md w-full mx-4 border border-red-900/60",
                    div { class: "flex items-center gap-3 mb-4",
                        AlertTriangleIcon { class: "w-6 h-6 text-red-400" }
                        h2 { class: "text-xl font-bold text-white", {action.title()} }
                    }
                    p { class: "text-gray-300 mb-6", {action.confirmation()} }
                    div { class: "flex gap-3 justify-end",
                        Button {
                            variant: ButtonVariant::Secondary,
                            size: ButtonSize::Medium,
                            onclick: move |_| on_cancel.call(()),
                            "Keep Database"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            size: ButtonSize::Medium,
                            onclick: move |_| on_confirm.call(()),
                            {action.title()}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EntriesView(
    section: Loadable<Value>,
    empty: &'static str,
    on_retry: EventHandler<()>,
) -> Element {
    match section {
        Loadable::Loading => rsx! {
            LoadingSpinner {}
        },
        Loadable::Failed(message) => rsx! {
            ErrorBanner { message, on_retry: Some(on_retry) }
        },
        Loadable::Loaded(value) => {
            let rows = entries(&value);
            if rows.is_empty() {
                return rsx! {
                    p { class: "text-sm text-gray-500", "{empty}" }
                };
            }
            rsx! {
                table { class: "w-full text-sm",
                    tbody {
                        for (key, value) in rows {
                            tr { key: "{key}", class: "border-t border-gray-800 first:border-t-0",
                                td { class: "py-1.5 pr-6 text-gray-400 font-mono align-top whitespace-nowrap", "{key}" }
                                td { class: "py-1.5 text-gray-200 break-all", "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
