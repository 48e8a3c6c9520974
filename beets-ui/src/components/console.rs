//! Command console and import form

use std::sync::atomic::{AtomicU64, Ordering};

use crate::components::icons::{FolderIcon, TerminalIcon, XIcon};
use crate::components::{
    Button, ButtonSize, ButtonVariant, SelectChoice, SelectField, TextInput, TextInputSize,
};
use beets_core::runner::{TranscriptRunner, COMMON_COMMANDS};
use dioxus::prelude::*;

static TRANSCRIPT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Keep the newest output in view.
fn scroll_to_bottom(element_id: &str) {
    if let Some(element) = web_sys_x::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    {
        element.set_scroll_top(element.scroll_height());
    }
}

/// Monospace output pane. Scrolls to the bottom whenever the runner's
/// transcript changes.
#[component]
pub fn TranscriptView(state: ReadStore<TranscriptRunner>) -> Element {
    let element_id = use_hook(|| {
        format!(
            "transcript-{}",
            TRANSCRIPT_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
        )
    });

    use_effect({
        let element_id = element_id.clone();
        move || {
            // Subscribe to transcript changes.
            let _ = state.read().transcript().as_str().len();
            scroll_to_bottom(&element_id);
        }
    });

    let text = state.read().transcript().as_str().to_string();

    rsx! {
        pre {
            id: "{element_id}",
            class: "bg-gray-950 text-gray-200 font-mono text-sm rounded-lg border border-gray-800 p-4 h-96 overflow-y-auto whitespace-pre-wrap",
            "{text}"
        }
    }
}

#[component]
pub fn CommandConsoleView(
    state: ReadStore<TranscriptRunner>,
    command_value: String,
    on_command_input: EventHandler<String>,
    on_execute: EventHandler<()>,
    on_clear: EventHandler<()>,
) -> Element {
    let running = state.read().is_running();
    let presets: Vec<SelectChoice> = COMMON_COMMANDS
        .iter()
        .map(|preset| {
            SelectChoice::new(
                preset.command,
                format!("{} ({})", preset.label, preset.command),
            )
        })
        .collect();

    rsx! {
        div { class: "container mx-auto px-6 py-8 flex flex-col gap-4",
            h1 { class: "text-2xl font-bold text-white flex items-center gap-2",
                TerminalIcon { class: "w-6 h-6" }
                "Command Console"
            }
            SelectField {
                value: String::new(),
                choices: presets,
                placeholder: Some("Select a common command...".to_string()),
                disabled: running,
                aria_label: Some("Common commands".to_string()),
                onchange: move |command: String| {
                    if !command.is_empty() {
                        on_command_input.call(command);
                    }
                },
            }
            div { class: "flex items-center gap-2",
                span { class: "font-mono text-gray-400", "beet" }
                TextInput {
                    value: command_value,
                    on_input: on_command_input,
                    on_submit: Some(on_execute),
                    size: TextInputSize::Medium,
                    placeholder: Some("list artist:Beatles"),
                    disabled: running,
                    monospace: true,
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    loading: running,
                    onclick: move |_| on_execute.call(()),
                    "Execute"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_clear.call(()),
                    XIcon { class: "w-4 h-4" }
                    "Clear Output"
                }
            }
            TranscriptView { state }
        }
    }
}

#[component]
pub fn ImportFormView(
    state: ReadStore<TranscriptRunner>,
    path_value: String,
    on_path_input: EventHandler<String>,
    on_import: EventHandler<()>,
    on_clear: EventHandler<()>,
) -> Element {
    let running = state.read().is_running();

    rsx! {
        div { class: "container mx-auto px-6 py-8 flex flex-col gap-4",
            h1 { class: "text-2xl font-bold text-white flex items-center gap-2",
                FolderIcon { class: "w-6 h-6" }
                "Import Music"
            }
            p { class: "text-sm text-gray-400",
                "Enter a directory on the server running beets. It is passed to "
                code { class: "font-mono", "beet import" }
                "."
            }
            div { class: "flex items-center gap-2",
                TextInput {
                    value: path_value,
                    on_input: on_path_input,
                    on_submit: Some(on_import),
                    size: TextInputSize::Medium,
                    placeholder: Some("/path/to/music"),
                    disabled: running,
                    monospace: true,
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    loading: running,
                    onclick: move |_| on_import.call(()),
                    "Import"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_clear.call(()),
                    "Clear Output"
                }
            }
            TranscriptView { state }
        }
    }
}
