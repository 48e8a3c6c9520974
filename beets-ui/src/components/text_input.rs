//! Text inputs

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextInputSize {
    Small,
    Medium,
}

/// Single-line text input. Enter calls `on_submit` when given.
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    size: TextInputSize,
    #[props(default)] on_submit: Option<EventHandler<()>>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
    #[props(default)] monospace: bool,
    #[props(default)] id: Option<String>,
) -> Element {
    let padding = match size {
        TextInputSize::Small => "px-2.5 py-1.5 text-sm",
        TextInputSize::Medium => "px-3 py-2",
    };
    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };
    let font_class = if monospace { "font-mono" } else { "" };

    rsx! {
        input {
            r#type: "text",
            class: "w-full bg-gray-800/50 rounded-lg border border-gray-700 focus:outline-none focus:ring-1 focus:ring-indigo-500/50 text-gray-300 placeholder-gray-500 {padding} {disabled_class} {font_class}",
            id: id.as_deref(),
            value: "{value}",
            placeholder,
            disabled,
            autocomplete: "off",
            oninput: move |e| on_input.call(e.value()),
            onkeydown: move |e| {
                if e.key() == Key::Enter {
                    if let Some(handler) = &on_submit {
                        e.prevent_default();
                        handler.call(());
                    }
                }
            },
        }
    }
}

/// Multi-line text area, used by the configuration editor
#[component]
pub fn TextArea(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = 16)] rows: u32,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        textarea {
            class: "w-full bg-gray-900 rounded-lg border border-gray-700 p-3 font-mono text-sm text-gray-200 focus:outline-none focus:ring-1 focus:ring-indigo-500/50",
            rows: "{rows}",
            spellcheck: "false",
            disabled,
            value: "{value}",
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
