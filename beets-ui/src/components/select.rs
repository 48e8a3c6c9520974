//! Native `<select>` styled for the dark theme

use dioxus::prelude::*;

/// One option of a [`SelectField`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectChoice {
    pub value: String,
    pub label: String,
}

impl SelectChoice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[component]
pub fn SelectField(
    value: String,
    choices: Vec<SelectChoice>,
    onchange: EventHandler<String>,
    /// Label of a leading empty option, e.g. "All artists"
    #[props(default)]
    placeholder: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] aria_label: Option<String>,
) -> Element {
    rsx! {
        select {
            class: "bg-gray-800 border border-gray-700 rounded-lg px-3 py-1.5 text-sm text-gray-300 focus:outline-none focus:ring-1 focus:ring-indigo-500/50 disabled:opacity-50",
            disabled,
            aria_label: aria_label.as_deref(),
            onchange: move |e| onchange.call(e.value()),
            if let Some(placeholder) = &placeholder {
                option { value: "", selected: value.is_empty(), "{placeholder}" }
            }
            for choice in choices.iter() {
                option {
                    key: "{choice.value}",
                    value: "{choice.value}",
                    selected: choice.value == value,
                    "{choice.label}"
                }
            }
        }
    }
}
