//! Buttons

use crate::components::icons::LoaderIcon;
use dioxus::prelude::*;

/// Unstyled button carrying the disabled/loading behaviour shared by every
/// button in the app. Clicks are swallowed while disabled or loading.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            r#type: r#type.unwrap_or("button"),
            disabled: is_disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if is_disabled { Some("true") } else { None },
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Indigo background - run, search, save
    Primary,
    /// Gray background - clear, cancel, pagination
    Secondary,
    /// Red background - database maintenance
    Danger,
    /// Text only with hover
    Ghost,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
}

/// Styled button. While `loading` it is disabled and shows a spinner with
/// "Loading..." in place of its label.
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let (base, padding) = match size {
        ButtonSize::Small => (
            "inline-flex items-center justify-center gap-2 text-sm rounded-lg transition-colors",
            "px-3 py-1.5",
        ),
        ButtonSize::Medium => (
            "inline-flex items-center justify-center gap-2 rounded-lg transition-colors",
            "px-4 py-2",
        ),
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-indigo-600 hover:bg-indigo-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Secondary => {
            "bg-gray-700 hover:bg-gray-600 text-gray-300 disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Danger => {
            "bg-red-600 hover:bg-red-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Ghost => {
            "text-gray-400 hover:text-white hover:bg-gray-700/50 disabled:opacity-50"
        }
    };

    let computed_class = match &class {
        Some(extra) => format!("{base} {padding} {variant_class} {extra}"),
        None => format!("{base} {padding} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            disabled,
            loading,
            r#type,
            class: Some(computed_class),
            onclick,
            if loading {
                LoaderIcon { class: "w-4 h-4 animate-spin" }
                span { "Loading..." }
            } else {
                {children}
            }
        }
    }
}
