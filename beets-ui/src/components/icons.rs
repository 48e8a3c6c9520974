//! Icons from the Lucide set (https://lucide.dev)
//!
//! Stroke is `currentColor`, so icons take the text colour of their parent.

use dioxus::prelude::*;

fn lucide(class: &'static str, body: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {body}
        }
    }
}

/// Close / dismiss
#[component]
pub fn XIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    lucide(
        class,
        rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
    )
}

/// Check mark
#[component]
pub fn CheckIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    lucide(
        class,
        rsx! {
            path { d: "M20 6 9 17l-5-5" }
        },
    )
}

/// Warning triangle
#[component]
pub fn AlertTriangleIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    lucide(
        class,
        rsx! {
            path { d: "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3" }
            path { d: "M12 9v4" }
            path { d: "M12 17h.01" }
        },
    )
}

/// Previous page
#[component]
pub fn ChevronLeftIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    lucide(
        class,
        rsx! {
            path { d: "m15 18-6-6 6-6" }
        },
    )
}

/// Next page
#[component]
pub fn ChevronRightIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    lucide(
        class,
        rsx! {
            path { d: "m9 18 6-6-6-6" }
        },
    )
}

/// Spinner, use with `animate-spin`
#[component]
pub fn LoaderIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    lucide(
        class,
        rsx! {
            path { d: "M12 2v4" }
            path { d: "m16.2 7.8 2.9-2.9" }
            path { d: "M18 12h4" }
            path { d: "m16.2 16.2 2.9 2.9" }
            path { d: "M12 18v4" }
            path { d: "m4.9 19.1 2.9-2.9" }
            path { d: "M2 12h4" }
            path { d: "m4.9 4.9 2.9 2.9" }
        },
    )
}

/// Reload
#[component]
pub fn RefreshIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    lucide(
        class,
        rsx! {
            path { d: "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" }
            path { d: "M21 3v5h-5" }
            path { d: "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" }
            path { d: "M8 16H3v5" }
        },
    )
}

/// Gear
#[component]
pub fn SettingsIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    lucide(
        class,
        rsx! {
            path { d: "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" }
            circle { cx: "12", cy: "12", r: "3" }
        },
    )
}

/// Folder (import)
#[component]
pub fn FolderIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    lucide(
        class,
        rsx! {
            path { d: "M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z" }
        },
    )
}

/// Music note (missing album art)
#[component]
pub fn MusicIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    lucide(
        class,
        rsx! {
            path { d: "M9 18V5l12-2v13" }
            circle { cx: "6", cy: "18", r: "3" }
            circle { cx: "18", cy: "16", r: "3" }
        },
    )
}

/// Terminal prompt (command console)
#[component]
pub fn TerminalIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    lucide(
        class,
        rsx! {
            path { d: "m4 17 6-6-6-6" }
            path { d: "M12 19h8" }
        },
    )
}

/// Magnifying glass
#[component]
pub fn SearchIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    lucide(
        class,
        rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        },
    )
}

/// Laptop (local connection)
#[component]
pub fn LaptopIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    lucide(
        class,
        rsx! {
            path { d: "M20 16V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v9m16 0H4m16 0 1.28 2.55a1 1 0 0 1-.9 1.45H3.62a1 1 0 0 1-.9-1.45L4 16" }
        },
    )
}

/// Server rack (remote connection)
#[component]
pub fn ServerIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    lucide(
        class,
        rsx! {
            rect { x: "2", y: "2", width: "20", height: "8", rx: "2", ry: "2" }
            rect { x: "2", y: "14", width: "20", height: "8", rx: "2", ry: "2" }
            path { d: "M6 6h.01" }
            path { d: "M6 18h.01" }
        },
    )
}
