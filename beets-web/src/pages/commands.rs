use crate::app_service::use_app;
use beets_ui::stores::AppStateStoreExt;
use beets_ui::CommandConsoleView;
use dioxus::prelude::*;

#[component]
pub fn Commands() -> Element {
    let app = use_app();
    let command_value = app.state.command_input().read().clone();

    rsx! {
        CommandConsoleView {
            state: app.state.console(),
            command_value,
            on_command_input: {
                let app = app.clone();
                move |text: String| app.set_command_input(text)
            },
            on_execute: {
                let app = app.clone();
                move |_| app.run_command()
            },
            on_clear: move |_| app.clear_console(),
        }
    }
}
