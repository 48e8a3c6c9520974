use crate::app_service::use_app;
use beets_ui::stores::AppStateStoreExt;
use beets_ui::ImportFormView;
use dioxus::prelude::*;

#[component]
pub fn Import() -> Element {
    let app = use_app();
    let path_value = app.state.import_path().read().clone();

    rsx! {
        ImportFormView {
            state: app.state.import(),
            path_value,
            on_path_input: {
                let app = app.clone();
                move |text: String| app.set_import_path(text)
            },
            on_import: {
                let app = app.clone();
                move |_| app.run_import()
            },
            on_clear: move |_| app.clear_import(),
        }
    }
}
