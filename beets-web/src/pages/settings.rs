use crate::app_service::use_app;
use beets_core::settings::MaintenanceAction;
use beets_ui::stores::AppStateStoreExt;
use beets_ui::SettingsView;
use dioxus::prelude::*;

#[component]
pub fn Settings() -> Element {
    let app = use_app();

    use_hook({
        let app = app.clone();
        move || app.load_settings()
    });

    rsx! {
        SettingsView {
            state: app.state.settings(),
            api_url: app.config.base_url.clone(),
            on_refresh: {
                let app = app.clone();
                move |_| {
                    app.load_settings();
                    app.check_connection();
                }
            },
            on_draft_input: {
                let app = app.clone();
                move |text: String| app.edit_config_draft(text)
            },
            on_save: {
                let app = app.clone();
                move |_| app.save_config()
            },
            on_request_maintenance: {
                let app = app.clone();
                move |action: MaintenanceAction| app.request_maintenance(action)
            },
            on_confirm_maintenance: {
                let app = app.clone();
                move |_| app.confirm_maintenance()
            },
            on_cancel_maintenance: move |_| app.cancel_maintenance(),
        }
    }
}
