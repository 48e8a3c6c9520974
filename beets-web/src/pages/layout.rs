use crate::app_service::use_app;
use crate::Route;
use beets_ui::stores::{AppStateStoreExt, ToastStateStoreExt};
use beets_ui::{AppLayoutView, ItemDetailModal, NavItem, TitleBarView, ToastStackView};
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    let app = use_app();
    let current_route = use_route::<Route>();

    use_hook({
        let app = app.clone();
        move || app.check_connection()
    });

    let nav_items = vec![
        NavItem {
            id: "library".to_string(),
            label: "Library".to_string(),
            is_active: matches!(current_route, Route::Library {}),
        },
        NavItem {
            id: "commands".to_string(),
            label: "Commands".to_string(),
            is_active: matches!(current_route, Route::Commands {}),
        },
        NavItem {
            id: "import".to_string(),
            label: "Import".to_string(),
            is_active: matches!(current_route, Route::Import {}),
        },
    ];
    let connection = app.state.connection().read().clone();
    let toasts = app.state.toasts().toasts().read().clone();

    rsx! {
        AppLayoutView {
            title_bar: rsx! {
                TitleBarView {
                    nav_items,
                    on_nav_click: move |id: String| {
                        match id.as_str() {
                            "commands" => navigator().push(Route::Commands {}),
                            "import" => navigator().push(Route::Import {}),
                            _ => navigator().push(Route::Library {}),
                        };
                    },
                    connection,
                    on_settings_click: move |_| {
                        navigator().push(Route::Settings {});
                    },
                    settings_active: matches!(current_route, Route::Settings {}),
                }
            },
            extra: rsx! {
                ItemDetailModal {
                    state: app.state.detail(),
                    on_close: {
                        let app = app.clone();
                        move |_| app.close_item()
                    },
                }
                ToastStackView {
                    toasts,
                    on_dismiss: {
                        let app = app.clone();
                        move |id| app.dismiss_toast(id)
                    },
                }
            },
            Outlet::<Route> {}
        }
    }
}
