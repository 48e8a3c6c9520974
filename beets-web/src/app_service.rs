//! AppService - owns the reactive state and performs backend requests
//!
//! Every user action follows the same shape: ask the controller in the
//! store for a request (this flips it into its pending state), perform the
//! request in a spawned task, then hand the result back to the controller.
//! Whatever notice comes back is shown as a toast.
//!
//! Tasks are spawned on the root scope so a request outlives the page that
//! started it; its result still lands in the store.
//!
//! Components access AppService via `use_app()` and:
//! - Read state reactively from `app.state`
//! - Call action methods like `app.search()`

use beets_core::browser::{LibraryQuery, PendingQuery};
use beets_core::models::AlbumSummary;
use beets_core::settings::MaintenanceAction;
use beets_core::{BeetsClient, ClientConfig, Notice, SortKey};
use beets_ui::stores::{AppState, AppStateStoreExt, TOAST_TIMEOUT_MS};
use beets_ui::timers::sleep_ms;
use dioxus::prelude::*;
use tracing::{debug, info};

/// Created inside the component tree because `Store<AppState>` is not
/// Send-safe. Access via `use_app()` from any component.
#[derive(Clone)]
pub struct AppService {
    /// Reactive application state
    pub state: Store<AppState>,
    /// HTTP client for the beets API
    pub client: BeetsClient,
    /// Startup configuration
    pub config: ClientConfig,
}

impl AppService {
    pub fn new(config: ClientConfig) -> Self {
        let library = beets_core::browser::LibraryBrowser::new(config.page_size, config.sort);
        Self {
            state: Store::new(AppState::with_library(library)),
            client: BeetsClient::from_config(&config),
            config,
        }
    }

    // =========================================================================
    // Toasts
    // =========================================================================

    /// Show a toast and schedule its dismissal.
    pub fn notify(&self, notice: Notice) {
        notify(self.state, notice);
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.state.toasts().write().dismiss(id);
    }

    // =========================================================================
    // Library
    // =========================================================================

    /// Start the library over from the configured defaults, then load the
    /// first page and the artist list.
    pub fn load_library(&self) {
        self.state
            .library()
            .write()
            .reset(self.config.page_size, self.config.sort);
        self.state.search_input().set(String::new());
        let pending = self.state.library().write().load_page();
        self.run_library_query(pending);
        self.load_artists();
    }

    pub fn load_artists(&self) {
        let state = self.state;
        let client = self.client.clone();
        let request = state.library().write().load_artists();

        spawn_forever(async move {
            let result = client.artists().await;
            if let Some(notice) = state.library().write().apply_artists(request, result) {
                notify(state, notice);
            }
        });
    }

    pub fn next_page(&self) {
        let pending = self.state.library().write().next_page();
        if let Some(pending) = pending {
            self.run_library_query(pending);
        }
    }

    pub fn previous_page(&self) {
        let pending = self.state.library().write().previous_page();
        if let Some(pending) = pending {
            self.run_library_query(pending);
        }
    }

    pub fn set_sort(&self, sort: SortKey) {
        let pending = self.state.library().write().set_sort(sort);
        self.run_library_query(pending);
    }

    pub fn set_page_size(&self, page_size: u32) {
        let pending = self.state.library().write().set_page_size(page_size);
        self.run_library_query(pending);
    }

    pub fn set_search_input(&self, text: String) {
        self.state.search_input().set(text);
    }

    /// Search with the text currently in the search box.
    pub fn search(&self) {
        let query = self.state.search_input().read().clone();
        let pending = self.state.library().write().search(&query);
        self.run_library_query(pending);
    }

    /// Leave search or artist filter.
    pub fn clear_filter(&self) {
        self.state.search_input().set(String::new());
        let pending = self.state.library().write().clear_filter();
        self.run_library_query(pending);
    }

    /// Switch to the album listing of `artist`. A blank choice is ignored.
    pub fn filter_by_artist(&self, artist: String) {
        let pending = self.state.library().write().filter_by_artist(&artist);
        if let Some(pending) = pending {
            self.run_library_query(pending);
        }
    }

    /// Drill into an album of the artist listing. The generated query is
    /// put into the search box so it can be refined.
    pub fn open_album(&self, album: AlbumSummary) {
        let pending = self.state.library().write().open_album(&album);
        let Some(pending) = pending else {
            debug!("Album row without a title, ignoring click");
            return;
        };
        if let LibraryQuery::Search { query } = &pending.query {
            self.state.search_input().set(query.clone());
        }
        self.run_library_query(pending);
    }

    fn run_library_query(&self, pending: PendingQuery) {
        let state = self.state;
        let client = self.client.clone();

        spawn_forever(async move {
            let result = client.fetch(&pending.query).await;
            if let Some(notice) = state.library().write().apply(pending, result) {
                notify(state, notice);
            }
        });
    }

    // =========================================================================
    // Item detail
    // =========================================================================

    /// Open the detail modal; item and artwork are fetched concurrently.
    pub fn open_item(&self, id: i64) {
        let state = self.state;
        let requests = state.detail().write().open(id);

        let client = self.client.clone();
        spawn_forever(async move {
            let result = client.item(requests.id).await;
            state.detail().write().apply_item(requests, result);
        });

        let client = self.client.clone();
        spawn_forever(async move {
            let result = client.album_art(requests.id).await;
            state.detail().write().apply_art(requests, result);
        });
    }

    pub fn close_item(&self) {
        self.state.detail().write().close();
    }

    // =========================================================================
    // Command console and import
    // =========================================================================

    pub fn set_command_input(&self, text: String) {
        self.state.command_input().set(text);
    }

    pub fn run_command(&self) {
        let state = self.state;
        let client = self.client.clone();
        let input = state.command_input().read().clone();
        let request = match state.console().write().submit(&input) {
            Ok(request) => request,
            Err(notice) => return self.notify(notice),
        };

        spawn_forever(async move {
            let result = client.run_command(&request.input).await;
            if let Some(notice) = state.console().write().apply(request, result) {
                notify(state, notice);
            }
        });
    }

    pub fn clear_console(&self) {
        self.state.console().write().clear();
    }

    pub fn set_import_path(&self, text: String) {
        self.state.import_path().set(text);
    }

    pub fn run_import(&self) {
        let state = self.state;
        let client = self.client.clone();
        let input = state.import_path().read().clone();
        let request = match state.import().write().submit(&input) {
            Ok(request) => request,
            Err(notice) => return self.notify(notice),
        };

        spawn_forever(async move {
            let result = client.import(&request.input).await;
            if let Some(notice) = state.import().write().apply(request, result) {
                notify(state, notice);
            }
        });
    }

    pub fn clear_import(&self) {
        self.state.import().write().clear();
    }

    // =========================================================================
    // Connection and settings
    // =========================================================================

    pub fn check_connection(&self) {
        let state = self.state;
        let client = self.client.clone();

        spawn_forever(async move {
            let status = beets_core::connection::ConnectionStatus::from_result(
                client.connection_mode().await,
            );
            info!("Connection: {}", status.label());
            state.connection().set(status);
        });
    }

    /// Load every section of the settings page. Sections fill in as their
    /// requests complete.
    pub fn load_settings(&self) {
        let state = self.state;
        let load = state.settings().write().load();

        let client = self.client.clone();
        spawn_forever(async move {
            let result = client.config_health().await;
            state.settings().write().apply_health(load.health, result);
        });

        let client = self.client.clone();
        spawn_forever(async move {
            let result = client.beets_info().await;
            state.settings().write().apply_info(load, result);
        });

        let client = self.client.clone();
        spawn_forever(async move {
            let result = client.plugins().await;
            state.settings().write().apply_plugins(load, result);
        });

        let client = self.client.clone();
        spawn_forever(async move {
            let result = client.beets_config().await;
            state.settings().write().apply_config(load, result);
        });
    }

    pub fn edit_config_draft(&self, text: String) {
        self.state.settings().write().edit_draft(text);
    }

    pub fn save_config(&self) {
        let state = self.state;
        let client = self.client.clone();
        let request = match state.settings().write().save_config() {
            Ok(request) => request,
            Err(notice) => return self.notify(notice),
        };

        spawn_forever(async move {
            let result = client.update_beets_config(&request.body).await;
            if let Some(notice) = state.settings().write().apply_save(request, result) {
                notify(state, notice);
            }
        });
    }

    pub fn request_maintenance(&self, action: MaintenanceAction) {
        self.state.settings().write().request_maintenance(action);
    }

    pub fn cancel_maintenance(&self) {
        self.state.settings().write().cancel_maintenance();
    }

    /// Run the confirmed maintenance action, then recheck installation
    /// health since the database may have appeared or gone.
    pub fn confirm_maintenance(&self) {
        let state = self.state;
        let client = self.client.clone();
        let Some(action) = state.settings().write().confirm_maintenance() else {
            return;
        };

        spawn_forever(async move {
            let result = match action {
                MaintenanceAction::Reset => client.reset_database().await,
                MaintenanceAction::Initialize => client.initialize_database().await,
            };
            let notice = state.settings().write().apply_maintenance(action, result);
            notify(state, notice);

            let health = state.settings().write().reload_health();
            let result = client.config_health().await;
            state.settings().write().apply_health(health, result);
        });
    }
}

fn notify(state: Store<AppState>, notice: Notice) {
    let id = state.toasts().write().push(notice);
    spawn_forever(async move {
        sleep_ms(TOAST_TIMEOUT_MS).await;
        state.toasts().write().dismiss(id);
    });
}

/// Hook to access the AppService from any component
pub fn use_app() -> AppService {
    use_context::<AppService>()
}
