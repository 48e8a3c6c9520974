use beets_web::{config_from_window, App};
use tracing::info;

fn main() {
    let config = config_from_window();
    if let Err(e) = dioxus::logger::init(config.log_level) {
        eprintln!("Failed to initialize logging: {e}");
    }
    info!("Using beets API at {}", config.base_url);

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}
