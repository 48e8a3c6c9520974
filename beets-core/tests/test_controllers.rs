//! Controllers driven against the stub backend the way the web pages drive
//! them: begin a transition, perform the request, apply the result.

mod support;

use beets_core::browser::{LibraryBrowser, TableRows};
use beets_core::detail::{ArtView, DetailBody, ItemDetail};
use beets_core::runner::{RunKind, TranscriptRunner};
use beets_core::settings::{HealthTone, MaintenanceAction, SettingsPanel};
use beets_core::{BeetsClient, NoticeLevel, SortKey};

#[tokio::test]
async fn browse_search_and_clear() {
    let client = BeetsClient::new(support::spawn_backend().await);
    let mut browser = LibraryBrowser::new(50, SortKey::Artist);

    let pending = browser.load_page();
    let result = client.fetch(&pending.query).await;
    assert_eq!(browser.apply(pending, result), None);
    let table = browser.table();
    assert_eq!(table.rows.len(), 50);
    assert_eq!(table.summary, "Showing 1-50 of 120 items");
    assert!(table.pagination.unwrap().previous_disabled);

    let pending = browser.next_page().unwrap();
    let result = client.fetch(&pending.query).await;
    browser.apply(pending, result);
    let pending = browser.next_page().unwrap();
    let result = client.fetch(&pending.query).await;
    browser.apply(pending, result);
    let table = browser.table();
    assert_eq!(table.rows.len(), 20);
    assert!(table.pagination.unwrap().next_disabled);

    let pending = browser.search("blue");
    let result = client.fetch(&pending.query).await;
    browser.apply(pending, result);
    let table = browser.table();
    assert!(table.pagination.is_none());
    assert_eq!(table.rows.len(), 1);

    let pending = browser.clear_filter();
    let result = client.fetch(&pending.query).await;
    browser.apply(pending, result);
    assert_eq!(browser.table().pagination.unwrap().page, 1);
}

#[tokio::test]
async fn failed_search_keeps_rows() {
    let client = BeetsClient::new(support::spawn_backend().await);
    let mut browser = LibraryBrowser::new(25, SortKey::Title);

    let pending = browser.load_page();
    let result = client.fetch(&pending.query).await;
    browser.apply(pending, result);
    let before = browser.table().rows;

    let pending = browser.search("boom");
    let result = client.fetch(&pending.query).await;
    let notice = browser.apply(pending, result).unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Failed to search library: database is locked");
    assert_eq!(browser.table().rows, before);
}

#[tokio::test]
async fn artist_filter_and_album_drill_down() {
    let client = BeetsClient::new(support::spawn_backend().await);
    let mut browser = LibraryBrowser::default();

    let request = browser.load_artists();
    let result = client.artists().await;
    assert_eq!(browser.apply_artists(request, result), None);
    assert_eq!(browser.artists().len(), 2);

    let pending = browser.filter_by_artist("Miles Davis").unwrap();
    let result = client.fetch(&pending.query).await;
    browser.apply(pending, result);
    let TableRows::Albums(rows) = browser.table().rows else {
        panic!("expected album rows");
    };
    assert_eq!(rows.len(), 2);

    let pending = browser.open_album(&rows[0].source).unwrap();
    let result = client.fetch(&pending.query).await;
    browser.apply(pending, result);
    assert_eq!(
        browser.view().search_query.as_deref(),
        Some("album:Kind of Blue artist:Miles Davis")
    );
}

#[tokio::test]
async fn blank_artist_choice_changes_nothing() {
    let client = BeetsClient::new(support::spawn_backend().await);
    let mut browser = LibraryBrowser::default();

    let pending = browser.filter_by_artist("Miles Davis").unwrap();
    let result = client.fetch(&pending.query).await;
    browser.apply(pending, result);
    let before = browser.clone();

    assert!(browser.filter_by_artist("").is_none());
    assert_eq!(browser, before);
    assert_eq!(browser.view().selected_artist.as_deref(), Some("Miles Davis"));
    assert!(matches!(browser.table().rows, TableRows::Albums(_)));
}

#[tokio::test]
async fn remount_discards_previous_view() {
    let client = BeetsClient::new(support::spawn_backend().await);
    let mut browser = LibraryBrowser::new(50, SortKey::Artist);

    let pending = browser.set_sort(SortKey::Year);
    let result = client.fetch(&pending.query).await;
    browser.apply(pending, result);
    let pending = browser.search("blue");
    let result = client.fetch(&pending.query).await;
    browser.apply(pending, result);
    let in_flight = browser.search("boom");

    browser.reset(50, SortKey::Artist);
    let result = client.fetch(&in_flight.query).await;
    assert_eq!(browser.apply(in_flight, result), None);

    let pending = browser.load_page();
    let result = client.fetch(&pending.query).await;
    browser.apply(pending, result);
    assert_eq!(browser.view().sort, SortKey::Artist);
    assert_eq!(browser.view().search_query, None);
    assert_eq!(browser.table().summary, "Showing 1-50 of 120 items");
}

#[tokio::test]
async fn detail_with_failing_art() {
    let client = BeetsClient::new(support::spawn_backend().await);
    let mut detail = ItemDetail::default();

    let requests = detail.open(42);
    let (item, art) = tokio::join!(client.item(requests.id), client.album_art(1));
    detail.apply_item(requests, item);
    detail.apply_art(requests, art);

    let panel = detail.panel().unwrap();
    assert_eq!(panel.title, "X - Y");
    let DetailBody::Loaded { fields, art } = panel.body else {
        panic!("expected loaded body");
    };
    assert_eq!(art, ArtView::Placeholder);
    assert!(fields.contains(&("Length", "4:05".to_string())));
    assert!(fields.contains(&("Bitrate", "320 kbps".to_string())));
}

#[tokio::test]
async fn detail_with_png_art() {
    let client = BeetsClient::new(support::spawn_backend().await);
    let mut detail = ItemDetail::default();

    let requests = detail.open(42);
    let art = client.album_art(requests.id).await;
    detail.apply_art(requests, art);
    let item = client.item(requests.id).await;
    detail.apply_item(requests, item);

    let DetailBody::Loaded { art, .. } = detail.panel().unwrap().body else {
        panic!("expected loaded body");
    };
    let ArtView::Image { src } = art else {
        panic!("expected image");
    };
    assert!(src.starts_with("data:image/png;base64,iVBOR"));
}

#[tokio::test]
async fn command_transcript_order() {
    let client = BeetsClient::new(support::spawn_backend().await);
    let mut runner = TranscriptRunner::new(RunKind::Command);

    let request = runner.submit("modify year=2000").unwrap();
    assert_eq!(runner.transcript().as_str(), "\n> beet modify year=2000\n");
    let result = client.run_command(&request.input).await;
    let notice = runner.apply(request, result).unwrap();

    assert_eq!(notice.message, "Command execution failed");
    let lines: Vec<_> = runner.transcript().lines().collect();
    assert_eq!(
        lines,
        [
            "> beet modify year=2000",
            "ran modify year=2000",
            "Error: no matching items"
        ]
    );
}

#[tokio::test]
async fn pending_run_completes_after_refused_resubmit() {
    let client = BeetsClient::new(support::spawn_backend().await);
    let mut runner = TranscriptRunner::new(RunKind::Command);

    let request = runner.submit("modify year=2000").unwrap();
    // The page showing the console may be gone by now; the runner in the
    // app state still holds the pending run.
    let kept = runner.clone();
    let notice = runner.submit("stats").unwrap_err();
    assert_eq!(notice.message, "A command is already running");
    assert_eq!(runner, kept);

    let result = client.run_command(&request.input).await;
    let notice = runner.apply(request, result).unwrap();
    assert_eq!(notice.message, "Command execution failed");
    assert!(!runner.is_running());
    assert!(runner.transcript().as_str().contains("ran modify year=2000"));

    let request = runner.submit("stats").unwrap();
    let result = client.run_command(&request.input).await;
    assert_eq!(
        runner.apply(request, result).unwrap().level,
        NoticeLevel::Success
    );
}

#[tokio::test]
async fn import_refusal_lands_in_transcript() {
    let client = BeetsClient::new(support::spawn_backend().await);
    let mut runner = TranscriptRunner::new(RunKind::Import);

    let request = runner.submit("/music/incoming").unwrap();
    let result = client.import(&request.input).await;
    let notice = runner.apply(request, result).unwrap();
    assert_eq!(notice.message, "Music import failed");
    assert_eq!(
        runner.transcript().as_str(),
        "\n> Importing music from: /music/incoming\nError: Path does not exist: /music/incoming\n"
    );
}

#[tokio::test]
async fn settings_page_flow() {
    let client = BeetsClient::new(support::spawn_backend().await);
    let mut panel = SettingsPanel::default();

    let load = panel.load();
    let (health, info, plugins, config) = tokio::join!(
        client.config_health(),
        client.beets_info(),
        client.plugins(),
        client.beets_config()
    );
    panel.apply_health(load.health, health);
    panel.apply_info(load, info);
    panel.apply_plugins(load, plugins);
    panel.apply_config(load, config);

    let report = panel.health_report().unwrap();
    assert_eq!(report.tone, HealthTone::Warning);
    assert!(panel.draft().contains("\"directory\": \"~/Music\""));

    let request = panel.save_config().unwrap();
    let result = client.update_beets_config(&request.body).await;
    let notice = panel.apply_save(request, result).unwrap();
    assert_eq!(notice.message, "Configuration saved");

    panel.request_maintenance(MaintenanceAction::Reset);
    let action = panel.confirm_maintenance().unwrap();
    let result = client.reset_database().await;
    let notice = panel.apply_maintenance(action, result);
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "Database reset. Backup saved.");
}
