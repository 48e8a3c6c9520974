//! Item detail drill-down
//!
//! Opening an item issues two independent requests, the item itself and its
//! album art. Either may resolve first. Art failures only ever degrade to a
//! placeholder.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use beets_common::{format_bitrate, RequestTracker, Ticket};
use tracing::{debug, error, warn};

use crate::browser::{length_text, number_or_dash, text_or};
use crate::error::ApiError;
use crate::models::LibraryItem;

/// The two requests issued when an item is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRequests {
    pub ticket: Ticket,
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum ItemState {
    #[default]
    Loading,
    Loaded(LibraryItem),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
enum ArtState {
    #[default]
    Loading,
    Found(String),
    Missing,
}

/// Controller behind the item detail modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDetail {
    open: Option<i64>,
    item: ItemState,
    art: ArtState,
    tracker: RequestTracker,
}

impl ItemDetail {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn item_id(&self) -> Option<i64> {
        self.open
    }

    /// Open the panel for `id` in its loading state.
    pub fn open(&mut self, id: i64) -> DetailRequests {
        debug!("Opening item {}", id);
        self.open = Some(id);
        self.item = ItemState::Loading;
        self.art = ArtState::Loading;
        DetailRequests {
            ticket: self.tracker.issue(),
            id,
        }
    }

    /// Close the panel. Responses still in flight are ignored.
    pub fn close(&mut self) {
        self.open = None;
        self.tracker.invalidate();
    }

    pub fn apply_item(&mut self, requests: DetailRequests, result: Result<LibraryItem, ApiError>) {
        if !self.tracker.is_current(requests.ticket) {
            debug!("Dropping stale item {}", requests.id);
            return;
        }
        self.item = match result {
            Ok(item) => ItemState::Loaded(item),
            Err(e) => {
                error!("Error loading item details: {}", e);
                ItemState::Failed(format!("Failed to load item details: {}", e.summary()))
            }
        };
    }

    pub fn apply_art(&mut self, requests: DetailRequests, result: Result<Option<String>, ApiError>) {
        if !self.tracker.is_current(requests.ticket) {
            debug!("Dropping stale album art for {}", requests.id);
            return;
        }
        self.art = match result {
            Ok(Some(data)) => ArtState::Found(data),
            Ok(None) => ArtState::Missing,
            Err(e) => {
                warn!("Error loading album art: {}", e);
                ArtState::Missing
            }
        };
    }

    /// Render description of the modal; `None` while closed.
    pub fn panel(&self) -> Option<DetailPanel> {
        self.open?;
        let (title, body) = match &self.item {
            ItemState::Loading => ("Loading...".to_string(), DetailBody::Loading),
            ItemState::Failed(message) => (
                "Item details".to_string(),
                DetailBody::Failed(message.clone()),
            ),
            ItemState::Loaded(item) => (
                format!(
                    "{} - {}",
                    text_or(&item.title, "Unknown"),
                    text_or(&item.artist, "Unknown")
                ),
                DetailBody::Loaded {
                    fields: detail_fields(item),
                    art: self.art_view(),
                },
            ),
        };
        Some(DetailPanel { title, body })
    }

    fn art_view(&self) -> ArtView {
        match &self.art {
            ArtState::Loading => ArtView::Loading,
            ArtState::Found(data) => ArtView::Image {
                src: format!("data:{};base64,{}", sniff_image_mime(data), data),
            },
            ArtState::Missing => ArtView::Placeholder,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub title: String,
    pub body: DetailBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailBody {
    Loading,
    Failed(String),
    Loaded {
        /// Label/value pairs in display order
        fields: Vec<(&'static str, String)>,
        art: ArtView,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtView {
    Loading,
    Image { src: String },
    /// "No album art available"
    Placeholder,
}

fn detail_fields(item: &LibraryItem) -> Vec<(&'static str, String)> {
    vec![
        ("Title", text_or(&item.title, "-")),
        ("Artist", text_or(&item.artist, "-")),
        ("Album", text_or(&item.album, "-")),
        ("Album Artist", text_or(&item.albumartist, "-")),
        ("Year", number_or_dash(item.year)),
        ("Track", number_or_dash(item.track)),
        ("Genre", text_or(&item.genre, "-")),
        ("Length", length_text(item)),
        ("Format", text_or(&item.format, "-")),
        (
            "Bitrate",
            match item.bitrate {
                Some(b) if b > 0 => format_bitrate(b),
                _ => "-".to_string(),
            },
        ),
        ("Path", text_or(&item.path, "-")),
    ]
}

/// Guess the image type from the first decoded bytes, defaulting to JPEG.
fn sniff_image_mime(data: &str) -> &'static str {
    // 16 base64 chars decode to 12 bytes, enough for every signature below.
    let prefix: String = data.chars().take(16).collect();
    let Ok(bytes) = STANDARD.decode(prefix) else {
        return "image/jpeg";
    };
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "image/jpeg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_42() -> LibraryItem {
        LibraryItem {
            id: 42,
            title: Some("X".into()),
            artist: Some("Y".into()),
            bitrate: Some(320_000),
            ..LibraryItem::default()
        }
    }

    fn fields(panel: &DetailPanel) -> &[(&'static str, String)] {
        match &panel.body {
            DetailBody::Loaded { fields, .. } => fields,
            other => panic!("expected loaded body, got {:?}", other),
        }
    }

    #[test]
    fn closed_detail_has_no_panel() {
        assert_eq!(ItemDetail::default().panel(), None);
    }

    #[test]
    fn opens_in_loading_state() {
        let mut detail = ItemDetail::default();
        detail.open(42);
        let panel = detail.panel().unwrap();
        assert_eq!(panel.title, "Loading...");
        assert_eq!(panel.body, DetailBody::Loading);
    }

    #[test]
    fn loaded_item_is_titled_title_dash_artist() {
        let mut detail = ItemDetail::default();
        let requests = detail.open(42);
        detail.apply_item(requests, Ok(item_42()));
        detail.apply_art(requests, Ok(Some("/9j/4AAQSkZJRgABAQ".into())));

        let panel = detail.panel().unwrap();
        assert_eq!(panel.title, "X - Y");
        let DetailBody::Loaded { art, .. } = &panel.body else {
            panic!("expected loaded body");
        };
        assert_eq!(
            art,
            &ArtView::Image {
                src: "data:image/jpeg;base64,/9j/4AAQSkZJRgABAQ".into()
            }
        );
    }

    #[test]
    fn art_failure_keeps_metadata_with_placeholder() {
        let mut detail = ItemDetail::default();
        let requests = detail.open(42);
        detail.apply_art(
            requests,
            Err(ApiError::Status {
                status: 500,
                message: None,
            }),
        );
        detail.apply_item(requests, Ok(item_42()));

        let panel = detail.panel().unwrap();
        assert_eq!(panel.title, "X - Y");
        let DetailBody::Loaded { fields, art } = &panel.body else {
            panic!("expected loaded body");
        };
        assert_eq!(art, &ArtView::Placeholder);
        assert_eq!(fields.len(), 11);
        assert_eq!(fields[0], ("Title", "X".to_string()));
        assert_eq!(fields[9], ("Bitrate", "320 kbps".to_string()));
    }

    #[test]
    fn art_pending_while_item_loaded() {
        let mut detail = ItemDetail::default();
        let requests = detail.open(42);
        detail.apply_item(requests, Ok(item_42()));
        let DetailBody::Loaded { art, .. } = detail.panel().unwrap().body else {
            panic!("expected loaded body");
        };
        assert_eq!(art, ArtView::Loading);
    }

    #[test]
    fn missing_fields_render_dash() {
        let mut detail = ItemDetail::default();
        let requests = detail.open(1);
        detail.apply_item(
            requests,
            Ok(LibraryItem {
                id: 1,
                ..LibraryItem::default()
            }),
        );
        let panel = detail.panel().unwrap();
        assert_eq!(panel.title, "Unknown - Unknown");
        assert!(fields(&panel).iter().all(|(_, value)| value == "-"));
    }

    #[test]
    fn item_failure_renders_error() {
        let mut detail = ItemDetail::default();
        let requests = detail.open(7);
        detail.apply_item(
            requests,
            Err(ApiError::Status {
                status: 404,
                message: Some("Item not found".into()),
            }),
        );
        assert_eq!(
            detail.panel().unwrap().body,
            DetailBody::Failed("Failed to load item details: Item not found".into())
        );
    }

    #[test]
    fn responses_for_previous_item_are_ignored() {
        let mut detail = ItemDetail::default();
        let first = detail.open(1);
        let second = detail.open(2);
        detail.apply_item(first, Ok(item_42()));
        assert_eq!(detail.panel().unwrap().body, DetailBody::Loading);

        detail.apply_item(second, Ok(item_42()));
        assert_eq!(detail.item_id(), Some(2));
        assert_eq!(detail.panel().unwrap().title, "X - Y");
    }

    #[test]
    fn close_discards_in_flight_responses() {
        let mut detail = ItemDetail::default();
        let requests = detail.open(3);
        detail.close();
        detail.apply_item(requests, Ok(item_42()));
        assert!(!detail.is_open());
        assert_eq!(detail.panel(), None);
    }

    #[test]
    fn sniffs_common_image_types() {
        assert_eq!(sniff_image_mime("iVBORw0KGgoAAAANSUhEUg"), "image/png");
        assert_eq!(sniff_image_mime("R0lGODlhAQABAIAAAP"), "image/gif");
        assert_eq!(sniff_image_mime("UklGRiQAAABXRUJQVlA4"), "image/webp");
        assert_eq!(sniff_image_mime("/9j/4AAQSkZJRgABAQ"), "image/jpeg");
        assert_eq!(sniff_image_mime("!!"), "image/jpeg");
    }
}
