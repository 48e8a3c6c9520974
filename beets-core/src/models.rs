//! Wire types for the beets backend API
//!
//! beets leaves most columns empty for badly tagged files, so nearly every
//! field is optional. Zero years/tracks/bitrates mean "unknown" in beets and
//! are treated the same as missing by the render code.

use serde::{Deserialize, Serialize};

/// One track as returned by `/api/library`, `/api/search` and `/api/item/{id}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LibraryItem {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub albumartist: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub track: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
    /// Length in seconds
    #[serde(default)]
    pub length: Option<f64>,
    /// `m:ss`, precomputed by the backend when the length is known
    #[serde(default)]
    pub length_formatted: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    /// Bits per second
    #[serde(default)]
    pub bitrate: Option<i64>,
    #[serde(default)]
    pub path: Option<String>,
}

/// `/api/library` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LibraryPage {
    #[serde(default)]
    pub items: Vec<LibraryItem>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<LibraryItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistsResponse {
    #[serde(default)]
    pub artists: Vec<Option<String>>,
}

/// One distinct album of an artist, from `/api/albums`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AlbumSummary {
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub albumartist: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlbumsResponse {
    #[serde(default)]
    pub albums: Vec<AlbumSummary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlbumArtResponse {
    #[serde(rename = "albumArt", default)]
    pub album_art: Option<String>,
}

/// Outcome of a `beet` invocation (command console or import)
///
/// `success` is the logical result; the HTTP request itself succeeded.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RunOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub returncode: Option<i32>,
    /// Set instead of stdout/stderr when the backend refused to run beets
    /// (e.g. an import path that does not exist)
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RunResponse {
    pub result: RunOutcome,
}

#[derive(Debug, Serialize)]
pub(crate) struct CommandRequest<'a> {
    pub command: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ImportRequest<'a> {
    pub path: &'a str,
}

/// How the backend reaches beets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionMode {
    Local,
    Remote { host: Option<String> },
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConnectionModeResponse {
    pub mode: String,
    #[serde(default)]
    pub remote_config: Option<RemoteConfig>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoteConfig {
    #[serde(default)]
    pub host: Option<String>,
}

impl From<ConnectionModeResponse> for ConnectionMode {
    fn from(response: ConnectionModeResponse) -> Self {
        if response.mode == "local" {
            ConnectionMode::Local
        } else {
            ConnectionMode::Remote {
                host: response
                    .remote_config
                    .and_then(|c| c.host)
                    .filter(|h| !h.is_empty()),
            }
        }
    }
}

/// Installation health from `/api/beets/check_paths`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigHealth {
    #[serde(default)]
    pub beets_installed: bool,
    #[serde(default)]
    pub config_exists: bool,
    #[serde(default)]
    pub db_exists: bool,
    #[serde(default)]
    pub config_path: Option<String>,
    #[serde(default)]
    pub db_path: Option<String>,
}

/// Reply of the database reset / initialize endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MaintenanceOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the backend sends with non-2xx statuses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_item_tolerates_missing_and_null_fields() {
        let item: LibraryItem =
            serde_json::from_str(r#"{"id": 7, "title": null, "artist": "Low"}"#).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.title, None);
        assert_eq!(item.artist.as_deref(), Some("Low"));
        assert_eq!(item.bitrate, None);
    }

    #[test]
    fn run_outcome_from_refused_import() {
        let response: RunResponse = serde_json::from_str(
            r#"{"result": {"success": false, "message": "Path does not exist: /nope"}}"#,
        )
        .unwrap();
        assert!(!response.result.success);
        assert_eq!(response.result.stdout, None);
        assert_eq!(
            response.result.message.as_deref(),
            Some("Path does not exist: /nope")
        );
    }

    #[test]
    fn connection_mode_conversion() {
        let local: ConnectionModeResponse = serde_json::from_str(r#"{"mode": "local"}"#).unwrap();
        assert_eq!(ConnectionMode::from(local), ConnectionMode::Local);

        let remote: ConnectionModeResponse =
            serde_json::from_str(r#"{"mode": "remote", "remote_config": {"host": "nas"}}"#)
                .unwrap();
        assert_eq!(
            ConnectionMode::from(remote),
            ConnectionMode::Remote {
                host: Some("nas".into())
            }
        );

        let bare: ConnectionModeResponse = serde_json::from_str(r#"{"mode": "remote"}"#).unwrap();
        assert_eq!(
            ConnectionMode::from(bare),
            ConnectionMode::Remote { host: None }
        );
    }
}
