use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::browser::{LibraryData, LibraryQuery};
use crate::config::{ClientConfig, SortKey};
use crate::error::ApiError;
use crate::models::{
    AlbumArtResponse, AlbumSummary, AlbumsResponse, ArtistsResponse, CommandRequest,
    ConfigHealth, ConnectionMode, ConnectionModeResponse, ErrorBody, ImportRequest, LibraryItem,
    LibraryPage, MaintenanceOutcome, RunOutcome, RunResponse, SearchResponse,
};

/// HTTP client for the beets backend API.
///
/// One method per endpoint. Every non-2xx status is an `ApiError::Status`,
/// carrying the backend's `{"error": ...}` text when it sent one.
#[derive(Clone, Debug)]
pub struct BeetsClient {
    base_url: String,
    http: reqwest::Client,
}

impl BeetsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL with percent-encoded query params.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.base_url, endpoint);
        for (i, (key, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    async fn get<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let resp = self.http.get(&url).send().await?;
        decode(resp).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: String,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!("POST {}", url);
        let resp = self.http.post(&url).json(body).send().await?;
        decode(resp).await
    }

    pub async fn library_page(
        &self,
        page: u32,
        limit: u32,
        sort: SortKey,
    ) -> Result<LibraryPage, ApiError> {
        let page = page.to_string();
        let limit = limit.to_string();
        let url = self.build_url(
            "/api/library",
            &[("page", &page), ("limit", &limit), ("sort", sort.as_str())],
        );
        self.get(url).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<LibraryItem>, ApiError> {
        let url = self.build_url("/api/search", &[("query", query)]);
        let response: SearchResponse = self.get(url).await?;
        Ok(response.results)
    }

    /// Distinct artist names; blank entries are dropped.
    pub async fn artists(&self) -> Result<Vec<String>, ApiError> {
        let url = self.build_url("/api/artists", &[]);
        let response: ArtistsResponse = self.get(url).await?;
        Ok(response
            .artists
            .into_iter()
            .flatten()
            .filter(|a| !a.trim().is_empty())
            .collect())
    }

    pub async fn albums(&self, artist: &str) -> Result<Vec<AlbumSummary>, ApiError> {
        let url = self.build_url("/api/albums", &[("artist", artist)]);
        let response: AlbumsResponse = self.get(url).await?;
        Ok(response.albums)
    }

    /// The backend answers `null` for an unknown id, which surfaces as a
    /// decode error.
    pub async fn item(&self, id: i64) -> Result<LibraryItem, ApiError> {
        let url = self.build_url(&format!("/api/item/{}", id), &[]);
        self.get(url).await
    }

    /// Base64 image data, `None` when the album has no art.
    pub async fn album_art(&self, id: i64) -> Result<Option<String>, ApiError> {
        let url = self.build_url(&format!("/api/albumart/{}", id), &[]);
        let response: AlbumArtResponse = self.get(url).await?;
        Ok(response.album_art.filter(|data| !data.is_empty()))
    }

    pub async fn run_command(&self, command: &str) -> Result<RunOutcome, ApiError> {
        let url = self.build_url("/api/command", &[]);
        let response: RunResponse = self.post(url, &CommandRequest { command }).await?;
        Ok(response.result)
    }

    pub async fn import(&self, path: &str) -> Result<RunOutcome, ApiError> {
        let url = self.build_url("/api/import", &[]);
        let response: RunResponse = self.post(url, &ImportRequest { path }).await?;
        Ok(response.result)
    }

    pub async fn connection_mode(&self) -> Result<ConnectionMode, ApiError> {
        let url = self.build_url("/api/connection/mode", &[]);
        let response: ConnectionModeResponse = self.get(url).await?;
        Ok(response.into())
    }

    pub async fn config_health(&self) -> Result<ConfigHealth, ApiError> {
        let url = self.build_url("/api/beets/check_paths", &[]);
        self.get(url).await
    }

    pub async fn beets_info(&self) -> Result<serde_json::Value, ApiError> {
        let url = self.build_url("/api/beets/info", &[]);
        self.get(url).await
    }

    pub async fn plugins(&self) -> Result<serde_json::Value, ApiError> {
        let url = self.build_url("/api/beets/plugins", &[]);
        self.get(url).await
    }

    pub async fn beets_config(&self) -> Result<serde_json::Value, ApiError> {
        let url = self.build_url("/api/beets/config", &[]);
        self.get(url).await
    }

    pub async fn update_beets_config(
        &self,
        config: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.build_url("/api/beets/config", &[]);
        self.post(url, config).await
    }

    pub async fn reset_database(&self) -> Result<MaintenanceOutcome, ApiError> {
        let url = self.build_url("/api/beets/reset", &[]);
        self.post(url, &serde_json::json!({})).await
    }

    pub async fn initialize_database(&self) -> Result<MaintenanceOutcome, ApiError> {
        let url = self.build_url("/api/beets/initialize", &[]);
        self.post(url, &serde_json::json!({})).await
    }

    /// Perform whichever library request the browser asked for.
    pub async fn fetch(&self, query: &LibraryQuery) -> Result<LibraryData, ApiError> {
        match query {
            LibraryQuery::Page { page, limit, sort } => self
                .library_page(*page, *limit, *sort)
                .await
                .map(LibraryData::Page),
            LibraryQuery::Search { query } => self.search(query).await.map(LibraryData::Search),
            LibraryQuery::Albums { artist } => self.albums(artist).await.map(LibraryData::Albums),
        }
    }
}

/// Check the status, then parse the JSON body.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let message = resp.json::<ErrorBody>().await.ok().map(|body| body.error);
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_without_params() {
        let client = BeetsClient::new("http://localhost:5000");
        assert_eq!(
            client.build_url("/api/artists", &[]),
            "http://localhost:5000/api/artists"
        );
    }

    #[test]
    fn build_url_encodes_params() {
        let client = BeetsClient::new("http://localhost:5000");
        let url = client.build_url("/api/search", &[("query", "album:Blue Train artist:Coltrane")]);
        assert_eq!(
            url,
            "http://localhost:5000/api/search?query=album%3ABlue%20Train%20artist%3AColtrane"
        );
    }

    #[test]
    fn build_url_joins_multiple_params() {
        let client = BeetsClient::new("http://localhost:5000");
        let url = client.build_url("/api/library", &[("page", "2"), ("limit", "50")]);
        assert_eq!(url, "http://localhost:5000/api/library?page=2&limit=50");
    }

    #[test]
    fn new_strips_trailing_slash() {
        let client = BeetsClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}
