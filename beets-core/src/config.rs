//! Client configuration
//!
//! The web front-end has no config file. Defaults are compiled in and the
//! page URL's query string may override them, e.g.
//! `/?api=http://nas.local:5000&limit=100&sort=year&log=debug`.

use std::str::FromStr;
use tracing::Level;

pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Page sizes offered by the items-per-page selector
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [25, 50, 100, 200];

/// Sort fields understood by `/api/library`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Artist,
    Album,
    Title,
    Year,
    Added,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Artist,
        SortKey::Album,
        SortKey::Title,
        SortKey::Year,
        SortKey::Added,
    ];

    /// Value sent as the `sort` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Artist => "artist",
            SortKey::Album => "album",
            SortKey::Title => "title",
            SortKey::Year => "year",
            SortKey::Added => "added",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Artist => "Artist",
            SortKey::Album => "Album",
            SortKey::Title => "Title",
            SortKey::Year => "Year",
            SortKey::Added => "Date Added",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == value)
    }
}

/// Settings the front-end starts with
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Origin of the beets API, without trailing slash
    pub base_url: String,
    pub page_size: u32,
    pub sort: SortKey,
    pub log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortKey::default(),
            log_level: if cfg!(debug_assertions) {
                Level::DEBUG
            } else {
                Level::INFO
            },
        }
    }
}

impl ClientConfig {
    /// Build the config for a page served from `origin`, applying overrides
    /// from the page's query string (`search`, with or without leading `?`).
    ///
    /// Unknown keys and unparseable values are ignored.
    pub fn from_location(origin: &str, search: &str) -> Self {
        let mut config = Self {
            base_url: normalize_base_url(origin),
            ..Self::default()
        };

        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(search.trim_start_matches('?')).unwrap_or_default();

        for (key, value) in pairs {
            match key.as_str() {
                "api" if !value.trim().is_empty() => {
                    config.base_url = normalize_base_url(&value);
                }
                "limit" => {
                    if let Ok(size) = value.parse::<u32>() {
                        if PAGE_SIZE_OPTIONS.contains(&size) {
                            config.page_size = size;
                        }
                    }
                }
                "sort" => {
                    if let Some(sort) = SortKey::parse(&value) {
                        config.sort = sort;
                    }
                }
                "log" => {
                    if let Ok(level) = Level::from_str(&value) {
                        config.log_level = level;
                    }
                }
                _ => {}
            }
        }

        config
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_location_uses_origin() {
        let config = ClientConfig::from_location("http://localhost:5000/", "");
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.sort, SortKey::Artist);
    }

    #[test]
    fn from_location_applies_overrides() {
        let config = ClientConfig::from_location(
            "http://localhost:8080",
            "?api=http%3A%2F%2Fnas.local%3A5000%2F&limit=100&sort=year&log=warn",
        );
        assert_eq!(config.base_url, "http://nas.local:5000");
        assert_eq!(config.page_size, 100);
        assert_eq!(config.sort, SortKey::Year);
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn from_location_ignores_invalid_values() {
        let config =
            ClientConfig::from_location("http://localhost:5000", "limit=7&sort=bogus&api=&x=1");
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.sort, SortKey::Artist);
    }

    #[test]
    fn sort_key_round_trips_through_query_value() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("genre"), None);
    }
}
