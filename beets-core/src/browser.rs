//! Library browser controller
//!
//! Owns the browse parameters (page, page size, sort, search, artist filter)
//! and what the table currently shows. Every user interaction returns a
//! [`PendingQuery`]; the caller performs it with [`BeetsClient::fetch`] and
//! hands the result back to [`LibraryBrowser::apply`].
//!
//! Paginated browse, search, and artist filter are mutually exclusive
//! listings. A listing, and the view parameters that produced it, only change
//! when a response is applied successfully; failed requests leave both alone.
//!
//! [`BeetsClient::fetch`]: crate::client::BeetsClient::fetch

use beets_common::{format_length, ActionPhase, Pagination, RequestTracker, Ticket};
use tracing::{debug, error, info};

use crate::config::{SortKey, DEFAULT_PAGE_SIZE};
use crate::error::ApiError;
use crate::models::{AlbumSummary, LibraryItem, LibraryPage};
use crate::notice::Notice;

/// Browse parameters of the committed listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub page: u32,
    pub page_size: u32,
    pub sort: SortKey,
    pub search_query: Option<String>,
    pub selected_artist: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortKey::default(),
            search_query: None,
            selected_artist: None,
        }
    }
}

/// What the table currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Listing {
    /// Nothing loaded yet
    #[default]
    Empty,
    Page {
        items: Vec<LibraryItem>,
        total: u64,
    },
    Search {
        query: String,
        items: Vec<LibraryItem>,
    },
    Albums {
        artist: String,
        albums: Vec<AlbumSummary>,
    },
}

/// A library request to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryQuery {
    Page { page: u32, limit: u32, sort: SortKey },
    Search { query: String },
    Albums { artist: String },
}

impl LibraryQuery {
    fn failure_prefix(&self) -> &'static str {
        match self {
            LibraryQuery::Page { .. } => "Failed to load library",
            LibraryQuery::Search { .. } => "Failed to search library",
            LibraryQuery::Albums { .. } => "Failed to load albums",
        }
    }
}

/// A request handed out by the browser, to be passed back to `apply`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub ticket: Ticket,
    pub query: LibraryQuery,
}

/// Response data for a [`LibraryQuery`]
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryData {
    Page(LibraryPage),
    Search(Vec<LibraryItem>),
    Albums(Vec<AlbumSummary>),
}

/// A library artist list request, to be passed back to `apply_artists`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtistsRequest {
    pub ticket: Ticket,
}

/// View controller behind the library page
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryBrowser {
    view: ViewState,
    listing: Listing,
    phase: ActionPhase,
    tracker: RequestTracker,
    artists: Vec<String>,
    artists_tracker: RequestTracker,
    /// Bumped whenever a response is applied, success or failure
    revision: u64,
}

impl Default for LibraryBrowser {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, SortKey::default())
    }
}

impl LibraryBrowser {
    pub fn new(page_size: u32, sort: SortKey) -> Self {
        Self {
            view: ViewState {
                page_size: page_size.max(1),
                sort,
                ..ViewState::default()
            },
            listing: Listing::Empty,
            phase: ActionPhase::Idle,
            tracker: RequestTracker::new(),
            artists: Vec::new(),
            artists_tracker: RequestTracker::new(),
            revision: 0,
        }
    }

    /// Return to a freshly mounted state: page 1 of an unfiltered browse
    /// with the given size and sort, nothing rendered yet. Requests still in
    /// flight are invalidated and their responses dropped.
    pub fn reset(&mut self, page_size: u32, sort: SortKey) {
        debug!("Resetting library view");
        self.view = ViewState {
            page_size: page_size.max(1),
            sort,
            ..ViewState::default()
        };
        self.listing = Listing::Empty;
        self.phase = ActionPhase::Idle;
        self.artists.clear();
        self.tracker.invalidate();
        self.artists_tracker.invalidate();
        self.revision += 1;
    }

    /// Changes every time a response settles the view. Inputs whose DOM state
    /// can run ahead of the committed view (the artist select) are keyed on
    /// it so a failed request snaps them back.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn phase(&self) -> &ActionPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_pending()
    }

    /// Artists for the filter dropdown
    pub fn artists(&self) -> &[String] {
        &self.artists
    }

    /// Pagination of the current listing; `None` outside paginated browse.
    pub fn pagination(&self) -> Option<Pagination> {
        match &self.listing {
            Listing::Page { total, .. } => Some(Pagination::new(
                self.view.page,
                self.view.page_size,
                *total,
            )),
            _ => None,
        }
    }

    fn request(&mut self, query: LibraryQuery) -> PendingQuery {
        self.phase = ActionPhase::Pending;
        PendingQuery {
            ticket: self.tracker.issue(),
            query,
        }
    }

    fn page_query(&mut self, page: u32, page_size: u32, sort: SortKey) -> PendingQuery {
        self.request(LibraryQuery::Page {
            page: page.max(1),
            limit: page_size.max(1),
            sort,
        })
    }

    /// (Re)load the current page with the current size and sort.
    pub fn load_page(&mut self) -> PendingQuery {
        self.page_query(self.view.page, self.view.page_size, self.view.sort)
    }

    /// `None` unless browsing pages and a next page exists.
    pub fn next_page(&mut self) -> Option<PendingQuery> {
        let page = self.pagination()?.next_page()?;
        Some(self.page_query(page, self.view.page_size, self.view.sort))
    }

    /// `None` unless browsing pages past the first.
    pub fn previous_page(&mut self) -> Option<PendingQuery> {
        let page = self.pagination()?.previous_page()?;
        Some(self.page_query(page, self.view.page_size, self.view.sort))
    }

    /// Change the sort order, starting over at page 1.
    pub fn set_sort(&mut self, sort: SortKey) -> PendingQuery {
        self.page_query(1, self.view.page_size, sort)
    }

    /// Change the page size, starting over at page 1.
    pub fn set_page_size(&mut self, page_size: u32) -> PendingQuery {
        self.page_query(1, page_size, self.view.sort)
    }

    /// Search the whole library. A blank query reloads the current page.
    pub fn search(&mut self, query: &str) -> PendingQuery {
        let query = query.trim();
        if query.is_empty() {
            return self.load_page();
        }
        self.request(LibraryQuery::Search {
            query: query.to_string(),
        })
    }

    /// Leave search or artist filter and return to paginated browse at page 1.
    pub fn clear_filter(&mut self) -> PendingQuery {
        self.page_query(1, self.view.page_size, self.view.sort)
    }

    /// Show the albums of one artist. A blank selection does nothing.
    pub fn filter_by_artist(&mut self, artist: &str) -> Option<PendingQuery> {
        if artist.trim().is_empty() {
            return None;
        }
        Some(self.request(LibraryQuery::Albums {
            artist: artist.to_string(),
        }))
    }

    /// Drill into an album row of the artist listing by searching for
    /// `album:<album> artist:<artist>`.
    pub fn open_album(&mut self, album: &AlbumSummary) -> Option<PendingQuery> {
        let Listing::Albums { artist, .. } = &self.listing else {
            return None;
        };
        let title = album.album.as_deref().filter(|a| !a.is_empty())?;
        let query = format!("album:{} artist:{}", title, artist);
        Some(self.search(&query))
    }

    /// Apply the outcome of a request handed out earlier.
    ///
    /// Responses to superseded requests are dropped. On success the listing
    /// and view parameters are replaced; on failure both are kept and exactly
    /// one error notice is returned.
    pub fn apply(
        &mut self,
        pending: PendingQuery,
        result: Result<LibraryData, ApiError>,
    ) -> Option<Notice> {
        if !self.tracker.is_current(pending.ticket) {
            debug!("Dropping stale library response for {:?}", pending.query);
            return None;
        }
        self.revision += 1;

        let prefix = pending.query.failure_prefix();
        let data = match result {
            Ok(data) => data,
            Err(e) => {
                error!("{}: {}", prefix, e);
                return Some(self.fail(format!("{}: {}", prefix, e.summary())));
            }
        };

        match (pending.query, data) {
            (LibraryQuery::Page { page, limit, sort }, LibraryData::Page(result)) => {
                debug!(
                    "Loaded library page {} ({} of {} items)",
                    page,
                    result.items.len(),
                    result.total
                );
                self.view = ViewState {
                    page,
                    page_size: limit,
                    sort,
                    search_query: None,
                    selected_artist: None,
                };
                self.listing = Listing::Page {
                    items: result.items,
                    total: result.total,
                };
            }
            (LibraryQuery::Search { query }, LibraryData::Search(items)) => {
                info!("Search {:?} matched {} items", query, items.len());
                self.view.search_query = Some(query.clone());
                self.view.selected_artist = None;
                self.listing = Listing::Search { query, items };
            }
            (LibraryQuery::Albums { artist }, LibraryData::Albums(albums)) => {
                debug!("Loaded {} albums for {:?}", albums.len(), artist);
                self.view.search_query = None;
                self.view.selected_artist = Some(artist.clone());
                self.listing = Listing::Albums { artist, albums };
            }
            (query, _) => {
                error!("Response does not match request {:?}", query);
                return Some(self.fail(format!(
                    "{}: unexpected response",
                    query.failure_prefix()
                )));
            }
        }

        self.phase = ActionPhase::Succeeded;
        None
    }

    fn fail(&mut self, message: String) -> Notice {
        self.phase = ActionPhase::Failed(message.clone());
        Notice::error(message)
    }

    /// Request the artist list for the filter dropdown.
    pub fn load_artists(&mut self) -> ArtistsRequest {
        ArtistsRequest {
            ticket: self.artists_tracker.issue(),
        }
    }

    pub fn apply_artists(
        &mut self,
        request: ArtistsRequest,
        result: Result<Vec<String>, ApiError>,
    ) -> Option<Notice> {
        if !self.artists_tracker.is_current(request.ticket) {
            debug!("Dropping stale artist list");
            return None;
        }
        match result {
            Ok(artists) => {
                self.artists = artists;
                None
            }
            Err(e) => {
                error!("Error loading artists: {}", e);
                Some(Notice::error(format!(
                    "Failed to load artists: {}",
                    e.summary()
                )))
            }
        }
    }

    /// Render description of the library table and its controls.
    pub fn table(&self) -> LibraryTable {
        let loading = self.is_loading();
        match &self.listing {
            Listing::Empty => LibraryTable {
                rows: TableRows::Empty(if loading {
                    String::new()
                } else {
                    "No items found".to_string()
                }),
                summary: String::new(),
                pagination: None,
                loading,
                show_clear: false,
            },
            Listing::Page { items, total } => {
                let pagination = Pagination::new(self.view.page, self.view.page_size, *total);
                let summary = match pagination.visible_range() {
                    Some((start, end)) => format!("Showing {}-{} of {} items", start, end, total),
                    None => format!("Showing 0 of {} items", total),
                };
                LibraryTable {
                    rows: item_rows(items),
                    summary,
                    pagination: Some(PaginationControls {
                        page: pagination.page(),
                        page_count: pagination.page_count(),
                        previous_disabled: loading || !pagination.has_previous(),
                        next_disabled: loading || !pagination.has_next(),
                    }),
                    loading,
                    show_clear: false,
                }
            }
            Listing::Search { query, items } => LibraryTable {
                rows: item_rows(items),
                summary: format!("Found {} items matching \"{}\"", items.len(), query),
                pagination: None,
                loading,
                show_clear: true,
            },
            Listing::Albums { artist, albums } => LibraryTable {
                rows: if albums.is_empty() {
                    TableRows::Empty(format!("No albums found for artist \"{}\"", artist))
                } else {
                    TableRows::Albums(albums.iter().map(|a| AlbumRow::new(a, artist)).collect())
                },
                summary: format!("Showing {} albums for artist \"{}\"", albums.len(), artist),
                pagination: None,
                loading,
                show_clear: true,
            },
        }
    }
}

/// Render description of the library table
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryTable {
    pub rows: TableRows,
    /// "Showing 1-50 of 812 items" and friends
    pub summary: String,
    /// Present only in paginated browse
    pub pagination: Option<PaginationControls>,
    pub loading: bool,
    /// Whether the clear-search/filter button is shown
    pub show_clear: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableRows {
    Items(Vec<ItemRow>),
    Albums(Vec<AlbumRow>),
    /// Single full-width row with a message
    Empty(String),
}

impl TableRows {
    pub fn len(&self) -> usize {
        match self {
            TableRows::Items(rows) => rows.len(),
            TableRows::Albums(rows) => rows.len(),
            TableRows::Empty(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControls {
    pub page: u32,
    pub page_count: u64,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

/// One track row, with display fallbacks applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub length: String,
    pub format: String,
}

impl From<&LibraryItem> for ItemRow {
    fn from(item: &LibraryItem) -> Self {
        Self {
            id: item.id,
            title: text_or(&item.title, "Unknown"),
            artist: text_or(&item.artist, "Unknown"),
            album: text_or(&item.album, "Unknown"),
            year: number_or_dash(item.year),
            length: length_text(item),
            format: text_or(&item.format, "-"),
        }
    }
}

/// One album row of the artist listing
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumRow {
    pub album: String,
    pub artist: String,
    pub year: String,
    pub album_artist: String,
    /// The summary the row was built from, handed back on click
    pub source: AlbumSummary,
}

impl AlbumRow {
    fn new(album: &AlbumSummary, artist: &str) -> Self {
        Self {
            album: text_or(&album.album, "Unknown"),
            artist: text_or(&album.artist, artist),
            year: number_or_dash(album.year),
            album_artist: text_or(&album.albumartist, artist),
            source: album.clone(),
        }
    }
}

fn item_rows(items: &[LibraryItem]) -> TableRows {
    if items.is_empty() {
        TableRows::Empty("No items found".to_string())
    } else {
        TableRows::Items(items.iter().map(ItemRow::from).collect())
    }
}

pub(crate) fn text_or(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(fallback)
        .to_string()
}

pub(crate) fn number_or_dash<N: Into<i64> + Copy>(value: Option<N>) -> String {
    match value.map(Into::into) {
        Some(n) if n != 0 => n.to_string(),
        _ => "-".to_string(),
    }
}

pub(crate) fn length_text(item: &LibraryItem) -> String {
    if let Some(formatted) = item.length_formatted.as_deref().filter(|f| !f.is_empty()) {
        return formatted.to_string();
    }
    match item.length {
        Some(seconds) if seconds > 0.0 => format_length(seconds),
        _ => "-".to_string(),
    }
}
