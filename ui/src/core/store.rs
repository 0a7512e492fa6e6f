//! Fetched-content state and page-level UI flags.
//!
//! Both structs are plain data; views keep them in `Signal`s and apply the
//! transition methods below. `fetch_content` plays the part of the page's
//! data loader: it issues a `GET` against each `/api/swamiji/*` endpoint,
//! decodes the JSON body and folds the result into a [`ContentState`].

use api::routes::{self, ApiResponse};
use api::{ContentRepository, Endpoint, Event, Method, Quote, SwamiJi, Teaching};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Scroll offset (px) past which the navigation bar switches to its solid style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("{path} answered {status}: {message}")]
    Status {
        path: &'static str,
        status: u16,
        message: String,
    },
    #[error("{path} returned an unreadable body: {reason}")]
    Decode { path: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentState {
    pub info: Option<SwamiJi>,
    pub teachings: Vec<Teaching>,
    pub quotes: Vec<Quote>,
    pub events: Vec<Event>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ContentState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    pub fn info_loaded(&mut self, info: SwamiJi) {
        self.loading = false;
        self.info = Some(info);
    }

    pub fn info_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        let message = message.into();
        self.error = Some(if message.is_empty() {
            "Failed to fetch info".to_string()
        } else {
            message
        });
    }

    pub fn teachings_loaded(&mut self, teachings: Vec<Teaching>) {
        self.teachings = teachings;
    }

    pub fn quotes_loaded(&mut self, quotes: Vec<Quote>) {
        self.quotes = quotes;
    }

    pub fn events_loaded(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Load every content list through the endpoint layer.
///
/// A failed profile request is recorded in `error`; failed list requests
/// leave the previous list in place and are only logged.
pub fn fetch_content<R: ContentRepository>(repo: &R, state: &mut ContentState) {
    state.begin_fetch();

    match get::<_, SwamiJi>(repo, Endpoint::Info) {
        Ok(info) => state.info_loaded(info),
        Err(err) => {
            tracing::warn!("profile fetch failed: {err}");
            state.info_failed(err.to_string());
        }
    }

    match get::<_, Vec<Teaching>>(repo, Endpoint::Teachings) {
        Ok(teachings) => state.teachings_loaded(teachings),
        Err(err) => tracing::warn!("teachings fetch failed: {err}"),
    }

    match get::<_, Vec<Quote>>(repo, Endpoint::Quotes) {
        Ok(quotes) => state.quotes_loaded(quotes),
        Err(err) => tracing::warn!("quotes fetch failed: {err}"),
    }

    match get::<_, Vec<Event>>(repo, Endpoint::Events) {
        Ok(events) => state.events_loaded(events),
        Err(err) => tracing::warn!("events fetch failed: {err}"),
    }

    tracing::debug!(
        teachings = state.teachings.len(),
        quotes = state.quotes.len(),
        events = state.events.len(),
        "content fetch finished"
    );
}

fn get<R: ContentRepository, T: DeserializeOwned>(
    repo: &R,
    endpoint: Endpoint,
) -> Result<T, FetchError> {
    let path = endpoint.path();
    let response = routes::route(repo, Method::Get, path);
    decode(path, response)
}

fn decode<T: DeserializeOwned>(path: &'static str, response: ApiResponse) -> Result<T, FetchError> {
    if !response.is_success() {
        return Err(FetchError::Status {
            path,
            status: response.status,
            message: response.error_message().unwrap_or_default().to_string(),
        });
    }
    serde_json::from_value(response.body).map_err(|err| FetchError::Decode {
        path,
        reason: err.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub mobile_menu_open: bool,
    pub active_section: String,
    pub scroll_progress: f64,
    pub is_scrolled: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            mobile_menu_open: false,
            active_section: "home".to_string(),
            scroll_progress: 0.0,
            is_scrolled: false,
        }
    }
}

impl UiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn set_active_section(&mut self, section: impl Into<String>) {
        self.active_section = section.into();
    }

    pub fn set_scroll_progress(&mut self, progress: f64) {
        self.scroll_progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    pub fn set_is_scrolled(&mut self, scrolled: bool) {
        self.is_scrolled = scrolled;
    }

    /// Fold a scroll sample in. Returns whether anything changed, so callers
    /// can skip redundant signal writes.
    pub fn observe_scroll(&mut self, offset: f64, max: f64) -> bool {
        let before = (self.is_scrolled, self.scroll_progress);
        self.set_is_scrolled(offset > SCROLLED_THRESHOLD_PX);
        self.set_scroll_progress(if max > 0.0 { offset / max } else { 0.0 });
        before != (self.is_scrolled, self.scroll_progress)
    }
}
