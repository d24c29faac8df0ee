//! Menu Search State
//!
//! Search-as-you-type for the order screen. Keystrokes update the query
//! immediately; a lookup is only sent once typing has paused for the quiet
//! period, and only the most recently sent lookup may change the results.
//!
//! The state machine is timer-agnostic: `set_query` hands out a
//! [`DebounceTicket`] and the caller reports back with
//! [`SearchState::debounce_elapsed`] when the quiet period for that ticket
//! has passed. Tickets and request tokens from superseded input are stale
//! and ignored.

use log::debug;

use crate::domain::MenuItem;
use crate::error::ApiError;
use crate::gateway::MenuSearchGateway;
use crate::latest::{RequestSequence, RequestToken};

const SEARCH_FAILED: &str = "Gagal mencari menu.";

/// Identifies one keystroke's pending quiet period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Keys that act on the open suggestion list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(NavKey::Up),
            "ArrowDown" => Some(NavKey::Down),
            "Enter" => Some(NavKey::Enter),
            _ => None,
        }
    }
}

/// A lookup the caller should perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub token: RequestToken,
    pub term: String,
}

impl SearchRequest {
    pub async fn execute<G: MenuSearchGateway + ?Sized>(self, gateway: &G) -> SearchResponse {
        let result = gateway.search_menu_items(&self.term).await;
        SearchResponse {
            token: self.token,
            result,
        }
    }
}

/// Outcome of a lookup, tagged with the token it was issued under
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub token: RequestToken,
    pub result: Result<Vec<MenuItem>, ApiError>,
}

/// What the caller has to do after a quiet period elapsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEffect {
    /// Ticket was stale or the term did not change
    Idle,
    /// Term is blank: results cleared, no lookup
    Cleared,
    /// Send this lookup
    Fetch(SearchRequest),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    query: String,
    debounced_query: String,
    results: Vec<MenuItem>,
    highlight_index: usize,
    is_loading: bool,
    error: Option<String>,
    is_open: bool,
    debounce_generation: u64,
    requests: RequestSequence,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    pub fn results(&self) -> &[MenuItem] {
        &self.results
    }

    pub fn highlight_index(&self) -> usize {
        self.highlight_index
    }

    pub fn highlighted(&self) -> Option<&MenuItem> {
        self.results.get(self.highlight_index)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Record a keystroke. Any earlier pending ticket becomes stale. A blank
    /// query drops the results and any in-flight lookup right away.
    pub fn set_query(&mut self, text: impl Into<String>) -> DebounceTicket {
        self.query = text.into();
        self.debounce_generation += 1;
        if self.query.trim().is_empty() {
            self.clear_results();
        }
        DebounceTicket(self.debounce_generation)
    }

    fn clear_results(&mut self) {
        self.requests.invalidate();
        self.debounced_query.clear();
        self.is_loading = false;
        self.error = None;
        self.results.clear();
        self.highlight_index = 0;
        self.is_open = false;
    }

    /// The quiet period for `ticket` has passed
    pub fn debounce_elapsed(&mut self, ticket: DebounceTicket) -> SearchEffect {
        if ticket.0 != self.debounce_generation {
            return SearchEffect::Idle;
        }

        let term = self.query.trim().to_string();
        if term.is_empty() {
            self.clear_results();
            return SearchEffect::Cleared;
        }
        if term == self.debounced_query {
            return SearchEffect::Idle;
        }
        self.debounced_query = term.clone();

        let token = self.requests.issue();
        self.is_loading = true;
        self.error = None;
        debug!("menu search {} for {:?}", token, term);
        SearchEffect::Fetch(SearchRequest { token, term })
    }

    /// Apply a lookup result. Returns false when the response was stale.
    pub fn resolve(&mut self, response: SearchResponse) -> bool {
        if !self.requests.is_current(response.token) {
            debug!("discarding stale menu search {}", response.token);
            return false;
        }

        self.is_loading = false;
        self.highlight_index = 0;
        match response.result {
            Ok(items) => {
                self.results = items;
                self.error = None;
                self.is_open = true;
            }
            Err(err) => {
                // Same term typed again must send a fresh lookup
                self.debounced_query.clear();
                self.results.clear();
                self.error = Some(err.user_message(SEARCH_FAILED));
                self.is_open = false;
            }
        }
        true
    }

    /// Handle a navigation key. Enter returns the chosen item (already
    /// removed from the search state); arrows wrap around the list.
    pub fn navigate(&mut self, key: NavKey) -> Option<MenuItem> {
        if !self.is_open || self.results.is_empty() {
            return None;
        }
        let len = self.results.len();
        match key {
            NavKey::Down => {
                self.highlight_index = (self.highlight_index + 1) % len;
                None
            }
            NavKey::Up => {
                self.highlight_index = (self.highlight_index + len - 1) % len;
                None
            }
            NavKey::Enter => self.choose(self.highlight_index),
        }
    }

    /// Pick the result at `index` (mouse click) and reset the search
    pub fn choose(&mut self, index: usize) -> Option<MenuItem> {
        let item = self.results.get(index)?.clone();
        self.query.clear();
        self.debounced_query.clear();
        self.results.clear();
        self.highlight_index = 0;
        self.is_open = false;
        self.error = None;
        self.abandon();
        Some(item)
    }

    /// Close the list without touching the typed query
    pub fn dismiss(&mut self) {
        self.is_open = false;
    }

    /// Show the last results again, e.g. when the input regains focus
    pub fn reopen(&mut self) {
        if !self.results.is_empty() {
            self.is_open = true;
        }
    }

    /// Forget pending quiet periods and in-flight lookups
    pub fn abandon(&mut self) {
        self.debounce_generation += 1;
        self.requests.invalidate();
        self.is_loading = false;
    }
}

/// Finish the quiet period for `ticket` and, if that calls for a lookup,
/// perform it against `gateway` and apply the result. Returns the effect.
pub async fn run_lookup<G: MenuSearchGateway + ?Sized>(
    state: &mut SearchState,
    gateway: &G,
    ticket: DebounceTicket,
) -> SearchEffect {
    let effect = state.debounce_elapsed(ticket);
    if let SearchEffect::Fetch(request) = &effect {
        let response = request.clone().execute(gateway).await;
        state.resolve(response);
    }
    effect
}
