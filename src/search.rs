//! Search view state machine
//!
//! The visible state of the results page is a pure function of the
//! [`SearchMachine`]. A new query always re-enters through `Loading`, and
//! a response only applies if it carries the ticket of the latest query.

use crate::error::ApiError;
use crate::scope::{RequestSeq, Ticket};
use crate::types::SearchResult;

pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch search results. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    NoQuery,
    Loading { query: String },
    Succeeded { query: String, results: Vec<SearchResult> },
    Empty { query: String },
    Failed { query: String, message: String },
}

impl SearchState {
    /// Query this state belongs to.
    pub fn query(&self) -> Option<&str> {
        match self {
            SearchState::NoQuery => None,
            SearchState::Loading { query }
            | SearchState::Succeeded { query, .. }
            | SearchState::Empty { query }
            | SearchState::Failed { query, .. } => Some(query),
        }
    }

    /// Line shown above (or instead of) the result list.
    pub fn status_line(&self) -> String {
        match self {
            SearchState::NoQuery => "Please enter a search query.".to_string(),
            SearchState::Loading { query } => format!("Searching for \"{}\"...", query),
            SearchState::Succeeded { query, .. } => format!("Results for \"{}\"", query),
            SearchState::Empty { query } => format!("No results found for \"{}\".", query),
            SearchState::Failed { message, .. } => format!("Error: {}", message),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SearchState::Succeeded { .. } | SearchState::Empty { .. } | SearchState::Failed { .. }
        )
    }
}

/// A search that has been issued and awaits its response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    ticket: Ticket,
    query: String,
}

impl SearchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Clone)]
pub struct SearchMachine {
    state: SearchState,
    seq: RequestSeq,
}

impl SearchMachine {
    pub fn new() -> Self {
        Self {
            state: SearchState::NoQuery,
            seq: RequestSeq::new(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Start a search for `query`, or fall back to `NoQuery` when it is
    /// absent or blank. Any in-flight search becomes stale either way.
    pub fn issue(&mut self, query: Option<&str>) -> Option<SearchTicket> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let Some(query) = query else {
            self.seq.invalidate();
            self.state = SearchState::NoQuery;
            return None;
        };

        let ticket = self.seq.next();
        self.state = SearchState::Loading {
            query: query.to_string(),
        };
        Some(SearchTicket {
            ticket,
            query: query.to_string(),
        })
    }

    /// Apply the outcome of a search. Returns false when the response was
    /// stale or the view is gone.
    pub fn resolve(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<SearchResult>, ApiError>,
    ) -> bool {
        if !self.seq.is_current(ticket.ticket) {
            tracing::warn!("Ignoring stale search response for \"{}\"", ticket.query);
            return false;
        }

        let query = ticket.query.clone();
        self.state = match outcome {
            Ok(results) if results.is_empty() => SearchState::Empty { query },
            Ok(results) => SearchState::Succeeded { query, results },
            Err(e) => {
                tracing::error!("Error fetching search results: {}", e);
                SearchState::Failed {
                    query,
                    message: SEARCH_FAILED_MESSAGE.to_string(),
                }
            }
        };
        true
    }

    /// Mark the owning view as unmounted.
    pub fn detach(&mut self) {
        self.seq.detach();
    }
}

impl Default for SearchMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// In-app link to the results page for a typed term, or `None` when the
/// term is blank.
pub fn search_href(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    // form encoding escapes a literal '+' as %2B, so every remaining '+' is a space
    let encoded: String = url::form_urlencoded::byte_serialize(term.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    Some(format!("/search?q={}", encoded))
}
