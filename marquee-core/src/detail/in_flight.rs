use std::sync::Arc;

use dashmap::DashMap;
use marquee_model::{DetailRequest, MovieId, RequestId};
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct InFlightEntry {
    pub movie_id: MovieId,
    pub token: CancellationToken,
}

/// Page views that are currently open, keyed by request id.
#[derive(Debug, Clone, Default)]
pub struct InFlightRequests {
    entries: Arc<DashMap<RequestId, InFlightEntry>>,
}

impl InFlightRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `request` and return the token that tears it down.
    pub fn register(&self, request: DetailRequest) -> CancellationToken {
        let token = CancellationToken::new();
        self.entries.insert(
            request.request_id,
            InFlightEntry {
                movie_id: request.movie_id,
                token: token.clone(),
            },
        );
        token
    }

    pub fn remove(&self, request_id: RequestId) -> Option<InFlightEntry> {
        self.entries.remove(&request_id).map(|(_, entry)| entry)
    }

    pub fn contains(&self, request_id: RequestId) -> bool {
        self.entries.contains_key(&request_id)
    }

    pub fn requests_for(&self, movie_id: MovieId) -> Vec<RequestId> {
        self.entries
            .iter()
            .filter(|entry| entry.value().movie_id == movie_id)
            .map(|entry| *entry.key())
            .collect()
    }

    /// Cancel every open view of `movie_id`. Entries stay registered until
    /// their views are dropped.
    pub fn cancel_movie(&self, movie_id: MovieId) -> usize {
        let mut cancelled = 0;
        for entry in self.entries.iter() {
            if entry.value().movie_id == movie_id {
                entry.value().token.cancel();
                cancelled += 1;
            }
        }
        debug!(%movie_id, cancelled, "cancelled movie views");
        cancelled
    }

    pub fn cancel_all(&self) -> usize {
        let mut cancelled = 0;
        for entry in self.entries.iter() {
            entry.value().token.cancel();
            cancelled += 1;
        }
        debug!(cancelled, "cancelled all in-flight views");
        cancelled
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One open detail page. Dropping it cancels outstanding work for the view
/// and removes it from the in-flight table.
#[derive(Debug)]
pub struct PageView {
    request: DetailRequest,
    token: CancellationToken,
    table: InFlightRequests,
}

impl PageView {
    pub(crate) fn open(table: &InFlightRequests, movie_id: MovieId) -> Self {
        let request = DetailRequest::new(movie_id);
        let token = table.register(request);
        Self {
            request,
            token,
            table: table.clone(),
        }
    }

    pub fn request(&self) -> DetailRequest {
        self.request
    }

    pub fn movie_id(&self) -> MovieId {
        self.request.movie_id
    }

    pub fn request_id(&self) -> RequestId {
        self.request.request_id
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for PageView {
    fn drop(&mut self) {
        self.token.cancel();
        self.table.remove(self.request.request_id);
    }
}
