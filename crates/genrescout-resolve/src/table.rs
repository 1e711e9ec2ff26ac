use std::collections::HashMap;

use genrescout_model::{AlbumQuery, Failure, LookupError, Query};
use tokio::sync::Mutex;

/// Shared per-batch store of resolved genre lists and failures.
///
/// One lock guards both collections; it is only ever held for map
/// operations and never escapes this module. `claim` is the test-and-set
/// that guarantees each distinct (artist, album) pair is resolved by
/// exactly one worker no matter how many batch positions name it.
#[derive(Default)]
pub struct ResultTable {
    state: Mutex<TableState>,
}

#[derive(Default)]
struct TableState {
    /// `None` marks a resolution in progress.
    entries: HashMap<AlbumQuery, Option<Vec<String>>>,
    failures: Vec<Failure>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a pair for resolution. Returns false when another worker has
    /// already claimed or resolved it, in which case the caller must do
    /// nothing at all.
    pub async fn claim(&self, query: &AlbumQuery) -> bool {
        let mut state = self.state.lock().await;
        if state.entries.contains_key(query) {
            return false;
        }
        state.entries.insert(query.clone(), None);
        true
    }

    /// Store the resolved genre list for a previously claimed pair.
    pub async fn fulfill(&self, query: &AlbumQuery, genres: Vec<String>) {
        let mut state = self.state.lock().await;
        state.entries.insert(query.clone(), Some(genres));
    }

    /// Record a failed resolution for a previously claimed pair.
    pub async fn record_failure(&self, query: &AlbumQuery, error: LookupError) {
        let mut state = self.state.lock().await;
        state.failures.push(Failure {
            label: query.label.clone(),
            error,
        });
    }

    /// Project the table back onto the input order and drain the
    /// failures.
    ///
    /// Duplicate positions read the same entry; invalid queries and
    /// unfulfilled placeholders come out as empty lists.
    pub async fn finish(&self, queries: &[Query]) -> (Vec<Vec<String>>, Vec<Failure>) {
        let mut state = self.state.lock().await;
        let genres = queries
            .iter()
            .map(|query| match query {
                Query::Valid(q) => state.entries.get(q).cloned().flatten().unwrap_or_default(),
                Query::Invalid => Vec::new(),
            })
            .collect();
        (genres, std::mem::take(&mut state.failures))
    }
}
