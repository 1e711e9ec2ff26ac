use std::sync::Arc;

use genrescout_model::{Failure, GenreSource, LookupError, Query};
use tokio::task::JoinSet;

use crate::table::ResultTable;

/// The outcome of one batch: genre lists in input order plus whatever
/// failures were collected along the way.
#[derive(Debug)]
pub struct BatchResults {
    pub genres: Vec<Vec<String>>,
    pub failures: Vec<Failure>,
}

/// Resolve a whole batch of queries concurrently.
///
/// One task is spawned per input position, duplicates included; the
/// result table makes sure each distinct pair is looked up at most once,
/// and every position naming that pair reads the one shared outcome. One
/// pair's failure never touches another pair's resolution. Nothing is
/// returned until every task has joined.
pub async fn resolve_batch<S>(queries: &[Query], source: Arc<S>) -> BatchResults
where
    S: GenreSource + 'static,
{
    let table = Arc::new(ResultTable::new());

    let mut tasks = JoinSet::new();
    for query in queries {
        let query = query.clone();
        let table = Arc::clone(&table);
        let source = Arc::clone(&source);
        tasks.spawn(resolve_one(query, table, source));
    }

    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            tracing::warn!(error = %e, "Resolution task aborted");
        }
    }

    let (genres, failures) = table.finish(queries).await;
    BatchResults { genres, failures }
}

/// Resolve a single batch position.
///
/// The network lookup runs outside the table lock; the table is only
/// touched to claim the pair and to write the outcome back.
async fn resolve_one<S: GenreSource>(query: Query, table: Arc<ResultTable>, source: Arc<S>) {
    let Query::Valid(query) = query else {
        return;
    };

    if !table.claim(&query).await {
        // Another task owns this pair; its outcome covers this position.
        return;
    }

    match source.album_genres(&query.artist, &query.album).await {
        Ok(genres) => table.fulfill(&query, genres).await,
        Err(LookupError::NoGenres) => {
            tracing::debug!(query = %query.label, "No genres found");
            table.fulfill(&query, Vec::new()).await;
        }
        Err(error) => table.record_failure(&query, error).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts lookups and answers from a fixed script keyed on the album.
    struct CountingSource {
        calls: AtomicUsize,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl GenreSource for CountingSource {
        async fn album_genres(
            &self,
            _artist: &str,
            album: &str,
        ) -> Result<Vec<String>, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match album {
                "Nevermind" => Ok(vec!["Grunge".to_string(), "Alternative Rock".to_string()]),
                "Obscure" => Err(LookupError::NoGenres),
                "Broken" => Err(LookupError::Fetch("HTTP 404 Not Found".to_string())),
                other => Ok(vec![other.to_string()]),
            }
        }
    }

    #[tokio::test]
    async fn test_duplicates_resolve_once() {
        let source = Arc::new(CountingSource::new());
        let queries = vec![
            Query::from_parts("Nirvana", "Nevermind"),
            Query::from_parts("Radiohead", "Kid A"),
            Query::from_parts("Nirvana", "Nevermind"),
            Query::from_parts("Nirvana", "Nevermind"),
        ];

        let results = resolve_batch(&queries, Arc::clone(&source)).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(results.genres.len(), 4);
        assert_eq!(results.genres[0], vec!["Grunge", "Alternative Rock"]);
        assert_eq!(results.genres[0], results.genres[2]);
        assert_eq!(results.genres[0], results.genres[3]);
        assert_eq!(results.genres[1], vec!["Kid A"]);
        assert!(results.failures.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_positions_stay_empty_and_silent() {
        let source = Arc::new(CountingSource::new());
        let queries = vec![
            Query::Invalid,
            Query::from_parts("Radiohead", "Kid A"),
            Query::Invalid,
        ];

        let results = resolve_batch(&queries, Arc::clone(&source)).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(results.genres.len(), 3);
        assert!(results.genres[0].is_empty());
        assert_eq!(results.genres[1], vec!["Kid A"]);
        assert!(results.genres[2].is_empty());
        assert!(results.failures.is_empty());
    }

    #[tokio::test]
    async fn test_failing_pair_records_one_failure_and_shares_fate() {
        let source = Arc::new(CountingSource::new());
        let queries = vec![
            Query::from_parts("Nobody", "Broken"),
            Query::from_parts("Radiohead", "Kid A"),
            Query::from_parts("Nobody", "Broken"),
        ];

        let results = resolve_batch(&queries, Arc::clone(&source)).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(results.genres.len(), 3);
        assert!(results.genres[0].is_empty());
        assert!(results.genres[2].is_empty());
        assert_eq!(results.genres[1], vec!["Kid A"]);

        assert_eq!(results.failures.len(), 1);
        let failure = &results.failures[0];
        assert_eq!(failure.label, "Nobody - Broken");
        assert!(matches!(failure.error, LookupError::Fetch(_)));
    }

    #[tokio::test]
    async fn test_no_genres_is_an_empty_result_not_a_failure() {
        let source = Arc::new(CountingSource::new());
        let queries = vec![Query::from_parts("Someone", "Obscure")];

        let results = resolve_batch(&queries, Arc::clone(&source)).await;

        assert_eq!(results.genres, vec![Vec::<String>::new()]);
        assert!(results.failures.is_empty());
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let source = Arc::new(CountingSource::new());
        let results = resolve_batch(&[], Arc::clone(&source)).await;

        assert!(results.genres.is_empty());
        assert!(results.failures.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }
}
