use async_trait::async_trait;

use crate::error::LookupError;

/// Anything that can resolve an (artist, album) pair into genre names.
///
/// The batch scheduler only talks to this trait. The Wikipedia client is
/// the production implementation; tests substitute counting stubs.
#[async_trait]
pub trait GenreSource: Send + Sync {
    /// Resolve one pair. At least one of `artist` and `album` is non-empty.
    async fn album_genres(&self, artist: &str, album: &str)
        -> Result<Vec<String>, LookupError>;
}
