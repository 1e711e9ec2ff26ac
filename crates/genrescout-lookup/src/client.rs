use anyhow::Context;
use async_trait::async_trait;
use scraper::Html;

use genrescout_model::{GenreSource, LookupError};

use crate::reply::SearchReply;
use crate::scrape;
use crate::variants::search_variants;

const API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// HTTP client for the Wikipedia search API and article pages.
///
/// One underlying `reqwest::Client` is shared across all concurrent
/// lookups of a batch.
pub struct WikipediaClient {
    http: reqwest::Client,
}

impl WikipediaClient {
    pub fn new() -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("genrescout/0.1 (album genre lookup tool)")
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http })
    }

    /// Run one opensearch query.
    async fn search(&self, query: &str) -> Result<SearchReply, LookupError> {
        let response = self
            .http
            .get(API_URL)
            .query(&[("action", "opensearch"), ("search", query)])
            .send()
            .await
            .map_err(|e| LookupError::Search(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(LookupError::Search(format!("HTTP {status} for {API_URL}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| LookupError::Decode(e.to_string()))
    }

    /// Fetch one article page and parse it into a queryable document.
    async fn page(&self, uri: &str) -> Result<Html, LookupError> {
        tracing::debug!(url = %uri, "Fetching page");
        let response = self
            .http
            .get(uri)
            .send()
            .await
            .map_err(|e| LookupError::Fetch(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(LookupError::Fetch(format!("HTTP {status} for {uri}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;
        Ok(Html::parse_document(&body))
    }
}

/// One search-then-scrape attempt for a single candidate query string.
///
/// Factored as a trait so the fallback order can be exercised against
/// stubs; `WikipediaClient` is the production implementation.
#[async_trait]
pub trait VariantLookup: Send + Sync {
    async fn genres_for(&self, query: &str) -> Result<Vec<String>, LookupError>;
}

#[async_trait]
impl VariantLookup for WikipediaClient {
    async fn genres_for(&self, query: &str) -> Result<Vec<String>, LookupError> {
        tracing::debug!(query = %query, "Searching Wikipedia");
        let reply = self.search(query).await?;
        if reply.uris.is_empty() {
            return Ok(Vec::new());
        }

        // TODO: consult the remaining result URIs as well.
        let doc = self.page(&reply.uris[0]).await?;
        Ok(scrape::scrape_genres(&doc))
    }
}

/// Resolve an (artist, album) pair by trying each search variant in
/// order, returning the first non-empty genre list.
///
/// Transport and decode failures abort the whole resolution; the
/// remaining variants are not tried. Only an exhausted variant list maps
/// to `NoGenres`.
pub async fn first_genres<L: VariantLookup>(
    lookup: &L,
    artist: &str,
    album: &str,
) -> Result<Vec<String>, LookupError> {
    for variant in search_variants(artist, album) {
        let genres = lookup.genres_for(&variant).await?;
        if !genres.is_empty() {
            return Ok(genres);
        }
    }
    Err(LookupError::NoGenres)
}

#[async_trait]
impl GenreSource for WikipediaClient {
    async fn album_genres(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<Vec<String>, LookupError> {
        first_genres(self, artist, album).await
    }
}
