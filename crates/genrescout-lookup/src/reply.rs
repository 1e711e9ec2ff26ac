use serde::{Deserialize, Deserializer};

/// A decoded opensearch reply.
///
/// The wire format is a positional 4-element array: the echoed query,
/// suggested titles, descriptive snippets, and page URIs, in that order.
/// Anything else (wrong arity, non-string elements) is a decode error.
#[derive(Debug, Clone)]
pub struct SearchReply {
    pub query: String,
    pub suggestions: Vec<String>,
    pub snippets: Vec<String>,
    pub uris: Vec<String>,
}

impl<'de> Deserialize<'de> for SearchReply {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (query, suggestions, snippets, uris) =
            <(String, Vec<String>, Vec<String>, Vec<String>)>::deserialize(deserializer)?;
        Ok(SearchReply {
            query,
            suggestions,
            snippets,
            uris,
        })
    }
}
