/// A normalized lookup query.
///
/// `Invalid` marks input that did not yield an (artist, album) pair.
/// Invalid queries are skipped entirely downstream: no network traffic,
/// no recorded failure, an empty output line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    Valid(AlbumQuery),
    Invalid,
}

/// An (artist, album) pair plus the label used in diagnostics.
///
/// At least one of `artist` and `album` is non-empty. The label is derived
/// from the pair, so two differently-written inputs naming the same pair
/// compare equal and are resolved once per batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlbumQuery {
    pub artist: String,
    pub album: String,
    pub label: String,
}

impl Query {
    /// Build a query from its parts, deriving the label.
    ///
    /// Returns `Query::Invalid` when both parts are empty.
    pub fn from_parts(artist: impl Into<String>, album: impl Into<String>) -> Query {
        let artist = artist.into();
        let album = album.into();
        let label = match (artist.is_empty(), album.is_empty()) {
            (true, true) => return Query::Invalid,
            (false, true) => artist.clone(),
            (true, false) => album.clone(),
            (false, false) => format!("{artist} - {album}"),
        };
        Query::Valid(AlbumQuery {
            artist,
            album,
            label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_reconstruction() {
        let Query::Valid(q) = Query::from_parts("Radiohead", "OK Computer") else {
            panic!("expected a valid query");
        };
        assert_eq!(q.label, "Radiohead - OK Computer");

        let Query::Valid(q) = Query::from_parts("", "Nevermind") else {
            panic!("expected a valid query");
        };
        assert_eq!(q.label, "Nevermind");

        let Query::Valid(q) = Query::from_parts("Boards of Canada", "") else {
            panic!("expected a valid query");
        };
        assert_eq!(q.label, "Boards of Canada");
    }

    #[test]
    fn test_empty_pair_is_invalid() {
        assert_eq!(Query::from_parts("", ""), Query::Invalid);
    }

    #[test]
    fn test_same_pair_compares_equal() {
        assert_eq!(
            Query::from_parts("Nirvana", "Nevermind"),
            Query::from_parts("Nirvana", "Nevermind"),
        );
    }
}
