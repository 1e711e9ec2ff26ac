/// Candidate search strings for an (artist, album) pair, most specific
/// first. Callers stop at the first variant that yields genres, so the
/// list is not deduplicated.
///
/// The parenthesized forms match Wikipedia's album article naming
/// convention, steering the search toward the album page rather than the
/// artist's general page.
pub fn search_variants(artist: &str, album: &str) -> Vec<String> {
    let mut variants = Vec::new();
    if !artist.is_empty() && !album.is_empty() {
        variants.push(format!("{album} ({artist} album)"));
    }
    if !album.is_empty() {
        variants.push(format!("{album} (album)"));
        variants.push(album.to_string());
    }
    if !artist.is_empty() {
        variants.push(artist.to_string());
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_parts() {
        assert_eq!(
            search_variants("The Beatles", "Abbey Road"),
            vec![
                "Abbey Road (The Beatles album)",
                "Abbey Road (album)",
                "Abbey Road",
                "The Beatles",
            ],
        );
    }

    #[test]
    fn test_album_only() {
        assert_eq!(
            search_variants("", "Nevermind"),
            vec!["Nevermind (album)", "Nevermind"],
        );
    }

    #[test]
    fn test_artist_only() {
        assert_eq!(search_variants("Aphex Twin", ""), vec!["Aphex Twin"]);
    }
}
