// Query normalization.
//
// Two input shapes: plain command-line tokens ("ARTIST - ALBUM" or just
// "ALBUM"), and playlist-style lines as copied from a foobar2000
// selection ("ARTIST - [ALBUM CD1 #3]").

use std::sync::OnceLock;

use genrescout_model::Query;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Parse command-line tokens of the form `"ARTIST - ALBUM"` or `"ALBUM"`.
pub fn from_args<S: AsRef<str>>(args: &[S]) -> Vec<Query> {
    args.iter().map(|arg| parse_token(arg.as_ref())).collect()
}

/// Parse one command-line token.
///
/// The token is split once on the first `" - "`; a token without the
/// separator is treated as an album title with no artist.
pub fn parse_token(token: &str) -> Query {
    let token = nfc(token);
    match token.split_once(" - ") {
        Some((artist, album)) => Query::from_parts(artist, album),
        None => Query::from_parts("", token),
    }
}

/// Parse playlist-style lines.
pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Query> {
    lines
        .iter()
        .map(|line| parse_playlist_line(line.as_ref()))
        .collect()
}

/// Optional artist prefix, then a bracketed album title that may carry
/// trailing disc and track-number qualifiers.
fn playlist_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:(.+) - )?\[(.+?)?(?: CD\d+)?(?: #\d+)?\]").expect("valid pattern")
    })
}

/// Parse one playlist line, e.g. `"Radiohead - [OK Computer CD1 #3]"`.
///
/// Disc and track qualifiers are stripped from the album title. Lines
/// that do not match the playlist shape come back as `Query::Invalid`.
pub fn parse_playlist_line(line: &str) -> Query {
    let line = nfc(line);
    let Some(caps) = playlist_item().captures(&line) else {
        tracing::debug!(line = %line, "line does not look like a playlist item");
        return Query::Invalid;
    };
    let artist = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    let album = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    Query::from_parts(artist, album)
}

/// Normalize to NFC so differently-composed spellings of the same title
/// produce the same query.
fn nfc(input: &str) -> String {
    input.nfc().collect()
}
