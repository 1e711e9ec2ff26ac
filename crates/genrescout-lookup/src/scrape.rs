// Genre extraction from fetched article pages. Pure; no I/O.

use scraper::{ElementRef, Html, Selector};

/// Extract genre names from an album or artist page.
///
/// Album pages carry a compact audio-metadata table (`table.haudio`) whose
/// category cells link each genre; that tier wins when it yields anything.
/// Otherwise the generic infobox is consulted: the row whose header link
/// reads exactly "Genre" contributes every link in its data cell.
/// Document order is kept and duplicates are not removed.
pub fn scrape_genres(doc: &Html) -> Vec<String> {
    let genres = haudio_genres(doc);
    if !genres.is_empty() {
        return genres;
    }
    infobox_genres(doc)
}

fn haudio_genres(doc: &Html) -> Vec<String> {
    let links = Selector::parse("table.haudio td.category a").expect("valid selector");
    doc.select(&links)
        .map(|link| title_case(&link_text(link)))
        .collect()
}

fn infobox_genres(doc: &Html) -> Vec<String> {
    let header_links = Selector::parse("table.infobox th > a").expect("valid selector");
    let cell_links = Selector::parse("td a").expect("valid selector");

    let mut genres = Vec::new();
    for link in doc.select(&header_links) {
        if link_text(link) != "Genre" {
            continue;
        }
        let Some(row) = enclosing_row(link) else {
            continue;
        };
        genres.extend(row.select(&cell_links).map(|a| title_case(&link_text(a))));
    }
    genres
}

/// Walk from a header link up to the table row that contains it.
fn enclosing_row(link: ElementRef) -> Option<ElementRef> {
    let header = link.parent().and_then(ElementRef::wrap)?;
    header.parent().and_then(ElementRef::wrap)
}

fn link_text(link: ElementRef) -> String {
    link.text().collect()
}

/// Uppercase only the first character of each space-delimited word; the
/// rest of each word is kept verbatim ("post-punk" becomes "Post-punk").
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
