pub mod client;
pub mod reply;
pub mod scrape;
pub mod variants;

pub use client::{first_genres, VariantLookup, WikipediaClient};
