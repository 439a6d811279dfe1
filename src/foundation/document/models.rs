use serde::{Deserialize, Serialize};

/// One artwork entry as stored under an artist's `artworks` key.
///
/// Field order here is the order written to disk.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ArtworkRecord {
    pub title: String,
    pub year: String,
    pub medium: String,
    pub dimensions: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistSummary {
    pub id: String,
    pub name: String,
    pub artwork_count: usize,
}
