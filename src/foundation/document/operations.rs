use crate::error::PortfolioError;
use crate::foundation::document::{ArtistSummary, ArtworkRecord};
use crate::foundation::utils::atomic_write_str;
use log::{debug, info};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const ARTISTS_KEY: &str = "artists";

/// The whole portfolio document, kept as a JSON tree so that fields this tool
/// does not know about survive a load/save cycle in their original order.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioDocument {
    root: Map<String, Value>,
}

/// Mutable view of one artist object inside a [`PortfolioDocument`].
///
/// Only `thumbnailImage` and `artworks` are ever written through it.
pub struct ArtistEntry<'a> {
    fields: &'a mut Map<String, Value>,
}

impl PortfolioDocument {
    /// Parses and validates a document. `path` is only used in error messages.
    pub fn from_json_str(json: &str, path: &Path) -> Result<Self, PortfolioError> {
        let value: Value =
            serde_json::from_str(json).map_err(|source| PortfolioError::DocumentParse {
                path: path.to_path_buf(),
                source,
            })?;

        let shape_error = |reason: &str| PortfolioError::DocumentShape {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        let Value::Object(root) = value else {
            return Err(shape_error("top-level value is not an object"));
        };

        let artists = root
            .get(ARTISTS_KEY)
            .ok_or_else(|| shape_error("missing \"artists\" key"))?
            .as_array()
            .ok_or_else(|| shape_error("\"artists\" is not an array"))?;

        if let Some(index) = artists.iter().position(|artist| !artist.is_object()) {
            return Err(shape_error(&format!("artist entry {} is not an object", index)));
        }

        Ok(Self { root })
    }

    fn artists(&self) -> impl Iterator<Item = &Map<String, Value>> {
        self.root
            .get(ARTISTS_KEY)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }

    pub fn artist_count(&self) -> usize {
        self.artists().count()
    }

    /// Id, name and artwork count of every artist, in document order.
    pub fn artist_summaries(&self) -> Vec<ArtistSummary> {
        self.artists()
            .map(|fields| ArtistSummary {
                id: str_field(fields, "id").to_string(),
                name: str_field(fields, "name").to_string(),
                artwork_count: fields
                    .get("artworks")
                    .and_then(Value::as_array)
                    .map_or(0, Vec::len),
            })
            .collect()
    }

    pub fn contains_artist(&self, artist_id: &str) -> bool {
        self.artists()
            .any(|fields| fields.get("id").and_then(Value::as_str) == Some(artist_id))
    }

    /// First artist whose `id` equals `artist_id`.
    pub fn find_artist_mut(&mut self, artist_id: &str) -> Option<ArtistEntry<'_>> {
        self.root
            .get_mut(ARTISTS_KEY)
            .and_then(Value::as_array_mut)?
            .iter_mut()
            .filter_map(Value::as_object_mut)
            .find(|fields| fields.get("id").and_then(Value::as_str) == Some(artist_id))
            .map(|fields| ArtistEntry { fields })
    }

    /// Two-space indented JSON with non-ASCII characters written literally.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(&self.root)?;
        json.push('\n');
        Ok(json)
    }
}

impl ArtistEntry<'_> {
    pub fn id(&self) -> &str {
        str_field(&*self.fields, "id")
    }

    pub fn name(&self) -> &str {
        str_field(&*self.fields, "name")
    }

    pub fn thumbnail_image(&self) -> Option<&str> {
        self.fields.get("thumbnailImage").and_then(Value::as_str)
    }

    pub fn set_thumbnail_image(&mut self, image: &str) {
        self.fields
            .insert("thumbnailImage".to_string(), Value::String(image.to_string()));
    }

    /// Replaces the artist's artworks wholesale; previous entries are dropped.
    pub fn replace_artworks(&mut self, artworks: &[ArtworkRecord]) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(artworks)?;
        self.fields.insert("artworks".to_string(), value);
        Ok(())
    }
}

fn str_field<'a>(fields: &'a Map<String, Value>, key: &str) -> &'a str {
    fields.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Reads and validates the portfolio document at `path`.
pub fn load_document(path: &Path) -> Result<PortfolioDocument, PortfolioError> {
    debug!("Reading portfolio document from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| PortfolioError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;
    let document = PortfolioDocument::from_json_str(&content, path)?;

    info!(
        "Loaded {} artists from {}",
        document.artist_count(),
        path.display()
    );
    Ok(document)
}

/// Serializes the full document and atomically replaces the file at `path`.
pub fn save_document(path: &Path, document: &PortfolioDocument) -> Result<(), PortfolioError> {
    let json = document.to_json_string()?;

    atomic_write_str(path, &json).map_err(|source| PortfolioError::DocumentWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Saved portfolio document to {}", path.display());
    Ok(())
}
