//! Regenerating one artist's portfolio entry from a folder of images.
//!
//! The document is loaded, the folder listed and the artist located before
//! anything is changed; the file on disk is only rewritten once the new
//! entry has been built in memory.

use crate::configuration::Settings;
use crate::error::PortfolioError;
use crate::foundation::document::{load_document, save_document, ArtworkRecord};
use crate::process::{collect_images, parse_filename};
use log::debug;

/// What an update did, returned for reporting and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    pub artist_id: String,
    pub artist_name: String,
    pub thumbnail: Option<String>,
    pub artworks: Vec<ArtworkRecord>,
    pub written: bool,
}

/// Replaces the thumbnail and artworks of `artist_id` with the images found
/// in `folder`.
///
/// `folder` is resolved against the site root for listing, but recorded in
/// image paths exactly as given. With `dry_run` the document is left alone.
///
/// # Errors
///
/// Fails without touching the document when it cannot be read or parsed,
/// when `folder` is missing or not a directory, or when no artist has
/// `artist_id`.
pub fn update_artist_portfolio(
    settings: &Settings,
    folder: &str,
    artist_id: &str,
    dry_run: bool,
) -> Result<UpdateSummary, PortfolioError> {
    let document_path = settings.document_file();
    let mut document = load_document(&document_path)?;

    let folder_path = settings.resolve(folder);
    debug!("Resolved folder '{}' to {}", folder, folder_path.display());
    let images = collect_images(&folder_path)?;

    let mut artist = document
        .find_artist_mut(artist_id)
        .ok_or_else(|| PortfolioError::ArtistNotFound(artist_id.to_string()))?;

    let artist_name = match artist.name() {
        "" => artist_id.to_string(),
        name => name.to_string(),
    };

    println!("\n\x1b[1m\x1b[34m📸 Updating portfolio for: {}\x1b[0m", artist_name);
    println!("📁 Folder: {}", folder);
    println!("🖼️  Found {} images", images.len());

    let thumbnail = images.first().map(|first| image_path(folder, first));
    if let (Some(thumbnail), Some(first)) = (&thumbnail, images.first()) {
        artist.set_thumbnail_image(thumbnail);
        println!("🎨 Thumbnail: {}", first);
    }

    let artworks = build_artworks(folder, &images);
    for (i, artwork) in artworks.iter().enumerate() {
        println!("  {}. {} ({})", i + 1, artwork.title, artwork.year);
    }
    artist.replace_artworks(&artworks)?;

    if dry_run {
        println!(
            "\n\x1b[33m🔍 Dry run: {} was not modified\x1b[0m\n",
            document_path.display()
        );
    } else {
        save_document(&document_path, &document)?;
        println!(
            "\n\x1b[32m✅ Successfully updated {} artworks for {}\x1b[0m",
            artworks.len(),
            artist_name
        );
        println!(
            "📝 Please review {} before committing\n",
            document_path.display()
        );
    }

    Ok(UpdateSummary {
        artist_id: artist_id.to_string(),
        artist_name,
        thumbnail,
        artworks,
        written: !dry_run,
    })
}

/// One record per image, in the order given.
pub fn build_artworks(folder: &str, images: &[String]) -> Vec<ArtworkRecord> {
    images
        .iter()
        .map(|file_name| {
            let details = parse_filename(file_name);
            ArtworkRecord {
                title: details.title,
                year: details.year,
                medium: details.medium,
                dimensions: details.dimensions,
                image: image_path(folder, file_name),
            }
        })
        .collect()
}

/// Site-relative image path: `<folder>/<file_name>`.
fn image_path(folder: &str, file_name: &str) -> String {
    format!("{}/{}", folder.trim_end_matches('/'), file_name)
}
