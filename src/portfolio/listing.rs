use crate::configuration::Settings;
use crate::error::PortfolioError;
use crate::foundation::document::{load_document, ArtistSummary};
use crate::process::{list_artist_folders, FolderSummary};
use log::warn;

/// A candidate folder and whether its suggested id exists in the document.
///
/// `linked` is `None` when the document could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderListing {
    pub folder: FolderSummary,
    pub linked: Option<bool>,
}

/// Id, name and artwork count of every artist in the document.
pub fn list_artists(settings: &Settings) -> Result<Vec<ArtistSummary>, PortfolioError> {
    let document = load_document(&settings.document_file())?;
    Ok(document.artist_summaries())
}

/// Candidate artist folders with image counts, checked against the document
/// when it is readable.
pub fn list_folders(settings: &Settings) -> Result<Vec<FolderListing>, PortfolioError> {
    let folders = list_artist_folders(settings)?;

    let document = match load_document(&settings.document_file()) {
        Ok(document) => Some(document),
        Err(e) => {
            warn!("Folder listing without artist links: {}", e);
            None
        }
    };

    Ok(folders
        .into_iter()
        .map(|folder| FolderListing {
            linked: document
                .as_ref()
                .map(|document| document.contains_artist(&folder.suggested_id)),
            folder,
        })
        .collect())
}
