use crate::configuration::Settings;
use crate::error::PortfolioError;
use crate::foundation::utils::{has_image_extension, slugify};
use log::warn;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// A top-level site folder that looks like it holds an artist's images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSummary {
    pub name: String,
    pub image_count: usize,
    pub suggested_id: String,
}

/// Image file names directly inside `folder`, sorted ascending.
///
/// The folder must exist and be a directory; an empty result therefore
/// always means "no images", never "nothing to read".
pub fn collect_images(folder: &Path) -> Result<Vec<String>, PortfolioError> {
    if !folder.exists() {
        return Err(PortfolioError::FolderNotFound(folder.to_path_buf()));
    }
    if !folder.is_dir() {
        return Err(PortfolioError::NotADirectory(folder.to_path_buf()));
    }

    let mut images =
        image_file_names(folder).map_err(|source| PortfolioError::FolderRead {
            path: folder.to_path_buf(),
            source,
        })?;
    images.sort();
    Ok(images)
}

/// Candidate artist folders under the site root, sorted by name.
///
/// Hidden folders and the configured exclusions are skipped. A folder whose
/// contents cannot be read is reported with zero images.
pub fn list_artist_folders(settings: &Settings) -> Result<Vec<FolderSummary>, PortfolioError> {
    let root = &settings.site_root;
    let mut folders = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| PortfolioError::FolderRead {
            path: root.to_path_buf(),
            source: io::Error::from(e),
        })?;

        if !entry.path().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            warn!("Skipping folder with non UTF-8 name: {}", entry.path().display());
            continue;
        };
        if name.starts_with('.') || settings.is_excluded_folder(name) {
            continue;
        }

        let image_count = match image_file_names(entry.path()) {
            Ok(images) => images.len(),
            Err(e) => {
                warn!("Could not read {}: {}", entry.path().display(), e);
                0
            }
        };

        folders.push(FolderSummary {
            name: name.to_string(),
            image_count,
            suggested_id: slugify(name),
        });
    }

    folders.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(folders)
}

/// Non-recursive listing of regular files with an image extension.
fn image_file_names(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) if has_image_extension(name) => names.push(name.to_string()),
            Some(_) => {}
            None => warn!("Skipping file with non UTF-8 name: {}", entry.path().display()),
        }
    }

    Ok(names)
}
