/// # Command Handlers
///
/// Each handler loads what it needs, calls into the library and renders the
/// result for the terminal. Errors are returned to `main`, which reports them
/// and sets the exit status.
///
use crate::configuration::{self, Settings};
use crate::error::PortfolioError;
use crate::portfolio;
use crate::process::parse_filename;
use log::debug;
use std::path::{Path, PathBuf};

/// Command-line overrides applied on top of the configuration file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub document_path: Option<PathBuf>,
    pub site_root: Option<PathBuf>,
}

pub fn load_settings(cfg_file: &Path, overrides: Overrides) -> Result<Settings, PortfolioError> {
    let mut settings = configuration::get_configuration(cfg_file)?;

    if let Some(site_root) = overrides.site_root {
        settings.site_root = site_root;
    }
    if let Some(document_path) = overrides.document_path {
        settings.document_path = document_path;
    }

    debug!("Using settings: {:?}", settings);
    Ok(settings)
}

pub fn list_artists(settings: &Settings) -> Result<(), PortfolioError> {
    let artists = portfolio::list_artists(settings)?;

    println!("\n\x1b[1m\x1b[34m📋 Available Artists:\x1b[0m");
    println!("{}", "-".repeat(50));
    for artist in &artists {
        println!("  ID: {}", artist.id);
        println!("  Name: {}", artist.name);
        println!("  Artworks: {}", artist.artwork_count);
        println!();
    }

    Ok(())
}

pub fn list_folders(settings: &Settings) -> Result<(), PortfolioError> {
    let listings = portfolio::list_folders(settings)?;

    println!("\n\x1b[1m\x1b[34m📁 Artist Folders:\x1b[0m");
    println!("{}", "-".repeat(50));
    for listing in &listings {
        let folder = &listing.folder;
        let link = match listing.linked {
            Some(true) => format!("\x1b[32m→ {}\x1b[0m", folder.suggested_id),
            Some(false) => format!("\x1b[33m→ {} (not in document)\x1b[0m", folder.suggested_id),
            None => String::new(),
        };
        println!("  {} ({} images) {}", folder.name, folder.image_count, link);
    }

    Ok(())
}

pub fn update(
    settings: &Settings,
    folder: &str,
    artist_id: &str,
    dry_run: bool,
) -> Result<(), PortfolioError> {
    portfolio::update_artist_portfolio(settings, folder, artist_id, dry_run).map(|_| ())
}

pub fn parse(filenames: &[String]) {
    for filename in filenames {
        let details = parse_filename(filename);
        println!("\x1b[1m{}\x1b[0m", filename);
        println!("  Title:      {}", details.title);
        println!("  Year:       {}", details.year);
        println!("  Medium:     {}", details.medium);
        println!("  Dimensions: {}", details.dimensions);
    }
}

pub fn create_config(cfg_file: &Path) -> Result<(), PortfolioError> {
    configuration::create_config(cfg_file)
}
