use crate::error::PortfolioError;
use config::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Name of the optional settings file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "portfolio.yaml";

pub const DEFAULT_DOCUMENT_PATH: &str = "data/artists.json";

/// Top-level site folders that never hold artist images.
pub const DEFAULT_EXCLUDED_FOLDERS: [&str; 6] = [
    "css",
    "js",
    "data",
    "Images",
    "Videos",
    "Artists _ White Cube_files",
];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub site_root: PathBuf,
    pub document_path: PathBuf,
    pub excluded_folders: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
            document_path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            excluded_folders: DEFAULT_EXCLUDED_FOLDERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Settings {
    /// Settings rooted at `site_root` with every other value at its default.
    pub fn for_site_root<P: AsRef<Path>>(site_root: P) -> Self {
        Self {
            site_root: site_root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// The document path, resolved against the site root when relative.
    pub fn document_file(&self) -> PathBuf {
        self.resolve(&self.document_path)
    }

    /// Resolves a site-relative path. Absolute paths are returned unchanged.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.site_root.join(path)
        }
    }

    pub fn is_excluded_folder(&self, name: &str) -> bool {
        self.excluded_folders.iter().any(|excluded| excluded == name)
    }
}

/// Loads settings from the optional YAML file; keys it leaves out keep their
/// built-in defaults.
///
/// A missing file is fine; a file that exists but does not parse is an error.
pub fn get_configuration(cfg_file: &Path) -> Result<Settings, ConfigError> {
    let settings = config::Config::builder()
        .add_source(
            config::File::new(&cfg_file.to_string_lossy(), config::FileFormat::Yaml)
                .required(false),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// Writes the commented settings template to `cfg_file`.
///
/// Returns `Ok(false)` without touching anything when the file exists and
/// `overwrite` is not set.
pub fn write_config_template(cfg_file: &Path, overwrite: bool) -> Result<bool, PortfolioError> {
    if cfg_file.exists() && !overwrite {
        return Ok(false);
    }

    if let Some(parent) = cfg_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let config_content = include_str!("config_template.yaml");
    fs::write(cfg_file, config_content)?;
    Ok(true)
}

pub fn create_config(cfg_file: &Path) -> Result<(), PortfolioError> {
    println!("\x1b[1m\x1b[32mCreating configuration...\x1b[0m");

    let overwrite = cfg_file.exists() && confirm_overwrite(cfg_file)?;
    if cfg_file.exists() && !overwrite {
        println!("\x1b[33mOperation cancelled.\x1b[0m");
        return Ok(());
    }

    write_config_template(cfg_file, overwrite)?;

    println!("\x1b[32mConfiguration file created at:");
    println!("  -> {}", cfg_file.display());
    println!("\x1b[0mEdit it to point at your site root and portfolio document.");

    Ok(())
}

fn confirm_overwrite(cfg_file: &Path) -> Result<bool, io::Error> {
    println!(
        "\x1b[31mThe configuration file {} already exists.",
        cfg_file.display()
    );
    println!("Do you want to overwrite it? (y/N)\x1b[0m");

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_lowercase() == "y")
}
