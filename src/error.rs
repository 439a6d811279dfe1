use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Could not read portfolio document {}: {source}", path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Portfolio document {} is not valid JSON: {source}", path.display())]
    DocumentParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Portfolio document {} is malformed: {reason}", path.display())]
    DocumentShape { path: PathBuf, reason: String },

    #[error("Could not write portfolio document {}: {source}", path.display())]
    DocumentWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Artist '{0}' not found in the portfolio document")]
    ArtistNotFound(String),

    #[error("Folder '{}' does not exist", .0.display())]
    FolderNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Could not list folder {}: {source}", path.display())]
    FolderRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize portfolio data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PortfolioError {
    /// The document is missing, unreadable or malformed.
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            PortfolioError::DocumentRead { .. }
                | PortfolioError::DocumentParse { .. }
                | PortfolioError::DocumentShape { .. }
        )
    }

    /// The artist folder is missing, not a directory, or could not be listed.
    pub fn is_folder_error(&self) -> bool {
        matches!(
            self,
            PortfolioError::FolderNotFound(_)
                | PortfolioError::NotADirectory(_)
                | PortfolioError::FolderRead { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let missing = PortfolioError::DocumentRead {
            path: PathBuf::from("data/artists.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(missing.is_document_error());
        assert!(!missing.is_folder_error());

        let folder = PortfolioError::FolderNotFound(PathBuf::from("Nobody"));
        assert!(folder.is_folder_error());
        assert!(!folder.is_document_error());

        let artist = PortfolioError::ArtistNotFound("nobody".to_string());
        assert!(!artist.is_document_error());
        assert!(!artist.is_folder_error());
    }

    #[test]
    fn test_messages_name_the_culprit() {
        let artist = PortfolioError::ArtistNotFound("susan-g-scott".to_string());
        assert_eq!(
            artist.to_string(),
            "Artist 'susan-g-scott' not found in the portfolio document"
        );

        let folder = PortfolioError::NotADirectory(PathBuf::from("notes.txt"));
        assert_eq!(folder.to_string(), "'notes.txt' is not a directory");
    }
}
