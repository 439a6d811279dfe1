pub mod configuration;
pub mod error;
pub mod foundation;
pub mod portfolio;
pub mod process;
pub mod startup;

pub use configuration::*;
pub use error::PortfolioError;
pub use foundation::document::*;
pub use portfolio::{list_artists, list_folders, update_artist_portfolio, UpdateSummary};
pub use process::parse_filename;
