pub mod document;
pub mod utils;
