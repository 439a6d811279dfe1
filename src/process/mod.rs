//! Turning image folders into artwork metadata.
//!
//! `filename` holds the pure file-name heuristics, `folder` the directory
//! scanning around them.

mod filename;
mod folder;

pub use filename::*;
pub use folder::*;
