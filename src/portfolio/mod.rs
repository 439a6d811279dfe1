mod listing;
mod update;

pub use listing::*;
pub use update::*;
