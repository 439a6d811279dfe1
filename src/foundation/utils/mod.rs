mod fs_utils;
mod string_utils;

pub use fs_utils::{atomic_write_str, has_image_extension, IMAGE_EXTENSIONS};
pub use string_utils::{normalize_unicode, slugify, trim_separators};
