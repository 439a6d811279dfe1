use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Extensions treated as artwork images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Check if a file name ends in one of the image extensions.
///
/// Only the suffix is inspected; the file contents never are.
pub fn has_image_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Replaces `path` with `contents` through a sibling temporary file so a
/// failed write never leaves a truncated file behind.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");

    {
        let mut tmp_file = fs::File::create(&tmp_path)?;
        tmp_file.write_all(contents.as_bytes())?;
        tmp_file.sync_all()?;
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}
