use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Trims whitespace and the separator characters filenames use between fields.
///
/// Filenames such as `Sunset_2019_Watercolor` leave a dangling `_` once the
/// year and medium are cut off; this removes it along with any stray spaces,
/// dashes or commas at either end.
///
/// # Examples
///
/// ```
/// use artfolio::foundation::utils::trim_separators;
///
/// assert_eq!(trim_separators(" Sunset_ "), "Sunset");
/// assert_eq!(trim_separators("Blue Hour - "), "Blue Hour");
/// ```
pub fn trim_separators(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || matches!(c, '_' | '-' | ','))
}

/// Normalizes Unicode characters and converts text to lowercase.
///
/// Decomposes the input (NFD), drops combining marks and lowercases the
/// result, so `"Björk"` and `"Bjork"` compare equal.
///
/// # Examples
///
/// ```
/// use artfolio::foundation::utils::normalize_unicode;
///
/// assert_eq!(normalize_unicode("Café"), "cafe");
/// ```
pub fn normalize_unicode(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Turns a folder name into an artist identifier of the form `susan-g-scott`.
///
/// # Examples
///
/// ```
/// use artfolio::foundation::utils::slugify;
///
/// assert_eq!(slugify("Susan G. Scott"), "susan-g-scott");
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in normalize_unicode(input).chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}
