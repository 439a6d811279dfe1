//! Heuristic parsing of artwork metadata out of image file names.
//!
//! Artists deliver files named along the lines of
//! `Sunset_2019_Watercolor_24 x 36_.jpg`. Nothing about that layout is
//! guaranteed, so every field is found independently and falls back to a
//! fixed placeholder when it cannot be recognised.

use crate::foundation::utils::{trim_separators, IMAGE_EXTENSIONS};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

pub const UNKNOWN_YEAR: &str = "Unknown";
pub const DEFAULT_MEDIUM: &str = "Mixed media";
pub const VARIABLE_DIMENSIONS: &str = "Variable";

/// A medium and the literal spellings that identify it in a file name.
#[derive(Debug, Clone, Copy)]
pub struct MediumRule {
    pub medium: &'static str,
    pub patterns: &'static [&'static str],
}

/// Known mediums, most specific first. The first rule with a pattern
/// contained in the file name wins, so longer phrases must precede the
/// shorter phrases they contain.
pub const MEDIUM_RULES: &[MediumRule] = &[
    MediumRule {
        medium: "Oil, Acrylic and Flower on Canvas",
        patterns: &["Oil, Acrylic and Flower on Canvas"],
    },
    MediumRule {
        medium: "Oil and Acrylic on Canvas",
        patterns: &["Oil and Acrylic on Canvas"],
    },
    MediumRule {
        medium: "Acrylic and Gold Leaf on Canvas",
        patterns: &["Acrylic and Gold Leaf on Canvas"],
    },
    MediumRule {
        medium: "Oil on Canvas",
        patterns: &["Oil on Canvas"],
    },
    MediumRule {
        medium: "Acrylic on Canvas",
        patterns: &["Acrylic on Canvas"],
    },
    MediumRule {
        medium: "Mixed Media on Canvas",
        patterns: &["Mixed Media on Canvas"],
    },
    MediumRule {
        medium: "Watercolor and ink on silk",
        patterns: &["Watercolor and ink on silk"],
    },
    MediumRule {
        medium: "Watercolor",
        patterns: &["Watercolor"],
    },
    MediumRule {
        medium: "Sculpture",
        patterns: &["Sculpture"],
    },
    MediumRule {
        medium: "Photography",
        patterns: &["Photography"],
    },
    MediumRule {
        medium: "Installation",
        patterns: &["Installation"],
    },
    MediumRule {
        medium: "Collage",
        patterns: &["Collage"],
    },
    // Files for this medium arrive with either an ASCII or a full-width comma.
    MediumRule {
        medium: "Resin,Acrylic on Wood Panel",
        patterns: &["Resin,Acrylic on Wood Panel", "Resin，Acrylic on Wood Panel"],
    },
    MediumRule {
        medium: DEFAULT_MEDIUM,
        patterns: &[DEFAULT_MEDIUM],
    },
];

// Letters and digits on either side disqualify a year; `_`, spaces and
// punctuation count as separators.
static YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^\p{L}\p{N}])((?:19|20)[0-9]{2})(?:[^\p{L}\p{N}]|$)")
        .expect("valid year pattern")
});

static DIMENSIONS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]+)_?\s*x\s*_?([0-9]+)").expect("valid dimensions pattern")
});

/// Metadata recovered from a single file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkDetails {
    pub title: String,
    pub year: String,
    pub medium: String,
    pub dimensions: String,
}

/// Parses title, year, medium and dimensions out of an image file name.
///
/// # Examples
///
/// ```
/// use artfolio::process::parse_filename;
///
/// let details = parse_filename("Sunset_2019_Watercolor_24 x 36_.jpg");
/// assert_eq!(details.title, "Sunset");
/// assert_eq!(details.year, "2019");
/// assert_eq!(details.medium, "Watercolor");
/// assert_eq!(details.dimensions, "24 x 36 inches");
/// ```
pub fn parse_filename(filename: &str) -> ArtworkDetails {
    let name = strip_image_extension(filename);

    let year = extract_year(name);
    let medium = match_medium(name);
    let dimensions = extract_dimensions(name);
    let title = extract_title(name, medium.map(|(_, pattern)| pattern), year);

    debug!(
        "Parsed '{}': title={:?} year={:?} medium={:?} dimensions={:?}",
        filename, title, year, medium, dimensions
    );

    ArtworkDetails {
        title: title.to_string(),
        year: year.unwrap_or(UNKNOWN_YEAR).to_string(),
        medium: medium
            .map_or(DEFAULT_MEDIUM, |(rule, _)| rule.medium)
            .to_string(),
        dimensions: dimensions.unwrap_or_else(|| VARIABLE_DIMENSIONS.to_string()),
    }
}

/// Removes one trailing image extension, ignoring case.
pub fn strip_image_extension(filename: &str) -> &str {
    if let Some((stem, ext)) = filename.rsplit_once('.') {
        if IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
        {
            return stem;
        }
    }
    filename
}

/// First token between 1900 and 2099 that stands on its own.
pub fn extract_year(name: &str) -> Option<&str> {
    YEAR_RE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The first rule in [`MEDIUM_RULES`] whose pattern occurs in `name`,
/// together with the pattern that matched.
pub fn match_medium(name: &str) -> Option<(&'static MediumRule, &'static str)> {
    MEDIUM_RULES.iter().find_map(|rule| {
        rule.patterns
            .iter()
            .find(|pattern| name.contains(*pattern))
            .map(|pattern| (rule, *pattern))
    })
}

/// Formats the first `W x H` pair as `"W x H inches"`.
pub fn extract_dimensions(name: &str) -> Option<String> {
    DIMENSIONS_RE
        .captures(name)
        .map(|caps| format!("{} x {} inches", &caps[1], &caps[2]))
}

/// Everything before the medium phrase, then before the year, minus the
/// separators left dangling at either end.
fn extract_title<'a>(name: &'a str, medium_pattern: Option<&str>, year: Option<&str>) -> &'a str {
    let mut title = name;

    if let Some(idx) = medium_pattern.and_then(|pattern| title.find(pattern)) {
        title = &title[..idx];
    }
    if let Some(idx) = year.and_then(|year| title.find(year)) {
        title = &title[..idx];
    }

    trim_separators(title)
}
