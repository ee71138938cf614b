//! Path utilities for selecting candidate files and naming artifacts.
//!
//! Suffix comparisons are case-insensitive on the file name only; the
//! stem that is kept for the artifact name retains its original case.

use std::ffi::{OsStr, OsString};

/// Normalize a user-supplied suffix so it always carries a leading dot.
///
/// Surrounding whitespace is removed. An empty input stays empty.
///
/// # Examples
///
/// ```
/// use imgbatch_common::paths::normalize_suffix;
///
/// assert_eq!(normalize_suffix("png"), ".png");
/// assert_eq!(normalize_suffix(" .ppm "), ".ppm");
/// assert_eq!(normalize_suffix(""), "");
/// ```
pub fn normalize_suffix(suffix: &str) -> String {
    let trimmed = suffix.trim();
    if trimmed.is_empty() || trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{}", trimmed)
    }
}

/// Split `name` into its stem if it ends with `suffix`, ignoring case.
///
/// # Examples
///
/// ```
/// use imgbatch_common::paths::strip_suffix_ignore_case;
///
/// assert_eq!(strip_suffix_ignore_case("photo.PPM", ".ppm"), Some("photo"));
/// assert_eq!(strip_suffix_ignore_case("notes.txt", ".ppm"), None);
/// ```
pub fn strip_suffix_ignore_case<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let suffix_chars = suffix.chars().count();
    if suffix_chars == 0 {
        return Some(name);
    }

    let split = name.char_indices().rev().nth(suffix_chars - 1)?.0;
    let (stem, tail) = name.split_at(split);

    (tail.to_lowercase() == suffix.to_lowercase()).then_some(stem)
}

/// Compute the artifact file name for a candidate.
///
/// The matched source suffix is removed and the target suffix appended.
/// Returns `None` when `name` does not end with `source_suffix`.
///
/// A name made of the suffix alone (`.ppm`) is a candidate with an empty
/// stem and becomes `.png`. Splitting on the last extension instead would
/// treat such a dot-file as having no extension and produce `.ppm.png`.
pub fn artifact_name(name: &str, source_suffix: &str, target_suffix: &str) -> Option<String> {
    strip_suffix_ignore_case(name, source_suffix).map(|stem| format!("{}{}", stem, target_suffix))
}

/// Compute the artifact file name for a directory entry name.
///
/// UTF-8 names go through [`artifact_name`]. On Unix, other names keep
/// their raw bytes and the suffix is compared ASCII case-insensitively, so
/// two distinct names never collapse onto the same artifact.
pub fn artifact_os_name(
    name: &OsStr,
    source_suffix: &str,
    target_suffix: &str,
) -> Option<OsString> {
    if let Some(name) = name.to_str() {
        return artifact_name(name, source_suffix, target_suffix).map(OsString::from);
    }
    artifact_raw_name(name, source_suffix, target_suffix)
}

#[cfg(unix)]
fn artifact_raw_name(name: &OsStr, source_suffix: &str, target_suffix: &str) -> Option<OsString> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = name.as_bytes();
    let suffix = source_suffix.as_bytes();
    let split = bytes.len().checked_sub(suffix.len())?;
    let (stem, tail) = bytes.split_at(split);
    if !tail.eq_ignore_ascii_case(suffix) {
        return None;
    }

    let mut out = stem.to_vec();
    out.extend_from_slice(target_suffix.as_bytes());
    Some(OsString::from_vec(out))
}

#[cfg(not(unix))]
fn artifact_raw_name(name: &OsStr, source_suffix: &str, target_suffix: &str) -> Option<OsString> {
    artifact_name(&name.to_string_lossy(), source_suffix, target_suffix).map(OsString::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_suffix() {
        assert_eq!(normalize_suffix("ppm"), ".ppm");
        assert_eq!(normalize_suffix(".png"), ".png");
        assert_eq!(normalize_suffix("  tar.gz "), ".tar.gz");
        assert_eq!(normalize_suffix("   "), "");
    }

    #[test]
    fn test_strip_suffix_case_insensitive() {
        assert_eq!(strip_suffix_ignore_case("a.ppm", ".ppm"), Some("a"));
        assert_eq!(strip_suffix_ignore_case("A.PPM", ".ppm"), Some("A"));
        assert_eq!(strip_suffix_ignore_case("a.Ppm", ".PPM"), Some("a"));
    }

    #[test]
    fn test_strip_suffix_rejects_other_names() {
        assert_eq!(strip_suffix_ignore_case("b.txt", ".ppm"), None);
        assert_eq!(strip_suffix_ignore_case("ppm", ".ppm"), None);
        assert_eq!(strip_suffix_ignore_case("a.ppm.txt", ".ppm"), None);
        assert_eq!(strip_suffix_ignore_case("", ".ppm"), None);
    }

    #[test]
    fn test_bare_suffix_name_has_empty_stem() {
        assert_eq!(artifact_name(".ppm", ".ppm", ".png").as_deref(), Some(".png"));
    }

    #[test]
    fn test_strip_suffix_keeps_original_case() {
        assert_eq!(strip_suffix_ignore_case("Holiday.PPM", ".ppm"), Some("Holiday"));
    }

    #[test]
    fn test_strip_suffix_multibyte_names() {
        assert_eq!(strip_suffix_ignore_case("café.ppm", ".ppm"), Some("café"));
        assert_eq!(strip_suffix_ignore_case("日本.PPM", ".ppm"), Some("日本"));
        assert_eq!(strip_suffix_ignore_case("日本", ".ppm"), None);
    }

    #[test]
    fn test_strip_empty_suffix() {
        assert_eq!(strip_suffix_ignore_case("anything", ""), Some("anything"));
    }

    #[test]
    fn test_artifact_name() {
        assert_eq!(
            artifact_name("image1.ppm", ".ppm", ".png").as_deref(),
            Some("image1.png")
        );
        assert_eq!(
            artifact_name("scene.final.PPM", ".ppm", ".png").as_deref(),
            Some("scene.final.png")
        );
        assert_eq!(artifact_name("b.txt", ".ppm", ".png"), None);
    }

    #[test]
    fn test_artifact_os_name_utf8() {
        assert_eq!(
            artifact_os_name(OsStr::new("Shot.PPM"), ".ppm", ".png"),
            Some(OsString::from("Shot.png"))
        );
        assert_eq!(artifact_os_name(OsStr::new("b.txt"), ".ppm", ".png"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_artifact_os_name_keeps_raw_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let first = OsStr::from_bytes(b"bad\xff.PPM");
        let second = OsStr::from_bytes(b"bad\xfe.ppm");

        let a = artifact_os_name(first, ".ppm", ".png").unwrap();
        let b = artifact_os_name(second, ".ppm", ".png").unwrap();

        assert_eq!(a.as_bytes(), b"bad\xff.png");
        assert_eq!(b.as_bytes(), b"bad\xfe.png");
        assert_ne!(a, b);
        assert_eq!(
            artifact_os_name(OsStr::from_bytes(b"bad\xff.txt"), ".ppm", ".png"),
            None
        );
    }
}
