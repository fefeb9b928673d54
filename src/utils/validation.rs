/// Extension used when the original filename carries none
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Extension of a filename: everything after the last '.', lowercased.
/// Returns None when the name contains no dot at all.
pub fn extension_of(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Whether a filename is a single, harmless path segment.
///
/// Served filenames come straight from the URL path; anything that could
/// resolve outside the storage directory is rejected before touching disk.
pub fn is_safe_segment(filename: &str) -> bool {
    if filename.is_empty() || filename == "." || filename == ".." {
        return false;
    }
    !filename.contains('/') && !filename.contains('\\') && !filename.contains('\0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("photo.PNG"), Some("png".to_string()));
        assert_eq!(extension_of("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(extension_of(".bashrc"), Some("bashrc".to_string()));
        assert_eq!(extension_of("README"), None);
    }

    #[test]
    fn test_is_safe_segment() {
        assert!(is_safe_segment("d949c58e.jpg"));
        assert!(is_safe_segment("my file.png"));

        assert!(!is_safe_segment(""));
        assert!(!is_safe_segment("."));
        assert!(!is_safe_segment(".."));
        assert!(!is_safe_segment("../secret.txt"));
        assert!(!is_safe_segment("a/b.png"));
        assert!(!is_safe_segment("a\\b.png"));
    }
}
