//! The closed set of content types the gateway accepts.
//!
//! Upload validation resolves the client's declared Content-Type into a
//! [`MediaType`]; everything downstream (storage key extension, object
//! content type) is derived from that validated value, never from the
//! client-supplied filename.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// A permitted media content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Jpeg,
    Png,
    Webp,
    Mp4,
    Webm,
}

impl MediaType {
    /// Resolve a declared Content-Type header value.
    ///
    /// Matching is case-insensitive and ignores parameters such as
    /// `; charset=...`. Returns `None` for anything outside the allow-list.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or(content_type)
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "image/jpeg" => Some(MediaType::Jpeg),
            "image/png" => Some(MediaType::Png),
            "image/webp" => Some(MediaType::Webp),
            "video/mp4" => Some(MediaType::Mp4),
            "video/webm" => Some(MediaType::Webm),
            _ => None,
        }
    }

    /// Canonical Content-Type stored on the object.
    pub fn content_type(&self) -> &'static str {
        match self {
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
            MediaType::Webp => "image/webp",
            MediaType::Mp4 => "video/mp4",
            MediaType::Webm => "video/webm",
        }
    }

    /// File extension used in storage keys (no leading dot).
    pub fn extension(&self) -> &'static str {
        match self {
            MediaType::Jpeg => "jpg",
            MediaType::Png => "png",
            MediaType::Webp => "webp",
            MediaType::Mp4 => "mp4",
            MediaType::Webm => "webm",
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.content_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content_type_exact() {
        assert_eq!(MediaType::from_content_type("image/png"), Some(MediaType::Png));
        assert_eq!(MediaType::from_content_type("video/webm"), Some(MediaType::Webm));
    }

    #[test]
    fn test_from_content_type_case_and_params() {
        assert_eq!(
            MediaType::from_content_type("Image/JPEG; charset=binary"),
            Some(MediaType::Jpeg)
        );
        assert_eq!(
            MediaType::from_content_type(" video/mp4 "),
            Some(MediaType::Mp4)
        );
    }

    #[test]
    fn test_from_content_type_rejects_outside_allowlist() {
        assert_eq!(MediaType::from_content_type("image/gif"), None);
        assert_eq!(MediaType::from_content_type("application/pdf"), None);
        assert_eq!(MediaType::from_content_type("image/svg+xml"), None);
        assert_eq!(MediaType::from_content_type(""), None);
    }

    #[test]
    fn test_extension_never_from_filename() {
        // The extension is a function of the validated type only.
        assert_eq!(MediaType::Jpeg.extension(), "jpg");
        assert_eq!(MediaType::Webp.extension(), "webp");
    }
}
