//! `data:` URL construction.
//!
//! A data URL carries the encoded image inline, so a cropped photo is a
//! standalone reference that survives revoking the original object URL.

use base64::{engine::general_purpose, Engine as _};

/// Wrap encoded image bytes as `data:<mime>;base64,<payload>`.
pub fn to_data_url(bytes: &[u8], mime_type: &str) -> String {
    let payload = general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime_type, payload)
}

/// Split a base64 data URL into its MIME type and decoded bytes.
///
/// Returns `None` for anything that is not a base64 `data:` URL.
pub fn parse_data_url(url: &str) -> Option<(&str, Vec<u8>)> {
    let rest = url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime_type = header.strip_suffix(";base64")?;
    let bytes = general_purpose::STANDARD.decode(payload).ok()?;
    Some((mime_type, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_data_url() {
        assert_eq!(
            to_data_url(b"hello", "image/png"),
            "data:image/png;base64,aGVsbG8="
        );
    }

    #[test]
    fn test_parse_data_url() {
        let (mime, bytes) = parse_data_url("data:image/jpeg;base64,aGVsbG8=").unwrap();
        assert_eq!(mime, "image/jpeg");
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_parse_rejects_other_urls() {
        assert!(parse_data_url("blob:http://localhost/1234").is_none());
        assert!(parse_data_url("data:text/plain,hello").is_none());
        assert!(parse_data_url("data:image/png;base64,***").is_none());
    }
}
