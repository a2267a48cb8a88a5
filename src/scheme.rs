use crate::types::SchemeType;

/// Get the scheme type from a scheme string.
/// Uses perfect hash based on length + first byte to minimize comparisons.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();

    // Perfect hash: filter by length first, then first byte, then full comparison
    match (bytes.len(), bytes.first()) {
        (3, Some(b'f')) if bytes == b"ftp" => SchemeType::Ftp,
        (4, Some(b'h')) if bytes == b"http" => SchemeType::Http,
        (5, Some(b'h')) if bytes == b"https" => SchemeType::Https,
        (6, Some(b'g')) if bytes == b"gemini" => SchemeType::Gemini,
        _ => SchemeType::Unknown,
    }
}
