use crate::compat::{String, ToString};
use crate::error::{ParseError, Result};

/// Marker prefix carried by every punycode-transformed label
const ACE_PREFIX: &str = "xn--";

/// Normalize a hostname into its ASCII-compatible form, label by label.
///
/// Labels that are already ASCII round-trip unchanged; this includes
/// labels that carry the `xn--` prefix, so re-encoding an encoded
/// hostname never double-encodes. Labels with non-ASCII content are
/// punycode-transformed and gain the prefix.
pub fn domain_to_ascii(domain: &str) -> Result<String> {
    // Fast path: Pure ASCII hostnames need no per-label work.
    // Most common case - avoid the label walk entirely.
    if domain.is_ascii() {
        return Ok(domain.to_string());
    }

    let mut result = String::with_capacity(domain.len() + ACE_PREFIX.len());
    for (i, label) in domain.split('.').enumerate() {
        if i > 0 {
            result.push('.');
        }
        if label.is_ascii() {
            result.push_str(label);
        } else {
            // encode_str only fails on bootstring overflow, which needs
            // labels far beyond any real hostname
            let encoded =
                idna::punycode::encode_str(label).ok_or(ParseError::PunycodeError)?;
            result.push_str(ACE_PREFIX);
            result.push_str(&encoded);
        }
    }

    Ok(result)
}
