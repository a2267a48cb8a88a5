/// Extract the top-level-domain suffix of a hostname: everything from the
/// first `.` (inclusive) to the end of the string.
///
/// Purely textual; no public-suffix list is consulted, so multi-label
/// suffixes come back verbatim (`"a.gov.in"` yields `".gov.in"`).
/// Hostnames without a dot have no suffix.
pub fn extract_tld(hostname: &str) -> &str {
    memchr::memchr(b'.', hostname.as_bytes()).map_or("", |pos| &hostname[pos..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_tld() {
        assert_eq!(extract_tld("example.com"), ".com");
        assert_eq!(extract_tld("a.gov.in"), ".gov.in");
        assert_eq!(extract_tld("localhost"), "");
        assert_eq!(extract_tld(""), "");
        assert_eq!(extract_tld("xn--80aswg.xn--p1ai"), ".xn--p1ai");
    }
}
