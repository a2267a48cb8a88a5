use crate::error::{ParseError, Result};

/// Parse an explicit port literal to u16.
///
/// Digit strings that do not form a number fail with `InvalidPort`;
/// numbers above 65535 fail with `PortOutOfRange`.
pub fn parse_port(port: &str) -> Result<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidPort);
    }

    match port.parse::<u32>() {
        Ok(value) => u16::try_from(value).map_err(|_| ParseError::PortOutOfRange),
        // All-digit strings only fail u32 parsing on overflow
        Err(_) => Err(ParseError::PortOutOfRange),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("80"), Ok(80));
        assert_eq!(parse_port("8080"), Ok(8080));
        assert_eq!(parse_port("443"), Ok(443));
        assert_eq!(parse_port("0"), Ok(0));
        assert_eq!(parse_port("65535"), Ok(65535));
        assert_eq!(parse_port("65536"), Err(ParseError::PortOutOfRange));
        assert_eq!(
            parse_port("99999999999999999999"),
            Err(ParseError::PortOutOfRange)
        );
        assert_eq!(parse_port("abc"), Err(ParseError::InvalidPort));
        assert_eq!(parse_port(""), Err(ParseError::InvalidPort));
    }
}
