/// Errors that can occur during URL parsing or direct construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No scheme before the `:` separator
    MissingScheme,
    /// Scheme separator not followed by `//`
    MissingAuthoritySlashes,
    /// Non-digit character inside the port section
    InvalidPortCharacter,
    /// Port number does not fit in 16 bits
    PortOutOfRange,
    /// Port digits do not form a valid number
    InvalidPort,
    /// Encoded hostname contains a byte outside `a-z`, `0-9`, `-`, `.`
    InvalidHostnameCharacter,
    /// Punycode transformation failed for a hostname label
    PunycodeError,
    /// Scheme has no default port and none was supplied
    NoDefaultPort,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MissingScheme => "missing scheme",
            Self::MissingAuthoritySlashes => "scheme must be followed by //",
            Self::InvalidPortCharacter => "invalid character in port",
            Self::PortOutOfRange => "port out of range",
            Self::InvalidPort => "invalid port",
            Self::InvalidHostnameCharacter => "invalid character in hostname",
            Self::PunycodeError => "punycode encoding failed",
            Self::NoDefaultPort => "no default port known for scheme",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
