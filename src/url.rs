use crate::compat::{String, ToString};
use crate::error::{ParseError, Result};
use crate::scheme::get_scheme_type;
use crate::tld::extract_tld;

/// A parsed URL. Immutable once constructed.
///
/// Produced by [`crate::parse`], [`crate::Parser::parse`] or
/// [`Url::from_parts`]. On a successfully built value the scheme is
/// non-empty, the hostname is in its encoded ASCII form and the numeric
/// port is always populated (explicit digits or the scheme default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    pub(crate) scheme: String,
    pub(crate) hostname: String,
    pub(crate) port: u16,
    pub(crate) port_raw: String,
    pub(crate) path: String,
    pub(crate) fragment: String,
    pub(crate) query: String,
    /// Reserved for the blob: URL variant; never populated by the text parser
    pub(crate) blob: Option<String>,
}

impl Url {
    /// Parse a URL string with a fresh parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the input violates the URL grammar.
    pub fn parse(input: &str) -> Result<Self> {
        crate::parser::parse(input)
    }

    /// Check if a URL string can be parsed without keeping the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use picourl::Url;
    ///
    /// assert!(Url::can_parse("https://example.com/"));
    /// assert!(!Url::can_parse("://nothing"));
    /// ```
    pub fn can_parse(input: &str) -> bool {
        crate::parser::validate(input).is_ok()
    }

    /// Build a URL directly from components.
    ///
    /// An omitted or zero `port` is inferred from the scheme's default.
    ///
    /// # Errors
    ///
    /// Returns `NoDefaultPort` if the port is omitted and the scheme is
    /// not in the default-port table.
    pub fn from_parts(
        scheme: &str,
        hostname: &str,
        path: &str,
        fragment: &str,
        port: Option<u16>,
    ) -> Result<Self> {
        let (port, port_raw) = match port {
            Some(port) if port != 0 => (port, port.to_string()),
            _ => {
                let port = get_scheme_type(scheme)
                    .default_port()
                    .ok_or(ParseError::NoDefaultPort)?;
                (port, String::new())
            }
        };

        Ok(Self {
            scheme: scheme.to_string(),
            hostname: hostname.to_string(),
            port,
            port_raw,
            path: path.to_string(),
            fragment: fragment.to_string(),
            query: String::new(),
            blob: None,
        })
    }

    /// Get the scheme (e.g., "https")
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Get the hostname in its encoded ASCII form (e.g., "example.com")
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Get the numeric port, explicit or scheme default
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get the port digits as typed, or "" when the input had no port
    pub fn port_raw(&self) -> &str {
        &self.port_raw
    }

    /// Get the path without its leading slash (e.g., "a/b/c")
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the fragment without the leading '#'
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Get the query without the leading '?'
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the blob payload of a blob: URL, if any
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    /// Get the top-level-domain suffix of the hostname, first dot to end.
    ///
    /// # Examples
    ///
    /// ```
    /// use picourl::Url;
    ///
    /// let url = Url::parse("https://a.gov.in").unwrap();
    /// assert_eq!(url.tld(), ".gov.in");
    /// ```
    pub fn tld(&self) -> &str {
        extract_tld(&self.hostname)
    }
}

/// Canonical serialization. The port is only written when it was
/// textually present, reproducing the typed digits.
impl core::fmt::Display for Url {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}://{}", self.scheme, self.hostname)?;
        if !self.port_raw.is_empty() {
            write!(f, ":{}", self.port_raw)?;
        }
        write!(f, "/{}", self.path)?;
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        Ok(())
    }
}
