use crate::character_sets::is_valid_hostname;
use crate::checkers::parse_port;
use crate::compat::String;
use crate::error::{ParseError, Result};
use crate::scheme::get_scheme_type;
use crate::unicode::idna::domain_to_ascii;
use crate::url::Url;

/// In-progress URL assembled field-by-field during one parse call.
///
/// The parser pushes raw characters through the setters below; nothing is
/// validated until `finish`. `port_raw` keeps the port digits exactly as
/// typed so serialization can reproduce them, while the numeric port is
/// resolved at most once: explicit digits win, then the scheme default.
#[derive(Debug, Default)]
pub(crate) struct UrlBuilder {
    scheme: String,
    hostname: String,
    port: Option<u16>,
    port_raw: String,
    path: String,
    fragment: String,
    query: String,
}

impl UrlBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_scheme(&mut self, scheme: &str) {
        self.scheme.push_str(scheme);
    }

    pub(crate) fn push_hostname(&mut self, c: char) {
        self.hostname.push(c);
    }

    pub(crate) fn push_port_digit(&mut self, c: char) {
        self.port_raw.push(c);
    }

    pub(crate) fn push_path(&mut self, c: char) {
        self.path.push(c);
    }

    pub(crate) fn push_fragment(&mut self, c: char) {
        self.fragment.push(c);
    }

    pub(crate) fn push_query(&mut self, c: char) {
        self.query.push(c);
    }

    /// Numeric port: explicit digits if any were seen, scheme default otherwise.
    fn resolve_port(&self) -> Result<u16> {
        if self.port_raw.is_empty() {
            get_scheme_type(&self.scheme)
                .default_port()
                .ok_or(ParseError::NoDefaultPort)
        } else {
            parse_port(&self.port_raw)
        }
    }

    /// Finalize the port at a delimiter or end-of-input. Idempotent: the
    /// resolved value is kept once set.
    pub(crate) fn finish_port(&mut self) -> Result<()> {
        if self.port.is_none() {
            self.port = Some(self.resolve_port()?);
        }
        Ok(())
    }

    /// Finalize the whole URL: scheme gate, hostname encoding, hostname
    /// character-set validation, then port resolution.
    pub(crate) fn finish(self) -> Result<Url> {
        if self.scheme.is_empty() {
            return Err(ParseError::MissingScheme);
        }

        let hostname = domain_to_ascii(&self.hostname)?;
        if !is_valid_hostname(&hostname) {
            return Err(ParseError::InvalidHostnameCharacter);
        }

        let port = match self.port {
            Some(port) => port,
            None => self.resolve_port()?,
        };

        Ok(Url {
            scheme: self.scheme,
            hostname,
            port,
            port_raw: self.port_raw,
            path: self.path,
            fragment: self.fragment,
            query: self.query,
            blob: None,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_requires_scheme() {
        let builder = UrlBuilder::new();
        assert_eq!(builder.finish(), Err(ParseError::MissingScheme));
    }

    #[test]
    fn test_default_port_resolution() {
        let mut builder = UrlBuilder::new();
        builder.set_scheme("https");
        for c in "example.com".chars() {
            builder.push_hostname(c);
        }
        let url = builder.finish().unwrap();
        assert_eq!(url.port(), 443);
        assert_eq!(url.port_raw(), "");
    }

    #[test]
    fn test_explicit_port_kept_verbatim() {
        let mut builder = UrlBuilder::new();
        builder.set_scheme("https");
        for c in "example.com".chars() {
            builder.push_hostname(c);
        }
        builder.push_port_digit('8');
        builder.push_port_digit('0');
        builder.finish_port().unwrap();
        let url = builder.finish().unwrap();
        assert_eq!(url.port(), 80);
        assert_eq!(url.port_raw(), "80");
    }

    #[test]
    fn test_unknown_scheme_needs_explicit_port() {
        let mut builder = UrlBuilder::new();
        builder.set_scheme("gopher");
        for c in "example.com".chars() {
            builder.push_hostname(c);
        }
        assert_eq!(builder.finish(), Err(ParseError::NoDefaultPort));
    }

    #[test]
    fn test_hostname_validated_after_encoding() {
        let mut builder = UrlBuilder::new();
        builder.set_scheme("https");
        for c in "inval!d.com".chars() {
            builder.push_hostname(c);
        }
        assert_eq!(builder.finish(), Err(ParseError::InvalidHostnameCharacter));
    }
}
