/// URL scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    Ftp,
    #[default]
    Http,
    Https,
    Gemini,
    Unknown,
}

impl SchemeType {
    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Ftp => Some(20),
            Self::Http => Some(80),
            Self::Https => Some(443),
            Self::Gemini => Some(1965),
            Self::Unknown => None,
        }
    }
}
