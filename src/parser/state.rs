/// URL parser state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Entry state; hands over to Scheme without consuming a character
    #[default]
    Init,
    /// Scheme state: everything up to the `:` separator
    Scheme,
    /// Hostname state: dot-separated labels up to `/`, `:`, `#` or `?`
    Hostname,
    /// Port state: decimal digits up to `/` or `#`
    Port,
    /// Path state
    Path,
    /// Fragment state
    Fragment,
    /// Query state
    Query,
}
