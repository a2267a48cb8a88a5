mod machine;
mod state;

pub use state::State;

use crate::compat::{String, ToString};
use crate::error::Result;
use crate::url::Url;

/// A reusable URL parser instance.
///
/// Holds the scan state of the current parse call and is reset to
/// `Init` when the call returns, so one instance can parse many inputs
/// sequentially. Not meant to be shared between threads mid-parse; use
/// one instance per thread or the free [`parse`] function.
#[derive(Debug, Default)]
pub struct Parser {
    state: State,
}

impl Parser {
    /// Create a parser in its initial state
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one URL string.
    ///
    /// The parser state is reset to `Init` when this returns, whether
    /// the parse succeeded or failed.
    ///
    /// # Errors
    ///
    /// Returns an error if the input violates the URL grammar.
    pub fn parse(&mut self, input: &str) -> Result<Url> {
        let result = machine::run(self, input);
        self.state = State::Init;
        result
    }
}

/// Parse a URL string with a freshly constructed parser.
///
/// # Errors
///
/// Returns an error if the input violates the URL grammar.
pub fn parse(input: &str) -> Result<Url> {
    Parser::new().parse(input)
}

/// Validate a URL string without keeping the parsed value.
///
/// # Errors
///
/// Returns the same error the full parse would.
pub fn validate(input: &str) -> Result<()> {
    parse(input).map(|_| ())
}

/// Boolean validity check that never fails: `(true, "")` for parseable
/// input, `(false, reason)` with the parse error's message otherwise.
pub fn is_valid(input: &str) -> (bool, String) {
    match parse(input) {
        Ok(_) => (true, String::new()),
        Err(e) => (false, e.to_string()),
    }
}
