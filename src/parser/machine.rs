use super::Parser;
use super::state::State;
use crate::builder::UrlBuilder;
use crate::error::{ParseError, Result};
use crate::url::Url;

/// Single-pass scanner over one input string.
///
/// One transition function per state; each consumes the character(s) it
/// handles and returns the next state, so the scan never backtracks and
/// does O(1) work per character.
struct Machine<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pointer: usize,
    builder: UrlBuilder,
}

impl<'a> Machine<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pointer: 0,
            builder: UrlBuilder::new(),
        }
    }

    fn at_end(&self) -> bool {
        self.pointer >= self.bytes.len()
    }

    /// Current character, or None at end of input.
    fn current(&self) -> Option<char> {
        if self.at_end() {
            return None;
        }
        let b = self.bytes[self.pointer];
        if b < 128 {
            Some(b as char)
        } else {
            // Multi-byte UTF-8 character; pointer always sits on a boundary
            self.input[self.pointer..].chars().next()
        }
    }

    fn bump(&mut self, c: char) {
        self.pointer += c.len_utf8();
    }

    /// Scheme state: scan ahead to the `:` separator in one step, then
    /// require the `//` marker and skip it.
    fn scheme(&mut self) -> Result<State> {
        match memchr::memchr(b':', &self.bytes[self.pointer..]) {
            Some(offset) => {
                let colon = self.pointer + offset;
                let scheme = &self.input[self.pointer..colon];
                if scheme.is_empty() {
                    return Err(ParseError::MissingScheme);
                }
                if self.bytes.get(colon + 1..colon + 3) != Some(b"//".as_slice()) {
                    return Err(ParseError::MissingAuthoritySlashes);
                }
                self.builder.set_scheme(scheme);
                self.pointer = colon + 3;
                Ok(State::Hostname)
            }
            None => {
                // No separator anywhere: the rest of the input is scheme
                // and finalization decides what to make of it
                self.builder.set_scheme(&self.input[self.pointer..]);
                self.pointer = self.bytes.len();
                Ok(State::Scheme)
            }
        }
    }

    fn hostname(&mut self) -> Result<State> {
        let Some(c) = self.current() else {
            return Ok(State::Hostname);
        };
        self.bump(c);
        match c {
            '/' => Ok(State::Path),
            ':' => Ok(State::Port),
            '#' => Ok(State::Fragment),
            '?' => Ok(State::Query),
            _ => {
                self.builder.push_hostname(c);
                Ok(State::Hostname)
            }
        }
    }

    /// Port state: digits only. The numeric value is finalized at a
    /// delimiter or end-of-input, never mid-scan.
    fn port(&mut self) -> Result<State> {
        let Some(c) = self.current() else {
            return Ok(State::Port);
        };
        match c {
            '0'..='9' => {
                self.bump(c);
                self.builder.push_port_digit(c);
                Ok(State::Port)
            }
            '/' => {
                self.builder.finish_port()?;
                self.bump(c);
                Ok(State::Path)
            }
            '#' => {
                self.builder.finish_port()?;
                self.bump(c);
                Ok(State::Fragment)
            }
            _ => Err(ParseError::InvalidPortCharacter),
        }
    }

    fn path(&mut self) -> State {
        let Some(c) = self.current() else {
            return State::Path;
        };
        self.bump(c);
        match c {
            '#' => State::Fragment,
            '?' => State::Query,
            _ => {
                self.builder.push_path(c);
                State::Path
            }
        }
    }

    fn fragment(&mut self) -> State {
        let Some(c) = self.current() else {
            return State::Fragment;
        };
        self.bump(c);
        match c {
            // Repeated separator: consumed, never starts a second fragment
            '#' => State::Fragment,
            '?' => State::Query,
            _ => {
                self.builder.push_fragment(c);
                State::Fragment
            }
        }
    }

    fn query(&mut self) -> State {
        let Some(c) = self.current() else {
            return State::Query;
        };
        self.bump(c);
        match c {
            // Repeated separator, mirroring the fragment rule
            '?' => State::Query,
            '#' => State::Fragment,
            _ => {
                self.builder.push_query(c);
                State::Query
            }
        }
    }
}

/// Run the state machine over `input`, leaving the parser's state field
/// wherever the scan ends; the caller resets it to `Init`.
pub(crate) fn run(parser: &mut Parser, input: &str) -> Result<Url> {
    let mut machine = Machine::new(input);

    while !machine.at_end() {
        parser.state = match parser.state {
            State::Init => State::Scheme,
            State::Scheme => machine.scheme()?,
            State::Hostname => machine.hostname()?,
            State::Port => machine.port()?,
            State::Path => machine.path(),
            State::Fragment => machine.fragment(),
            State::Query => machine.query(),
        };
    }

    // End-of-input finalizes whatever state was active; an open port
    // section resolves before the builder runs its own checks
    if parser.state == State::Port {
        machine.builder.finish_port()?;
    }

    machine.builder.finish()
}
