#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod builder;
mod character_sets;
mod checkers;
mod error;
mod parser;
mod scheme;
mod tld;
mod types;
mod unicode;
mod url;

// Public API
pub use error::ParseError;
pub use parser::{Parser, is_valid, parse, validate};
pub use url::Url;

pub type Result<T> = core::result::Result<T, ParseError>;
