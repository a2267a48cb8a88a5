#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

//! Advanced parsing tests
//!
//! This module covers:
//! - Internationalized hostnames (punycode encoding)
//! - Hostname character-set validation
//! - Port digits, delimiters and range errors
//! - Delimiter looping between path, fragment and query

use picourl::{ParseError, Url};

fn parse(input: &str) -> Result<Url, ParseError> {
    Url::parse(input)
}

#[test]
fn test_punycode_hostname_passthrough() {
    let url = parse("https://xn--80aswg.xn--p1ai/").unwrap();
    assert_eq!(url.hostname(), "xn--80aswg.xn--p1ai");
}

#[test]
fn test_unicode_hostname_encoded() {
    let url = parse("https://сайт.рф").unwrap();
    assert_eq!(url.hostname(), "xn--80aswg.xn--p1ai");

    // Typed unicode and typed punycode agree
    let encoded = parse("https://xn--80aswg.xn--p1ai/").unwrap();
    assert_eq!(url.hostname(), encoded.hostname());
}

#[test]
fn test_mixed_labels_encoded_independently() {
    let url = parse("https://bücher.example.com/shelf").unwrap();
    assert_eq!(url.hostname(), "xn--bcher-kva.example.com");
    assert_eq!(url.tld(), ".example.com");
}

#[test]
fn test_encoded_hostname_round_trip() {
    let url = parse("https://сайт.рф/стр").unwrap();
    let reparsed = parse(&url.to_string()).unwrap();
    // Hostname was encoded once; re-parsing the serialized form must not
    // double-encode
    assert_eq!(reparsed.hostname(), "xn--80aswg.xn--p1ai");
}

#[test]
fn test_invalid_hostname_characters() {
    assert_eq!(
        parse("https://inval!d.com"),
        Err(ParseError::InvalidHostnameCharacter)
    );
    assert_eq!(
        parse("https://under_score.com"),
        Err(ParseError::InvalidHostnameCharacter)
    );
    // No case folding: uppercase fails the final character-set check
    assert_eq!(
        parse("https://EXAMPLE.com"),
        Err(ParseError::InvalidHostnameCharacter)
    );
}

#[test]
fn test_valid_hostname_characters() {
    let url = parse("http://example-123.com/").unwrap();
    assert_eq!(url.hostname(), "example-123.com");
}

#[test]
fn test_port_out_of_range() {
    assert_eq!(parse("https://x:65536/"), Err(ParseError::PortOutOfRange));
    assert_eq!(parse("https://x:99999/"), Err(ParseError::PortOutOfRange));
}

#[test]
fn test_port_boundary_values() {
    assert_eq!(parse("https://x:65535/").unwrap().port(), 65535);
    assert_eq!(parse("https://x:0/").unwrap().port(), 0);
}

#[test]
fn test_invalid_port_characters() {
    assert_eq!(parse("https://x:8a80/"), Err(ParseError::InvalidPortCharacter));
    assert_eq!(parse("https://x:-1/"), Err(ParseError::InvalidPortCharacter));
    // '?' is not a port delimiter in this grammar
    assert_eq!(parse("https://x:?q=1"), Err(ParseError::InvalidPortCharacter));
}

#[test]
fn test_port_finalized_at_end_of_input() {
    let url = parse("http://x:8080").unwrap();
    assert_eq!(url.port(), 8080);
}

#[test]
fn test_empty_port_section_uses_default() {
    // ":" typed with no digits falls back to the scheme default
    let url = parse("http://x:/path").unwrap();
    assert_eq!(url.port(), 80);
    assert_eq!(url.port_raw(), "");
    assert_eq!(url.path(), "path");
}

#[test]
fn test_port_followed_by_fragment() {
    let url = parse("http://x:81#top").unwrap();
    assert_eq!(url.port(), 81);
    assert_eq!(url.fragment(), "top");
    assert_eq!(url.path(), "");
}

#[test]
fn test_mid_scan_digits_do_not_finalize_early() {
    // A known-scheme URL whose digits momentarily read as out-of-range:
    // finalization only happens at the delimiter, where all digits are in
    let url = parse("http://x:65535/ok").unwrap();
    assert_eq!(url.port(), 65535);
}

#[test]
fn test_hostname_ends_at_question_mark() {
    let url = parse("https://example.com?q=1").unwrap();
    assert_eq!(url.hostname(), "example.com");
    assert_eq!(url.path(), "");
    assert_eq!(url.query(), "q=1");
}

#[test]
fn test_hostname_ends_at_hash() {
    let url = parse("https://example.com#top").unwrap();
    assert_eq!(url.hostname(), "example.com");
    assert_eq!(url.fragment(), "top");
}

#[test]
fn test_repeated_hash_is_skipped() {
    // A second '#' is a separator no-op, not a new field
    let url = parse("https://example.com/a#one#two").unwrap();
    assert_eq!(url.fragment(), "onetwo");
}

#[test]
fn test_repeated_question_mark_is_skipped() {
    let url = parse("https://example.com/a?x=1?y=2").unwrap();
    assert_eq!(url.query(), "x=1y=2");
}

#[test]
fn test_query_then_fragment_loops_states() {
    let url = parse("https://example.com/a?q=1#top").unwrap();
    assert_eq!(url.query(), "q=1");
    assert_eq!(url.fragment(), "top");
}

#[test]
fn test_fragment_then_query_loops_states() {
    let url = parse("https://example.com/a#top?q=1").unwrap();
    assert_eq!(url.fragment(), "top");
    assert_eq!(url.query(), "q=1");
}

#[test]
fn test_path_keeps_interior_slashes() {
    let url = parse("https://example.com/a/b//c/").unwrap();
    assert_eq!(url.path(), "a/b//c/");
}

#[test]
fn test_empty_hostname_with_path() {
    let url = parse("https:///just/path").unwrap();
    assert_eq!(url.hostname(), "");
    assert_eq!(url.path(), "just/path");
}

#[test]
fn test_long_input_linear_components() {
    // Pathological length still parses in one pass
    let long_path = "x/".repeat(10_000);
    let input = format!("https://example.com/{long_path}");
    let url = parse(&input).unwrap();
    assert_eq!(url.path().len(), long_path.len());
}
