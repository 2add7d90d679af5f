//! Primitive parsers: the leaves every grammar is built from.
//!
//! Every primitive carries a name (its literal text or pattern) so that
//! alternation can report which options it tried.

use regex::Regex;

use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::State;

/// Cap mismatch previews so error messages stay one line.
const PREVIEW_LEN: usize = 10;

fn preview(input: &str) -> String {
    let mut shown: String = input.chars().take(PREVIEW_LEN).collect();
    if shown.len() < input.len() {
        shown.push_str("...");
    }
    shown
}

/// Match `expected` as an exact prefix of the input.
///
/// The empty literal always succeeds without consuming anything.
///
/// # Example
///
/// ```rust
/// use quill::literal;
///
/// let p = literal("let");
/// assert_eq!(p.run("let x").unwrap().0, "let");
/// assert!(p.run("lx").is_err());
/// ```
pub fn literal<'s>(expected: impl Into<String>) -> Parser<'s, String> {
    let expected = expected.into();
    let name = expected.clone();
    Parser::named(
        move |state: State<'s>| {
            if state.remaining().starts_with(expected.as_str()) {
                Ok((expected.clone(), state.advance(expected.len())))
            } else {
                Err(ParseError::new(
                    format!(
                        "expected {:?}, but found {:?}",
                        expected,
                        preview(state.remaining())
                    ),
                    state.pos(),
                )
                .expected(vec![expected.clone()]))
            }
        },
        name,
    )
}

/// Match a single configured character, given as a one-character string.
///
/// Configuring more than one character is a configuration error, reported as
/// a failure value before any match is attempted.
pub fn character<'s>(expected: impl Into<String>) -> Parser<'s, char> {
    let expected = expected.into();
    let name = expected.clone();
    Parser::named(
        move |state: State<'s>| {
            let mut chars = expected.chars();
            let configured = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(ParseError::config(
                        "character parser expects a single character",
                        state.pos(),
                    )
                    .expected(vec![expected.clone()]));
                }
            };
            match state.remaining().chars().next() {
                Some(found) if found == configured => {
                    Ok((configured, state.advance(configured.len_utf8())))
                }
                Some(found) => Err(ParseError::new(
                    format!("expected {configured:?}, but found {found:?}"),
                    state.pos(),
                )
                .expected(vec![expected.clone()])),
                None => Err(ParseError::new(
                    format!("expected {configured:?}, but found end of input"),
                    state.pos(),
                )
                .expected(vec![expected.clone()])),
            }
        },
        name,
    )
}

/// Match one ASCII letter.
pub fn alpha<'s>() -> Parser<'s, char> {
    Parser::named(
        |state: State<'s>| match state.remaining().chars().next() {
            Some(c) if c.is_ascii_alphabetic() => Ok((c, state.advance(c.len_utf8()))),
            Some(c) => Err(ParseError::new(
                format!("expected alphabetic character, but got {c:?}"),
                state.pos(),
            )),
            None => Err(ParseError::new("unexpected end of input", state.pos())),
        },
        "alphabet",
    )
}

/// Match one ASCII digit.
pub fn digit<'s>() -> Parser<'s, char> {
    Parser::named(
        |state: State<'s>| match state.remaining().chars().next() {
            Some(c) if c.is_ascii_digit() => Ok((c, state.advance(c.len_utf8()))),
            Some(c) => Err(ParseError::new(
                format!("expected digit, but got {c:?}"),
                state.pos(),
            )),
            None => Err(ParseError::new("unexpected end of input", state.pos())),
        },
        "digit",
    )
}

/// Match `pattern` anchored at the current position.
///
/// The match must start exactly at the cursor; a match further into the
/// remaining input is a failure. An invalid pattern is a configuration error
/// surfaced on every run.
///
/// # Example
///
/// ```rust
/// use quill::regex;
///
/// let number = regex("[0-9]+");
/// assert_eq!(number.run("123abc").unwrap().0, "123");
/// assert!(number.run("abc123").is_err());
/// ```
pub fn regex<'s>(pattern: impl Into<String>) -> Parser<'s, String> {
    let pattern = pattern.into();
    let name = pattern.clone();
    let compiled = Regex::new(&pattern);
    Parser::named(
        move |state: State<'s>| {
            let re = match &compiled {
                Ok(re) => re,
                Err(err) => {
                    return Err(ParseError::config(
                        format!("invalid pattern {pattern:?}: {err}"),
                        state.pos(),
                    )
                    .expected(vec![pattern.clone()]));
                }
            };
            match re.find(state.remaining()) {
                Some(found) if found.start() == 0 => {
                    Ok((found.as_str().to_owned(), state.advance(found.end())))
                }
                _ => Err(ParseError::new(
                    format!(
                        "expected {:?}, but found {:?}",
                        pattern,
                        preview(state.remaining())
                    ),
                    state.pos(),
                )
                .expected(vec![pattern.clone()])),
            }
        },
        name,
    )
}

/// Consume any leading whitespace, succeeding even when there is none.
pub fn skip_spaces<'s>() -> Parser<'s, ()> {
    Parser::named(
        |state: State<'s>| {
            let rest = state.remaining();
            let len = rest.len() - rest.trim_start().len();
            Ok(((), state.advance(len)))
        },
        "whitespace",
    )
}
