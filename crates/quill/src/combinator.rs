//! Combinators: higher-order functions that build new parsers from existing
//! ones.
//!
//! [`optional`] is the sole backtracking primitive: it is the only place a
//! failure is absorbed and the pre-call state reused. Every other
//! backtracking combinator ([`or`], the repetition family, [`sep_by`]) is
//! built on top of it; everywhere else a failure short-circuits untouched.
//!
//! Repetition over a parser that can succeed without consuming input would
//! loop forever, so the repeating combinators treat a zero-width success as
//! the end of the repetition after collecting it once.

use crate::error::ParseError;
use crate::parser::Parser;
use crate::primitive::literal;
use crate::state::State;

/// Try `parser`; on failure succeed with `None` and the untouched pre-call
/// state, consuming nothing and swallowing the error.
///
/// # Example
///
/// ```rust
/// use quill::{literal, optional};
///
/// let p = optional(literal("ab"));
/// assert_eq!(p.run("abc").unwrap().0, Some("ab".to_owned()));
///
/// let (value, rest) = p.run("xyz").unwrap();
/// assert_eq!(value, None);
/// assert_eq!(rest.remaining(), "xyz");
/// ```
pub fn optional<'s, T: 's>(parser: Parser<'s, T>) -> Parser<'s, Option<T>> {
    Parser::new(move |state| match parser.run_state(state) {
        Ok((value, advanced)) => Ok((Some(value), advanced)),
        Err(_) => Ok((None, state)),
    })
}

/// Ordered choice: try each alternative in turn and return the first
/// success. First match wins; there is no longest-match comparison.
///
/// When every alternative fails, the error's expected set names each
/// alternative that carries a name.
pub fn or<'s, T: 's>(parsers: Vec<Parser<'s, T>>) -> Parser<'s, T> {
    let expected: Vec<String> = parsers
        .iter()
        .filter_map(|p| p.name().map(str::to_owned))
        .collect();
    let count = parsers.len();
    let attempts: Vec<_> = parsers.into_iter().map(optional).collect();
    Parser::new(move |state: State<'s>| {
        for attempt in &attempts {
            let (value, advanced) = attempt.run_state(state)?;
            if let Some(value) = value {
                return Ok((value, advanced));
            }
        }
        Err(
            ParseError::new(
                format!("none of the {count} choices could be satisfied"),
                state.pos(),
            )
            .expected(expected.clone()),
        )
    })
}

/// Run every parser in order, threading the state through; the first failure
/// short-circuits. On success the value is the **last** parser's value;
/// earlier values are discarded.
///
/// An empty parser list has no value to return and is reported as a
/// configuration error.
pub fn sequence<'s, T: 's>(parsers: Vec<Parser<'s, T>>) -> Parser<'s, T> {
    Parser::new(move |state: State<'s>| {
        let Some((first, rest)) = parsers.split_first() else {
            return Err(ParseError::config(
                "sequence requires at least one parser",
                state.pos(),
            ));
        };
        let (mut value, mut current) = first.run_state(state)?;
        for parser in rest {
            let (next, advanced) = parser.run_state(current)?;
            value = next;
            current = advanced;
        }
        Ok((value, current))
    })
}

/// Free-function form of [`Parser::chain`]: run `parser`, feed its value to
/// `next`, and run the resulting parser against the advanced state.
pub fn chain<'s, T, U, F>(parser: Parser<'s, T>, next: F) -> Parser<'s, U>
where
    T: 's,
    U: 's,
    F: Fn(T) -> Parser<'s, U> + 's,
{
    parser.chain(next)
}

fn repeat<'s, T: 's>(parser: Parser<'s, T>, min: usize) -> Parser<'s, Vec<T>> {
    let attempt = optional(parser);
    Parser::new(move |state: State<'s>| {
        let mut items = Vec::new();
        let mut current = state;
        loop {
            let (value, advanced) = attempt.run_state(current)?;
            let Some(value) = value else { break };
            let progressed = advanced.pos().offset > current.pos().offset;
            items.push(value);
            current = advanced;
            if !progressed {
                break;
            }
        }
        if items.len() >= min {
            Ok((items, current))
        } else {
            Err(ParseError::new(
                format!(
                    "expected at least {min} occurrences, but only found {}",
                    items.len()
                ),
                current.pos(),
            ))
        }
    })
}

/// Zero or more occurrences of `parser`, collected in order.
pub fn many<'s, T: 's>(parser: Parser<'s, T>) -> Parser<'s, Vec<T>> {
    repeat(parser, 0)
}

/// One or more occurrences of `parser`.
pub fn many1<'s, T: 's>(parser: Parser<'s, T>) -> Parser<'s, Vec<T>> {
    repeat(parser, 1)
}

/// At least `min` occurrences of `parser`, failing with a
/// required-versus-actual count otherwise.
pub fn many_n<'s, T: 's>(parser: Parser<'s, T>, min: usize) -> Parser<'s, Vec<T>> {
    repeat(parser, min)
}

fn skip_repeat<'s, T: 's>(parser: Parser<'s, T>, min: usize) -> Parser<'s, ()> {
    repeat(parser, min).map(|_| ())
}

/// Like [`many`], discarding the values.
pub fn skip_many<'s, T: 's>(parser: Parser<'s, T>) -> Parser<'s, ()> {
    skip_repeat(parser, 0)
}

/// Like [`many1`], discarding the values.
pub fn skip_many1<'s, T: 's>(parser: Parser<'s, T>) -> Parser<'s, ()> {
    skip_repeat(parser, 1)
}

/// Like [`many_n`], discarding the values.
pub fn skip_many_n<'s, T: 's>(parser: Parser<'s, T>, min: usize) -> Parser<'s, ()> {
    skip_repeat(parser, min)
}

/// Consume input while `parser` succeeds, discarding values; stops without
/// failing at the first miss. Always succeeds.
pub fn skip_until<'s, T: 's>(parser: Parser<'s, T>) -> Parser<'s, ()> {
    let attempt = optional(parser);
    Parser::new(move |state: State<'s>| {
        let mut current = state;
        loop {
            let (value, advanced) = attempt.run_state(current)?;
            if value.is_none() || advanced.pos().offset == current.pos().offset {
                return Ok(((), advanced));
            }
            current = advanced;
        }
    })
}

/// `literal(open)`, then `parser`, then `literal(close)`, yielding `parser`'s
/// value. Fails if any part fails.
///
/// # Example
///
/// ```rust
/// use quill::{between, digit, many1};
///
/// let p = between("(", ")", many1(digit()));
/// assert_eq!(p.run("(42)").unwrap().0, vec!['4', '2']);
/// assert!(p.run("(42").is_err());
/// ```
pub fn between<'s, T>(
    open: impl Into<String>,
    close: impl Into<String>,
    parser: Parser<'s, T>,
) -> Parser<'s, T>
where
    T: Clone + 's,
{
    let open = literal(open);
    let close = literal(close);
    crate::seq! {
        open;
        let value = parser;
        close;
        => value
    }
}

/// Zero or more `parser` separated by `separator`.
///
/// No first match yields an empty `Vec` without consuming anything. A
/// trailing separator with no following item is left unconsumed, and the
/// items gathered so far are returned.
///
/// # Example
///
/// ```rust
/// use quill::{digit, literal, sep_by};
///
/// let p = sep_by(literal(","), digit());
/// assert_eq!(p.run("1,2,3").unwrap().0, vec!['1', '2', '3']);
///
/// let (values, rest) = p.run("1,").unwrap();
/// assert_eq!(values, vec!['1']);
/// assert_eq!(rest.remaining(), ",");
/// ```
pub fn sep_by<'s, S, T>(separator: Parser<'s, S>, parser: Parser<'s, T>) -> Parser<'s, Vec<T>>
where
    S: 's,
    T: 's,
{
    let item = optional(parser);
    let sep = optional(separator);
    Parser::new(move |state: State<'s>| {
        let mut items = Vec::new();
        let (first, mut current) = item.run_state(state)?;
        match first {
            None => return Ok((items, state)),
            Some(value) => items.push(value),
        }
        loop {
            let (matched_sep, after_sep) = sep.run_state(current)?;
            if matched_sep.is_none() {
                return Ok((items, current));
            }
            let (next, after_item) = item.run_state(after_sep)?;
            match next {
                // Trailing separator: back out to before it.
                None => return Ok((items, current)),
                Some(value) => {
                    items.push(value);
                    if after_item.pos().offset == current.pos().offset {
                        return Ok((items, after_item));
                    }
                    current = after_item;
                }
            }
        }
    })
}
