//! The parser core.
//!
//! A [`Parser<T>`] wraps a pure transition function from [`State`] to
//! [`ParseResult`]: on success the matched value plus the advanced state, on
//! failure a [`ParseError`]. Running the same parser on the same state always
//! yields the same outcome; combinators never observe shared mutable state.
//!
//! Parsers are cheap to clone (the transition function is reference-counted)
//! and may carry a name, which alternation reports when every option fails.

use std::rc::Rc;

use compact_str::CompactString;

use crate::error::{ParseError, ParseResult};
use crate::state::State;

type Transition<'s, T> = dyn Fn(State<'s>) -> ParseResult<'s, T> + 's;

/// A composable parser producing values of type `T`.
///
/// # Example
///
/// ```rust
/// use quill::{literal, Parser};
///
/// let hello = literal("hello");
/// let (value, rest) = hello.run("hello world").unwrap();
/// assert_eq!(value, "hello");
/// assert_eq!(rest.remaining(), " world");
/// ```
pub struct Parser<'s, T> {
    run: Rc<Transition<'s, T>>,
    name: Option<CompactString>,
}

impl<'s, T> Clone for Parser<'s, T> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
            name: self.name.clone(),
        }
    }
}

impl<'s, T: 's> Parser<'s, T> {
    /// Construct a parser from a raw transition function.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(State<'s>) -> ParseResult<'s, T> + 's,
    {
        Self {
            run: Rc::new(transition),
            name: None,
        }
    }

    /// Construct a named parser from a raw transition function.
    pub fn named<F>(transition: F, name: impl Into<CompactString>) -> Self
    where
        F: Fn(State<'s>) -> ParseResult<'s, T> + 's,
    {
        Self {
            run: Rc::new(transition),
            name: Some(name.into()),
        }
    }

    /// Attach or replace this parser's name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<CompactString>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The diagnostic name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Run against raw input, starting at the origin.
    pub fn run(&self, source: &'s str) -> ParseResult<'s, T> {
        self.run_state(State::new(source))
    }

    /// Run against an existing state.
    pub fn run_state(&self, state: State<'s>) -> ParseResult<'s, T> {
        (self.run)(state)
    }

    /// A parser that succeeds with `value` without consuming input.
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Parser::new(move |state| Ok((value.clone(), state)))
    }

    /// A parser that always fails with `message` at the current position.
    pub fn fail(message: impl Into<String>) -> Self {
        let message = message.into();
        Parser::new(move |state: State<'s>| Err(ParseError::new(message.clone(), state.pos())))
    }

    /// Monadic bind: run `self`, feed the value to `next` to obtain the
    /// follow-on parser, and run that against the advanced state. A failure
    /// short-circuits without invoking `next`.
    pub fn chain<U, F>(self, next: F) -> Parser<'s, U>
    where
        U: 's,
        F: Fn(T) -> Parser<'s, U> + 's,
    {
        Parser::new(move |state| {
            let (value, advanced) = self.run_state(state)?;
            next(value).run_state(advanced)
        })
    }

    /// Transform the matched value.
    pub fn map<U, F>(self, f: F) -> Parser<'s, U>
    where
        U: 's,
        F: Fn(T) -> U + 's,
    {
        Parser::new(move |state| {
            let (value, advanced) = self.run_state(state)?;
            Ok((f(value), advanced))
        })
    }

    /// Observation hook: a parser with identical matching behavior that also
    /// invokes `observer` with the entry state and the result after every
    /// run. The result is returned untouched; this is the only seam
    /// instrumentation may use.
    pub fn inspect<F>(self, observer: F) -> Self
    where
        F: Fn(State<'s>, &ParseResult<'s, T>) + 's,
    {
        let name = self.name.clone();
        Self {
            run: Rc::new(move |state| {
                let result = self.run_state(state);
                observer(state, &result);
                result
            }),
            name,
        }
    }
}

/// Generator-style sequencing, desugared to an eager [`Parser::chain`] chain.
///
/// Each `let name = parser;` step runs `parser` against the state threaded so
/// far, binds its value, and continues; a bare `parser;` step discards the
/// value. The first failing step short-circuits the whole sequence and
/// propagates its error. The final `=> expr` yields the sequence's value
/// without consuming further input.
///
/// Bind targets are plain identifiers, and bound values must implement
/// `Clone`: the expansion runs inside `Fn` closures that may execute many
/// times, so each step's closure works on clones of the earlier bindings.
///
/// # Example
///
/// ```rust
/// use quill::{digit, literal, seq};
///
/// let pair = seq! {
///     let a = digit();
///     literal(",");
///     let b = digit();
///     => (a, b)
/// };
/// let ((a, b), rest) = pair.run("4,7").unwrap();
/// assert_eq!((a, b), ('4', '7'));
/// assert!(rest.is_at_end());
/// ```
#[macro_export]
macro_rules! seq {
    ($($steps:tt)+) => {
        $crate::__seq_impl!(() $($steps)+)
    };
}

/// Implementation detail of [`seq!`]: the leading parenthesized list
/// accumulates the identifiers bound so far, so each closure can shadow them
/// with clones before the next step captures them.
#[doc(hidden)]
#[macro_export]
macro_rules! __seq_impl {
    (($($bound:ident)*) => $out:expr) => {
        $crate::parser::Parser::new(move |__state| {
            $(let $bound = ::core::clone::Clone::clone(&$bound);)*
            ::core::result::Result::Ok(($out, __state))
        })
    };
    (($($bound:ident)*) let $name:ident = $p:expr; $($rest:tt)+) => {
        ::core::clone::Clone::clone(&$p).chain(move |$name| {
            $(let $bound = ::core::clone::Clone::clone(&$bound);)*
            $crate::__seq_reclone!($($rest)+);
            $crate::__seq_impl!(($($bound)* $name) $($rest)+)
        })
    };
    (($($bound:ident)*) $p:expr; $($rest:tt)+) => {
        ::core::clone::Clone::clone(&$p).chain(move |_| {
            $(let $bound = ::core::clone::Clone::clone(&$bound);)*
            $crate::__seq_reclone!($($rest)+);
            $crate::__seq_impl!(($($bound)*) $($rest)+)
        })
    };
}

/// Implementation detail of [`seq!`]: re-clone the parser variables named in
/// the steps still to come, so the `move` closure for the current step owns a
/// fresh copy of each one instead of moving it out of an enclosing `Fn`
/// closure. Steps whose parser is an expression (not a bare identifier)
/// produce a fresh value each run and need no re-clone.
#[doc(hidden)]
#[macro_export]
macro_rules! __seq_reclone {
    (=> $out:expr) => {};
    (let $name:ident = $p:ident ; $($rest:tt)*) => {
        let $p = ::core::clone::Clone::clone(&$p);
        $crate::__seq_reclone!($($rest)*);
    };
    (let $name:ident = $p:expr ; $($rest:tt)*) => {
        $crate::__seq_reclone!($($rest)*);
    };
    ($p:ident ; $($rest:tt)*) => {
        let $p = ::core::clone::Clone::clone(&$p);
        $crate::__seq_reclone!($($rest)*);
    };
    ($p:expr ; $($rest:tt)*) => {
        $crate::__seq_reclone!($($rest)*);
    };
}
