//! # Quill
//!
//! A small parser-combinator toolkit: build recursive-descent parsers for
//! textual grammars by composing [`Parser`] values, without hand-threading
//! state.
//!
//! ## Overview
//!
//! A [`Parser<T>`] wraps a pure transition function from an immutable
//! [`State`] (remaining input + position) to a [`ParseResult`]: either the
//! matched value with the advanced state, or a [`ParseError`] with a message,
//! the expected tokens, and the precise failure position. Failures travel as
//! values (grammar mismatches never panic), and backtracking is just reusing
//! the pre-call state, which [`optional`] and everything built on it
//! ([`or`], the `many` family, [`sep_by`]) do for you.
//!
//! ## Quick Start
//!
//! ```rust
//! use quill::{between, digit, literal, sep_by};
//!
//! // A parenthesized, comma-separated list of digits: "(1,2,3)"
//! let digits = sep_by(literal(","), digit());
//! let list = between("(", ")", digits);
//!
//! let (values, rest) = list.run("(1,2,3)").unwrap();
//! assert_eq!(values, vec!['1', '2', '3']);
//! assert!(rest.is_at_end());
//!
//! let err = list.run("(1,2").unwrap_err();
//! assert_eq!(err.pos.offset, 4);
//! ```
//!
//! Multi-step grammars sequence sub-parsers with the [`seq!`] macro, which
//! desugars to an eager [`Parser::chain`] pipeline: each step runs against
//! the state the previous step produced, and the first failure
//! short-circuits:
//!
//! ```rust
//! use quill::{alpha, literal, many1, seq};
//!
//! let binding = seq! {
//!     literal("let ");
//!     let name = many1(alpha());
//!     literal(";");
//!     => name.iter().collect::<String>()
//! };
//! assert_eq!(binding.run("let x;").unwrap().0, "x");
//! ```
//!
//! ## Modules
//!
//! - [`state`] - Immutable input cursor and position tracking
//! - [`error`] - Parse failure values
//! - [`parser`] - The `Parser` core, bind, and the `seq!` macro
//! - [`primitive`] - Literal, character-class, and regex leaves
//! - [`combinator`] - Sequencing, alternation, repetition, and friends
//!
//! ## Features
//!
//! - `diagnostics` - derive [`miette::Diagnostic`](https://docs.rs/miette) on
//!   [`ParseError`] for rich terminal reports
//! - `serde` - `Serialize`/`Deserialize` on [`Pos`] and [`ParseError`]

pub mod combinator;
pub mod error;
pub mod parser;
pub mod primitive;
pub mod state;

pub use combinator::{
    between, chain, many, many1, many_n, optional, or, sep_by, sequence, skip_many, skip_many1,
    skip_many_n, skip_until,
};
pub use error::{ParseError, ParseResult};
pub use parser::Parser;
pub use primitive::{alpha, character, digit, literal, regex, skip_spaces};
pub use state::{Pos, State};
