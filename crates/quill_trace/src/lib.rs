//! # Quill Trace
//!
//! Debugging, tracing, and timing helpers for [`quill`] parsers.
//!
//! Everything here consumes the core's public contract only: wrappers attach
//! through [`Parser::inspect`] (the observation hook) or re-run a parser via
//! [`Parser::run_state`], and never alter the matching behavior or the
//! returned result.
//!
//! ```rust
//! use quill::{digit, many1};
//! use quill_trace::debug;
//!
//! let digits = debug(many1(digit()), "digits");
//! // Parses exactly as the unwrapped parser would, logging each run.
//! assert_eq!(digits.run("123").unwrap().0, vec!['1', '2', '3']);
//! ```

use std::fmt::Debug;
use std::io::{BufRead, Write};
use std::time::Instant;

use quill::{ParseResult, Parser, State};

/// Formatting knobs for [`debug_state`].
#[derive(Debug, Clone)]
pub struct DebugOptions {
    /// How many characters of the remaining input to show
    pub input_preview_len: usize,
    /// Line printed after each dump
    pub separator: String,
}

impl Default for DebugOptions {
    fn default() -> Self {
        Self {
            input_preview_len: 20,
            separator: "=".repeat(40),
        }
    }
}

/// Print a labeled dump of a parser's entry state and result.
pub fn debug_state<T: Debug>(
    label: &str,
    state: State<'_>,
    result: &ParseResult<'_, T>,
    options: &DebugOptions,
) {
    let remaining = state.remaining();
    let mut shown: String = remaining.chars().take(options.input_preview_len).collect();
    if shown.len() < remaining.len() {
        shown.push_str("...");
    }

    println!("\n=== {label} ===");
    println!("Position: {}", state.print_position());
    println!("Input: {shown:?}");
    match result {
        Ok((value, _)) => println!("Result: Success: {value:?}"),
        Err(err) => println!("Result: Error: {}", err.message),
    }
    println!("{}", options.separator);
}

/// Wrap `parser` so every run dumps its state and result with [`debug_state`].
pub fn debug<'s, T>(parser: Parser<'s, T>, label: impl Into<String>) -> Parser<'s, T>
where
    T: Debug + 's,
{
    let label = label.into();
    let options = DebugOptions::default();
    parser.inspect(move |state, result| debug_state(&label, state, result, &options))
}

/// A zero-width parser that logs the position and remaining input, then
/// succeeds without consuming anything. Drop one into a sequence to see where
/// the cursor is.
pub fn trace<'s>(label: impl Into<String>) -> Parser<'s, ()> {
    let label = label.into();
    Parser::new(move |state| {
        println!("\n[TRACE] {label}");
        println!("Position: {}", state.print_position());
        println!("Remaining: {:?}", state.remaining());
        Ok(((), state))
    })
}

/// Like [`debug`], but additionally pauses for Enter on stdin after each
/// dump, for step-by-step walks through a grammar.
pub fn breakpoint<'s, T>(parser: Parser<'s, T>, label: impl Into<String>) -> Parser<'s, T>
where
    T: Debug + 's,
{
    let label = label.into();
    let options = DebugOptions::default();
    parser.inspect(move |state, result| {
        debug_state(&label, state, result, &options);
        print!("[BREAK] press Enter to continue ");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        let _ = std::io::stdin().lock().read_line(&mut line);
    })
}

/// Wrap `parser`, timing each run and printing the elapsed milliseconds. The
/// result is passed through untouched.
pub fn benchmark<'s, T>(parser: Parser<'s, T>, label: impl Into<String>) -> Parser<'s, T>
where
    T: 's,
{
    let label = label.into();
    Parser::new(move |state| {
        let start = Instant::now();
        let result = parser.run_state(state);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        println!("\n[BENCHMARK] {label}: {elapsed_ms:.2}ms");
        result
    })
}

#[cfg(test)]
mod tests {
    use quill::{digit, literal, many1, seq};

    use super::*;

    #[test]
    fn debug_does_not_change_the_result() {
        let plain = many1(digit());
        let wrapped = debug(plain.clone(), "digits");
        assert_eq!(wrapped.run("123ab"), plain.run("123ab"));
        assert_eq!(wrapped.run("zzz"), plain.run("zzz"));
    }

    #[test]
    fn benchmark_does_not_change_the_result() {
        let plain = literal("abc");
        let wrapped = benchmark(plain.clone(), "abc");
        assert_eq!(wrapped.run("abcdef"), plain.run("abcdef"));
        assert_eq!(wrapped.run("nope"), plain.run("nope"));
    }

    #[test]
    fn trace_is_zero_width() {
        let p = seq! {
            literal("a");
            trace("after a");
            let b = literal("b");
            => b
        };
        let (value, rest) = p.run("ab").unwrap();
        assert_eq!(value, "b");
        assert!(rest.is_at_end());
    }

    #[test]
    fn debug_state_handles_both_arms() {
        let state = State::new("some input that is long enough to elide");
        let ok: ParseResult<'_, &str> = Ok(("value", state));
        debug_state("ok", state, &ok, &DebugOptions::default());
        let err = literal("x").run("y").unwrap_err();
        let failed: ParseResult<'_, String> = Err(err);
        debug_state("err", state, &failed, &DebugOptions::default());
    }
}
