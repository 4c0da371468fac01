/*!
This crate provides a small regular expression engine built on Thompson's
construction.

An expression is checked for admissibility, compiled into an epsilon-NFA, and
every query simulates that automaton over the whole input. The grammar is
intentionally tiny: letters and digits, implicit concatenation, alternation
(`|`), Kleene star (`*`), Kleene plus (`+`) and parentheses. Spaces are
allowed anywhere except at the start and are ignored.

There are no character classes, anchors, escapes, bounded repetitions or
capture groups. A match always means the *entire* input is in the language.

# Example

```
use enfa_regex::Regex;

let re = Regex::new("(ab)*c|d+").unwrap();
assert!(re.is_match("ababc"));
assert!(re.is_match("ddd"));
assert!(!re.is_match("abd"));
```

A compiled `Regex` is immutable, so it can be shared between threads and
queried any number of times.

# Crate layout

The automaton model, the compiler and the matcher live in the
[`thompson_enfa`] crate, which is re-exported here for callers that want to
inspect or build automata directly.
*/

#![deny(missing_docs)]

use std::fmt;

pub use thompson_enfa;
pub use thompson_enfa::{CompileError, Enfa, SyntaxError, Transition};

/// An error that occurred while building a [`Regex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression failed the admissibility check.
    Syntax(SyntaxError),
    /// The expression passed the admissibility check but could not be
    /// reduced to a single automaton, for example `a|` or `()`.
    Compile(CompileError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(err) => write!(f, "invalid expression: {}", err),
            Error::Compile(err) => write!(f, "failed to compile: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Syntax(err) => Some(err),
            Error::Compile(err) => Some(err),
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Error {
        Error::Syntax(err)
    }
}

impl From<CompileError> for Error {
    fn from(err: CompileError) -> Error {
        Error::Compile(err)
    }
}

/// A compiled regular expression.
#[derive(Clone)]
pub struct Regex {
    pattern: String,
    nfa: Enfa,
}

impl Regex {
    /// Checks and compiles `pattern`.
    ///
    /// # Example
    ///
    /// ```
    /// use enfa_regex::{Error, Regex};
    ///
    /// assert!(Regex::new("a|b").is_ok());
    /// assert!(matches!(Regex::new("a?"), Err(Error::Syntax(_))));
    /// ```
    pub fn new(pattern: &str) -> Result<Regex, Error> {
        thompson_enfa::validate(pattern)?;
        let nfa = thompson_enfa::compile(pattern)?;
        log::debug!(
            "built regex {:?} with {} states",
            pattern,
            nfa.state_count()
        );
        Ok(Regex { pattern: pattern.to_string(), nfa })
    }

    /// Returns true if and only if the whole of `input` matches.
    ///
    /// Every call simulates the automaton from scratch.
    pub fn is_match(&self, input: &str) -> bool {
        thompson_enfa::matches(&self.nfa, input)
    }

    /// Returns the pattern this regex was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the compiled automaton.
    pub fn automaton(&self) -> &Enfa {
        &self.nfa
    }
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Regex").field(&self.as_str()).finish()
    }
}

/// Shows the original pattern.
impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
