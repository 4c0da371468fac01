//! Thompson Construction of Epsilon-NFAs
//!
//! This library compiles a restricted regular-expression grammar into a
//! nondeterministic finite automaton with epsilon transitions and decides,
//! for arbitrary input strings, whether they belong to the language of the
//! expression.
//!
//! The grammar consists of:
//! - Letters and digits, each matching itself
//! - Implicit concatenation (`ab`)
//! - Alternation (`a|b`), binding looser than concatenation
//! - Kleene star (`a*`) and Kleene plus (`a+`), binding tightest
//! - Grouping parentheses (`(ab)*`)
//!
//! Spaces are admissible and ignored.
//!
//! ```
//! use thompson_enfa::{compile, matches};
//!
//! let nfa = compile("(a|b)c*").unwrap();
//! assert!(matches(&nfa, "acc"));
//! assert!(matches(&nfa, "b"));
//! assert!(!matches(&nfa, "ab"));
//! ```

pub mod nfa;
pub mod compose;
pub mod compiler;
pub mod matcher;
pub mod validate;

pub use nfa::{Enfa, StateId, Symbol, Transition};
pub use compose::{concat, kleene_plus, kleene_star, union};
pub use compiler::{compile, Compiler, Operator, ScanState};
pub use matcher::{matches, Matcher};
pub use validate::{is_admissible, validate, SyntaxError};

/// The result of compiling an expression to an epsilon-NFA
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that abort compilation.
///
/// None of these can occur for an expression accepted by [`validate()`]; they
/// mean the caller handed the compiler an expression that was not actually
/// admissible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A closing parenthesis with no open group (char index of the `)`)
    UnbalancedParen { pos: usize },
    /// The scan ended inside an open group
    UnclosedParen,
    /// A character outside the grammar (char index of the character)
    InvalidChar { ch: char, pos: usize },
    /// An operator found the operand stack exhausted
    MissingOperand { op: char },
    /// The expression produced no operand at all
    EmptyExpression,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::UnbalancedParen { pos } => {
                write!(f, "unbalanced parenthesis at position {}", pos)
            }
            CompileError::UnclosedParen => write!(f, "unclosed parenthesis"),
            CompileError::InvalidChar { ch, pos } => {
                write!(f, "invalid character '{}' at position {}", ch, pos)
            }
            CompileError::MissingOperand { op } => {
                write!(f, "operator '{}' is missing an operand", op)
            }
            CompileError::EmptyExpression => write!(f, "expression is empty"),
        }
    }
}

impl std::error::Error for CompileError {}
