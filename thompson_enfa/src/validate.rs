//! Admissibility check run before an expression reaches the compiler.

use std::fmt;

/// Why an expression is not admissible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    Empty,
    /// The expression starts with `*`
    LeadingStar,
    /// The expression starts with a space
    LeadingSpace,
    /// A character outside the grammar at char index `pos`
    InvalidChar { ch: char, pos: usize },
    /// A `)` at char index `pos` that closes nothing
    UnexpectedCloseParen { pos: usize },
    /// At least one `(` is never closed
    UnclosedParen,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::Empty => write!(f, "expression is empty"),
            SyntaxError::LeadingStar => write!(f, "expression starts with '*'"),
            SyntaxError::LeadingSpace => write!(f, "expression starts with a space"),
            SyntaxError::InvalidChar { ch, pos } => {
                write!(f, "invalid character {:?} at position {}", ch, pos)
            }
            SyntaxError::UnexpectedCloseParen { pos } => {
                write!(f, "unexpected ')' at position {}", pos)
            }
            SyntaxError::UnclosedParen => write!(f, "unclosed '('"),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Characters that stand for themselves: letters and the decimal digits
/// `0-9`. Other numeric characters such as `½` or `²` are not operands.
pub(crate) fn is_operand_char(ch: char) -> bool {
    ch.is_alphabetic() || ch.is_ascii_digit()
}

fn is_admissible_char(ch: char) -> bool {
    is_operand_char(ch) || matches!(ch, '(' | ')' | '*' | '+' | '|' | ' ')
}

/// Checks that `expr` may be handed to [`crate::compile`].
pub fn validate(expr: &str) -> Result<(), SyntaxError> {
    match expr.chars().next() {
        None => return Err(SyntaxError::Empty),
        Some('*') => return Err(SyntaxError::LeadingStar),
        Some(' ') => return Err(SyntaxError::LeadingSpace),
        Some(_) => {}
    }

    let mut depth = 0usize;
    for (pos, ch) in expr.chars().enumerate() {
        if !is_admissible_char(ch) {
            return Err(SyntaxError::InvalidChar { ch, pos });
        }
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(SyntaxError::UnexpectedCloseParen { pos })?;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(SyntaxError::UnclosedParen);
    }
    Ok(())
}

pub fn is_admissible(expr: &str) -> bool {
    validate(expr).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admissible() {
        assert!(is_admissible("a"));
        assert!(is_admissible("(a|b)*c+"));
        assert!(is_admissible("a b 0"));
        assert!(is_admissible("ñ9"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate(""), Err(SyntaxError::Empty));
    }

    #[test]
    fn test_leading_star_or_space() {
        assert_eq!(validate("*a"), Err(SyntaxError::LeadingStar));
        assert_eq!(validate(" a"), Err(SyntaxError::LeadingSpace));
    }

    #[test]
    fn test_invalid_char() {
        assert_eq!(
            validate("ab?"),
            Err(SyntaxError::InvalidChar { ch: '?', pos: 2 })
        );
        assert_eq!(
            validate("a.b"),
            Err(SyntaxError::InvalidChar { ch: '.', pos: 1 })
        );
    }

    #[test]
    fn test_only_decimal_digits() {
        assert!(is_admissible("0123456789"));
        assert_eq!(
            validate("a½"),
            Err(SyntaxError::InvalidChar { ch: '½', pos: 1 })
        );
        assert_eq!(
            validate("x²"),
            Err(SyntaxError::InvalidChar { ch: '²', pos: 1 })
        );
    }

    #[test]
    fn test_paren_balance() {
        assert_eq!(
            validate("a)("),
            Err(SyntaxError::UnexpectedCloseParen { pos: 1 })
        );
        assert_eq!(validate("((a)"), Err(SyntaxError::UnclosedParen));
        assert!(validate("((a))").is_ok());
    }
}
