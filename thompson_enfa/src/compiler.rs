use crate::{
    compose::{concat, kleene_plus, kleene_star, union},
    nfa::Enfa,
    validate::is_operand_char,
    CompileError, CompileResult,
};
use log::{debug, trace};

/// An operator waiting on the operator stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Implicit concatenation, written `.` in traces
    Concat,
    /// Alternation `|`
    Union,
    /// An open group `(`
    OpenParen,
}

impl Operator {
    pub fn as_char(self) -> char {
        match self {
            Operator::Concat => '.',
            Operator::Union => '|',
            Operator::OpenParen => '(',
        }
    }
}

/// The state of a left-to-right scan: two stacks plus bookkeeping.
///
/// Operands are automata for already-recognised sub-expressions. Closures
/// (`*`, `+`) never reach the operator stack; they are applied to the top
/// operand as soon as they are read.
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    operands: Vec<Enfa>,
    operators: Vec<Operator>,
    /// The previous token ended an operand, so the next operand concatenates
    concat_pending: bool,
    depth: usize,
    /// Char index of the next character to be scanned
    pos: usize,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operands(&self) -> &[Enfa] {
        &self.operands
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn concat_pending(&self) -> bool {
        self.concat_pending
    }

    /// Number of currently open groups
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn pop_operand(&mut self, op: char) -> CompileResult<Enfa> {
        self.operands.pop().ok_or(CompileError::MissingOperand { op })
    }

    /// Pops and applies the operator on top of the stack.
    fn reduce(&mut self) -> CompileResult<()> {
        let op = match self.operators.pop() {
            Some(op) => op,
            None => return Ok(()),
        };

        match op {
            Operator::Concat => {
                let rhs = self.pop_operand('.')?;
                let lhs = self.pop_operand('.')?;
                self.operands.push(concat(lhs, rhs));
            }
            Operator::Union => {
                let rhs = self.pop_operand('|')?;
                let lhs = self.absorb_concat_chain()?;
                self.operands.push(union(lhs, rhs));
            }
            // Only reachable when draining with a group still open
            Operator::OpenParen => return Err(CompileError::UnclosedParen),
        }

        if let Some(top) = self.operands.last() {
            trace!("reduced '{}' into {} states", op.as_char(), top.state_count());
        }
        Ok(())
    }

    /// Builds the left operand of an alternation.
    ///
    /// Concatenation binds tighter than `|`, so any run of `.` operators
    /// sitting directly under the `|` belongs to its left-hand side. Those
    /// operands are collected right to left and then folded left to right.
    fn absorb_concat_chain(&mut self) -> CompileResult<Enfa> {
        let mut chain = Vec::new();
        while self.operators.last() == Some(&Operator::Concat) {
            self.operators.pop();
            chain.push(self.pop_operand('.')?);
        }

        let mut lhs = self.pop_operand('|')?;
        for operand in chain.into_iter().rev() {
            lhs = concat(lhs, operand);
        }
        Ok(lhs)
    }
}

/// Compiler that turns an admissible expression into an epsilon-NFA
#[derive(Debug, Clone, Default)]
pub struct Compiler {}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self {}
    }

    /// Compile `expr` with a single left-to-right scan.
    ///
    /// `expr` is expected to satisfy [`crate::validate()`]. If it does not,
    /// compilation stops at the first broken reduction and no automaton is
    /// produced.
    pub fn compile(&self, expr: &str) -> CompileResult<Enfa> {
        let mut state = ScanState::new();
        for ch in expr.chars() {
            state = self.step(state, ch)?;
        }
        let nfa = self.finish(state)?;

        debug!(
            "compiled {:?} into {} states and {} transitions",
            expr,
            nfa.state_count(),
            nfa.transitions().count()
        );
        Ok(nfa)
    }

    /// Feed one character to the scan.
    pub fn step(&self, mut state: ScanState, ch: char) -> CompileResult<ScanState> {
        let pos = state.pos;
        state.pos += 1;

        match ch {
            ' ' => {}
            '*' | '+' => {
                let operand = state.pop_operand(ch)?;
                let closed = if ch == '*' {
                    kleene_star(operand)
                } else {
                    kleene_plus(operand)
                };
                state.operands.push(closed);
                state.concat_pending = true;
            }
            '(' => {
                // `a(b)` concatenates; the `.` waits under the group
                if state.concat_pending {
                    state.operators.push(Operator::Concat);
                }
                state.operators.push(Operator::OpenParen);
                state.depth += 1;
                state.concat_pending = false;
            }
            ')' => {
                if state.depth == 0 {
                    return Err(CompileError::UnbalancedParen { pos });
                }
                while let Some(&op) = state.operators.last() {
                    if op == Operator::OpenParen {
                        break;
                    }
                    state.reduce()?;
                }
                state.operators.pop();
                state.depth -= 1;
                state.concat_pending = true;
            }
            '|' => {
                state.operators.push(Operator::Union);
                state.concat_pending = false;
            }
            ch if is_operand_char(ch) => {
                if state.concat_pending {
                    state.operators.push(Operator::Concat);
                } else {
                    state.concat_pending = true;
                }
                state.operands.push(Enfa::literal(ch));
            }
            ch => return Err(CompileError::InvalidChar { ch, pos }),
        }

        Ok(state)
    }

    /// Drain the operator stack and take the single remaining operand.
    pub fn finish(&self, mut state: ScanState) -> CompileResult<Enfa> {
        while !state.operators.is_empty() {
            state.reduce()?;
        }

        // Every operand after the first is preceded by a pending `.` or `|`,
        // so a full drain leaves at most one
        let nfa = state.operands.pop().ok_or(CompileError::EmptyExpression)?;
        debug_assert!(state.operands.is_empty());
        Ok(nfa)
    }
}

/// Compile `expr` with a default [`Compiler`].
pub fn compile(expr: &str) -> CompileResult<Enfa> {
    Compiler::new().compile(expr)
}
