use std::fmt;
use std::ops::Range;

/// A state ID in the automaton
pub type StateId = usize;

/// The label carried by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Consumes exactly this character
    Char(char),
    /// Free move, consumes nothing
    Epsilon,
}

impl Symbol {
    /// Whether this label is the epsilon marker
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// Whether this label consumes `ch`
    pub fn accepts(&self, ch: char) -> bool {
        *self == Symbol::Char(ch)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(ch) => write!(f, "{}", ch),
            Symbol::Epsilon => write!(f, "ε"),
        }
    }
}

/// A labeled edge `(from, label, to)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub from: StateId,
    pub label: Symbol,
    pub to: StateId,
}

impl Transition {
    pub fn new(from: StateId, label: Symbol, to: StateId) -> Self {
        Transition { from, label, to }
    }

    pub fn epsilon(from: StateId, to: StateId) -> Self {
        Transition::new(from, Symbol::Epsilon, to)
    }

    /// Moves both endpoints up by `offset`
    pub(crate) fn shift(self, offset: StateId) -> Self {
        Transition {
            from: self.from + offset,
            label: self.label,
            to: self.to + offset,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.from, self.label, self.to)
    }
}

/// An epsilon-NFA with a single start state and a single accept state.
///
/// States are always numbered `0..state_count()`. Automata are only built
/// by [`Enfa::literal`] or by the composition primitives in
/// [`crate::compose`], which consume their operands and renumber into a
/// fresh range. Once built, an automaton is never mutated by the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enfa {
    state_count: usize,
    transitions: Vec<Transition>,
    start: StateId,
    accept: StateId,
}

impl Enfa {
    /// Two states `{0, 1}` joined by a single `symbol` edge
    pub fn literal(symbol: char) -> Self {
        let mut nfa = Enfa::allocate(2);
        nfa.add_transition(Transition::new(0, Symbol::Char(symbol), 1));
        nfa.accept = 1;
        nfa
    }

    /// `n` bare states numbered `0..n`; start and accept both default to 0.
    ///
    /// Scaffolding for the composition primitives, which attach edges and
    /// then set start/accept explicitly. At least one state is always
    /// allocated so that start and accept exist.
    pub fn allocate(n: usize) -> Self {
        Enfa {
            state_count: n.max(1),
            transitions: Vec::new(),
            start: 0,
            accept: 0,
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// All state IDs, always a contiguous range starting at 0
    pub fn states(&self) -> Range<StateId> {
        0..self.state_count
    }

    /// Read-only enumeration of every `(from, label, to)` edge
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions.iter()
    }

    /// The `(label, to)` pairs leaving `from`
    pub fn successors(
        &self,
        from: StateId,
    ) -> impl Iterator<Item = (Symbol, StateId)> + '_ {
        self.transitions
            .iter()
            .filter(move |t| t.from == from)
            .map(|t| (t.label, t.to))
    }

    pub(crate) fn set_start(&mut self, start: StateId) {
        debug_assert!(start < self.state_count);
        self.start = start;
    }

    pub(crate) fn set_accept(&mut self, accept: StateId) {
        debug_assert!(accept < self.state_count);
        self.accept = accept;
    }

    pub(crate) fn add_transition(&mut self, transition: Transition) {
        debug_assert!(transition.from < self.state_count);
        debug_assert!(transition.to < self.state_count);
        self.transitions.push(transition);
    }

    /// Takes the edge list out, leaving the state count, start and accept
    pub(crate) fn into_parts(self) -> (usize, Vec<Transition>, StateId, StateId) {
        (self.state_count, self.transitions, self.start, self.accept)
    }
}

/// The transition table, one `(from, label, to)` per line
impl fmt::Display for Enfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for transition in &self.transitions {
            writeln!(f, "{}", transition)?;
        }
        Ok(())
    }
}
