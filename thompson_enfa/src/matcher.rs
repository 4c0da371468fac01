use crate::nfa::{Enfa, StateId, Symbol};
use log::trace;
use std::collections::HashSet;

/// A matcher that simulates an epsilon-NFA against whole inputs.
///
/// The automaton is only borrowed; the matcher keeps a per-state index of
/// outgoing edges so that each step does not rescan the whole transition
/// list. Queries are independent of each other.
pub struct Matcher<'a> {
    nfa: &'a Enfa,
    /// `successors[s]` holds the `(label, to)` pairs leaving state `s`
    successors: Vec<Vec<(Symbol, StateId)>>,
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given automaton
    pub fn new(nfa: &'a Enfa) -> Self {
        let mut successors = vec![Vec::new(); nfa.state_count()];
        for transition in nfa.transitions() {
            successors[transition.from].push((transition.label, transition.to));
        }
        Self { nfa, successors }
    }

    /// Check if the entire input is in the language of the automaton
    pub fn is_match(&self, input: &str) -> bool {
        self.is_match_chars(input.chars())
    }

    /// Same as [`Matcher::is_match`], for any sequence of characters
    pub fn is_match_chars<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = char>,
    {
        let mut current = self.epsilon_closure([self.nfa.start()]);

        for ch in input {
            if current.is_empty() {
                break;
            }
            let stepped = self.step(&current, ch);
            current = self.epsilon_closure(stepped);
        }

        let matched = current.contains(&self.nfa.accept());
        trace!("simulation ended in {} states, matched: {}", current.len(), matched);
        matched
    }

    /// States reachable from `seeds` using only epsilon edges, seeds included.
    ///
    /// Star and plus introduce epsilon cycles, hence the visited set.
    pub fn epsilon_closure<I>(&self, seeds: I) -> HashSet<StateId>
    where
        I: IntoIterator<Item = StateId>,
    {
        let mut closure = HashSet::new();
        let mut stack: Vec<StateId> = Vec::new();

        for seed in seeds {
            if closure.insert(seed) {
                stack.push(seed);
            }
        }

        while let Some(state) = stack.pop() {
            for &(label, to) in &self.successors[state] {
                if label.is_epsilon() && closure.insert(to) {
                    stack.push(to);
                }
            }
        }

        closure
    }

    /// Targets of every `ch` edge leaving a state in `current`
    fn step(&self, current: &HashSet<StateId>, ch: char) -> HashSet<StateId> {
        current
            .iter()
            .flat_map(|&state| self.successors[state].iter())
            .filter(|(label, _)| label.accepts(ch))
            .map(|&(_, to)| to)
            .collect()
    }
}

/// Whether `input` is in the language of `nfa`.
pub fn matches(nfa: &Enfa, input: &str) -> bool {
    Matcher::new(nfa).is_match(input)
}
