//! Thompson composition primitives.
//!
//! Every primitive takes its operands by value and returns a new automaton
//! whose states are renumbered into a fresh `0..n` range. Each result keeps
//! the shape the construction relies on: the start state has no incoming
//! edges and the accept state has no outgoing edges.

use crate::nfa::{Enfa, StateId, Transition};

/// `a` followed by `b`.
///
/// `b`'s start state is spliced onto `a`'s accept state rather than joined
/// with an epsilon edge, so the result has `|a| + |b| - 1` states.
pub fn concat(a: Enfa, b: Enfa) -> Enfa {
    let (a_count, a_transitions, a_start, a_accept) = a.into_parts();
    let (b_count, b_transitions, b_start, b_accept) = b.into_parts();

    // b's states keep their relative order after a's, minus the dropped start
    let relabel = |state: StateId| -> StateId {
        if state == b_start {
            a_accept
        } else if state > b_start {
            a_count + state - 1
        } else {
            a_count + state
        }
    };

    let mut result = Enfa::allocate(a_count + b_count - 1);
    for transition in a_transitions {
        result.add_transition(transition);
    }
    for transition in b_transitions {
        result.add_transition(Transition::new(
            relabel(transition.from),
            transition.label,
            relabel(transition.to),
        ));
    }
    result.set_start(a_start);
    result.set_accept(relabel(b_accept));
    result
}

/// Either `a` or `b`.
///
/// Layout: `0` is the new start, `a` occupies `1..=|a|`, `b` follows, and
/// the last state is the new accept.
pub fn union(a: Enfa, b: Enfa) -> Enfa {
    let (a_count, a_transitions, a_start, a_accept) = a.into_parts();
    let (b_count, b_transitions, b_start, b_accept) = b.into_parts();

    let a_offset = 1;
    let b_offset = 1 + a_count;
    let new_accept = a_count + b_count + 1;

    let mut result = Enfa::allocate(a_count + b_count + 2);
    result.add_transition(Transition::epsilon(0, a_start + a_offset));
    result.add_transition(Transition::epsilon(0, b_start + b_offset));
    for transition in a_transitions {
        result.add_transition(transition.shift(a_offset));
    }
    for transition in b_transitions {
        result.add_transition(transition.shift(b_offset));
    }
    result.add_transition(Transition::epsilon(a_accept + a_offset, new_accept));
    result.add_transition(Transition::epsilon(b_accept + b_offset, new_accept));
    result.set_start(0);
    result.set_accept(new_accept);
    result
}

/// Zero or more repetitions of `a`.
pub fn kleene_star(a: Enfa) -> Enfa {
    let (count, transitions, start, accept) = a.into_parts();
    let new_accept = count + 1;

    let mut result = Enfa::allocate(count + 2);
    result.add_transition(Transition::epsilon(0, new_accept));
    result.add_transition(Transition::epsilon(0, start + 1));
    for transition in transitions {
        result.add_transition(transition.shift(1));
    }
    result.add_transition(Transition::epsilon(accept + 1, start + 1));
    result.add_transition(Transition::epsilon(accept + 1, new_accept));
    result.set_start(0);
    result.set_accept(new_accept);
    result
}

/// One or more repetitions of `a`.
///
/// Same layout as [`kleene_star`] without the `start -> accept` bypass, so
/// at least one pass through `a` is required.
pub fn kleene_plus(a: Enfa) -> Enfa {
    let (count, transitions, start, accept) = a.into_parts();
    let new_accept = count + 1;

    let mut result = Enfa::allocate(count + 2);
    result.add_transition(Transition::epsilon(0, start + 1));
    for transition in transitions {
        result.add_transition(transition.shift(1));
    }
    result.add_transition(Transition::epsilon(accept + 1, start + 1));
    result.add_transition(Transition::epsilon(accept + 1, new_accept));
    result.set_start(0);
    result.set_accept(new_accept);
    result
}
