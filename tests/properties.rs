use enfa_regex::thompson_enfa::{compose, Enfa};
use enfa_regex::Regex;
use quickcheck::{quickcheck, Arbitrary, Gen};

use crate::init_logging;

/// A short word over a three letter alphabet, so that random inputs hit the
/// interesting cases of tiny expressions often.
#[derive(Clone, Debug)]
struct Word(String);

impl Arbitrary for Word {
    fn arbitrary(g: &mut Gen) -> Word {
        let len = usize::arbitrary(g) % 8;
        let word = (0..len)
            .map(|_| *g.choose(&['a', 'b', 'c']).unwrap_or(&'a'))
            .collect();
        Word(word)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Word>> {
        Box::new(self.0.shrink().map(Word))
    }
}

fn regex(pattern: &str) -> Regex {
    init_logging();
    Regex::new(pattern).unwrap()
}

fn only(word: &str, ch: char) -> bool {
    word.chars().all(|c| c == ch)
}

quickcheck! {
    fn prop_literal(w: Word) -> bool {
        let re = regex("a");
        re.is_match(&w.0) == (w.0 == "a")
    }

    fn prop_concat(w: Word) -> bool {
        regex("ab").is_match(&w.0) == (w.0 == "ab")
    }

    fn prop_alternation(w: Word) -> bool {
        regex("a|b").is_match(&w.0) == (w.0 == "a" || w.0 == "b")
    }

    fn prop_star(w: Word) -> bool {
        regex("a*").is_match(&w.0) == only(&w.0, 'a')
    }

    fn prop_plus(w: Word) -> bool {
        regex("a+").is_match(&w.0) == (!w.0.is_empty() && only(&w.0, 'a'))
    }

    fn prop_precedence(w: Word) -> bool {
        regex("ab|c").is_match(&w.0) == (w.0 == "ab" || w.0 == "c")
    }

    fn prop_grouping(w: Word) -> bool {
        regex("(a|b)c").is_match(&w.0) == (w.0 == "ac" || w.0 == "bc")
    }

    fn prop_nested_closure(w: Word) -> bool {
        let expected = w.0.len() % 2 == 0 && w.0 == "ab".repeat(w.0.len() / 2);
        regex("(ab)*").is_match(&w.0) == expected
    }

    fn prop_repeated_queries_agree(w: Word) -> bool {
        let re = regex("(a|bc)*b+");
        let first = re.is_match(&w.0);
        (0..3).all(|_| re.is_match(&w.0) == first)
    }
}

/// Small expressions over the full operator set, built by construction so
/// they are always admissible.
#[derive(Clone, Debug)]
struct Expr(String);

impl Arbitrary for Expr {
    fn arbitrary(g: &mut Gen) -> Expr {
        fn build(g: &mut Gen, depth: usize) -> String {
            let choice = if depth == 0 { 0 } else { u8::arbitrary(g) % 5 };
            match choice {
                0 => g.choose(&["a", "b", "c", "1"]).unwrap_or(&"a").to_string(),
                1 => format!("{}{}", build(g, depth - 1), build(g, depth - 1)),
                2 => format!("{}|{}", build(g, depth - 1), build(g, depth - 1)),
                3 => format!("({})*", build(g, depth - 1)),
                _ => format!("({})+", build(g, depth - 1)),
            }
        }
        Expr(build(g, 3))
    }
}

fn compiled(expr: &Expr) -> Enfa {
    regex(&expr.0).automaton().clone()
}

quickcheck! {
    fn prop_concat_state_count(a: Expr, b: Expr) -> bool {
        let (a, b) = (compiled(&a), compiled(&b));
        let expected = a.state_count() + b.state_count() - 1;
        compose::concat(a, b).state_count() == expected
    }

    fn prop_union_state_count(a: Expr, b: Expr) -> bool {
        let (a, b) = (compiled(&a), compiled(&b));
        let expected = a.state_count() + b.state_count() + 2;
        compose::union(a, b).state_count() == expected
    }

    fn prop_closure_state_count(a: Expr) -> bool {
        let a = compiled(&a);
        let expected = a.state_count() + 2;
        compose::kleene_star(a.clone()).state_count() == expected
            && compose::kleene_plus(a).state_count() == expected
    }

    fn prop_transitions_stay_in_range(a: Expr) -> bool {
        let nfa = compiled(&a);
        nfa.states().contains(&nfa.start())
            && nfa.states().contains(&nfa.accept())
            && nfa.transitions().all(|t| {
                nfa.states().contains(&t.from) && nfa.states().contains(&t.to)
            })
    }

    fn prop_alternation_is_either_side(a: Expr, b: Expr, w: Word) -> bool {
        let either = regex(&format!("({})|({})", a.0, b.0)).is_match(&w.0);
        either == (regex(&a.0).is_match(&w.0) || regex(&b.0).is_match(&w.0))
    }

    fn prop_star_accepts_empty(a: Expr) -> bool {
        regex(&format!("({})*", a.0)).is_match("")
    }

    fn prop_plus_is_one_then_star(a: Expr, w: Word) -> bool {
        let plus = regex(&format!("({})+", a.0)).is_match(&w.0);
        let expanded = regex(&format!("({})({})*", a.0, a.0)).is_match(&w.0);
        plus == expanded
    }
}
