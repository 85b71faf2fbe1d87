#![allow(dead_code)]

use std::path::PathBuf;

use cfg_epsilon::grammar::{ContextFreeGrammar, NonTerminal};
use indexmap::IndexSet;

pub fn test_file_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join(name)
}

pub fn load(name: &str) -> ContextFreeGrammar {
    ContextFreeGrammar::load(test_file_path(name)).unwrap()
}

pub fn nts(s: &str) -> IndexSet<NonTerminal> {
    s.chars().map(NonTerminal::new).collect()
}

pub fn bodies(grammar: &ContextFreeGrammar, head: char) -> IndexSet<String> {
    grammar
        .productions_of(&NonTerminal::new(head))
        .map(|rhs| rhs.iter().map(ToString::to_string).collect())
        .unwrap_or_default()
}

pub fn strings(items: &[&str]) -> IndexSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Decides `head ⇒* ε` by exhaustive search, without any fixpoint: a head derives ε when one of
/// its productions consists of non-terminals that each derive ε without revisiting a head
/// already on the current derivation path.
pub fn derives_empty(grammar: &ContextFreeGrammar, head: &NonTerminal) -> bool {
    fn search(
        grammar: &ContextFreeGrammar,
        head: &NonTerminal,
        path: &mut Vec<NonTerminal>,
    ) -> bool {
        if path.contains(head) {
            return false;
        }
        let Some(rhs) = grammar.productions_of(head) else {
            return false;
        };

        path.push(*head);
        let found = rhs.iter().any(|production| {
            production.iter().all(|symbol| {
                symbol
                    .as_non_terminal()
                    .is_some_and(|nt| search(grammar, nt, path))
            })
        });
        path.pop();

        found
    }

    search(grammar, head, &mut Vec::new())
}
