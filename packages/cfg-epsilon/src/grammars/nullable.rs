use indexmap::IndexSet;
use log::{debug, trace};

use crate::{
    grammars::{
        context_free::ContextFreeGrammar,
        types::{NonTerminal, ProductionSymbol, Terminal},
    },
    trace::{Step, Trace},
};

/// Computes the least set of non-terminals that derive the empty word.
///
/// Runs full passes over every head until a pass adds nothing. A head is added when one of its
/// productions is ε or consists only of non-terminals already known to be nullable. Each pass
/// that makes progress adds at least one head, so there are at most `|N| + 1` passes.
pub fn compute_nullable(grammar: &ContextFreeGrammar) -> (IndexSet<NonTerminal>, Trace) {
    let mut steps = Trace::new();
    let mut nullable = IndexSet::new();

    steps.push(Step::NullableStarted);

    let mut pass = 0;
    loop {
        pass += 1;
        let mut changed = false;

        steps.push(Step::PassStarted(pass));

        for (head, rhs) in grammar.productions() {
            if nullable.contains(head) {
                steps.push(Step::AlreadyNullable(*head));
                continue;
            }

            for production in rhs {
                if production.is_epsilon() {
                    trace!("{head} -> ε is an epsilon production");
                    nullable.insert(*head);
                    steps.push(Step::EpsilonProduction(*head));
                    changed = true;
                    break;
                }

                let terminals = production
                    .iter()
                    .filter_map(|symbol| match symbol {
                        ProductionSymbol::Terminal(t) => Some(*t),
                        ProductionSymbol::NonTerminal(_) => None,
                    })
                    .collect::<Vec<Terminal>>();

                if !terminals.is_empty() {
                    trace!("{head} -> {production} is blocked by terminals");
                    steps.push(Step::BlockedByTerminal {
                        head: *head,
                        production: production.clone(),
                        terminals,
                    });
                    continue;
                }

                let missing = production
                    .iter()
                    .filter_map(ProductionSymbol::as_non_terminal)
                    .filter(|nt| !nullable.contains(*nt))
                    .copied()
                    .collect::<Vec<_>>();

                if missing.is_empty() {
                    trace!("{head} -> {production} has only nullable symbols");
                    nullable.insert(*head);
                    steps.push(Step::AllSymbolsNullable {
                        head: *head,
                        production: production.clone(),
                    });
                    changed = true;
                    break;
                }

                steps.push(Step::Pending {
                    head: *head,
                    production: production.clone(),
                    missing,
                });
            }
        }

        debug!("nullable pass {pass}: {} nullable non-terminals", nullable.len());

        if !changed {
            break;
        }
    }

    steps.push(Step::NullableComputed(nullable.clone()));

    (nullable, steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Word;

    fn grammar(rules: &[(char, &str)]) -> ContextFreeGrammar {
        let mut grammar = ContextFreeGrammar::new();
        for (head, body) in rules {
            let body = if *body == "ε" {
                Word::epsilon()
            } else {
                Word::try_from(*body).unwrap()
            };
            grammar.add_production(NonTerminal::new(*head), body);
        }
        grammar
    }

    fn nts(s: &str) -> IndexSet<NonTerminal> {
        s.chars().map(NonTerminal::new).collect()
    }

    #[test]
    fn empty_grammar_has_no_nullable() {
        let (nullable, steps) = compute_nullable(&ContextFreeGrammar::new());

        assert!(nullable.is_empty());
        assert_eq!(
            steps.steps(),
            &[
                Step::NullableStarted,
                Step::PassStarted(1),
                Step::NullableComputed(IndexSet::new()),
            ]
        );
    }

    #[test]
    fn self_dependent_head_is_not_nullable() {
        let grammar = grammar(&[
            ('S', "ASA"),
            ('S', "aB"),
            ('A', "B"),
            ('A', "S"),
            ('B', "b"),
            ('B', "ε"),
        ]);

        let (nullable, _) = compute_nullable(&grammar);

        // S -> ASA needs S itself, and S -> aB has a terminal.
        assert_eq!(nullable, nts("AB"));
    }

    #[test]
    fn terminal_blocks_production() {
        let grammar = grammar(&[('S', "aA"), ('A', "ε")]);

        let (nullable, steps) = compute_nullable(&grammar);

        assert_eq!(nullable, nts("A"));
        assert!(steps.iter().any(|step| matches!(
            step,
            Step::BlockedByTerminal { head, terminals, .. }
                if *head == NonTerminal::new('S') && terminals == &[Terminal::new('a')]
        )));
    }

    #[test]
    fn pending_names_missing_symbols() {
        let grammar = grammar(&[('S', "AB"), ('A', "ε"), ('B', "b")]);

        let (nullable, steps) = compute_nullable(&grammar);

        assert_eq!(nullable, nts("A"));
        assert!(steps.iter().any(|step| matches!(
            step,
            Step::Pending { head, missing, .. }
                if *head == NonTerminal::new('S') && missing == &[NonTerminal::new('A'), NonTerminal::new('B')]
        )));
        assert!(steps.iter().any(|step| matches!(
            step,
            Step::Pending { head, missing, .. }
                if *head == NonTerminal::new('S') && missing == &[NonTerminal::new('B')]
        )));
    }

    #[test]
    fn undefined_non_terminal_is_never_nullable() {
        let grammar = grammar(&[('S', "X")]);

        let (nullable, _) = compute_nullable(&grammar);

        assert!(nullable.is_empty());
    }

    #[test]
    fn passes_until_fixpoint() {
        // Each pass can only discover the next link of the chain.
        let grammar = grammar(&[('S', "A"), ('A', "B"), ('B', "C"), ('C', "ε")]);

        let (nullable, steps) = compute_nullable(&grammar);

        assert_eq!(nullable.len(), 4);
        let passes = steps
            .iter()
            .filter(|step| matches!(step, Step::PassStarted(_)))
            .count();
        assert_eq!(passes, 5);
    }
}
