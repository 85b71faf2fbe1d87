use indexmap::IndexSet;
use itertools::Itertools;
use log::{debug, trace};

use crate::{
    grammars::{
        context_free::ContextFreeGrammar, nullable::compute_nullable, types::NonTerminal,
    },
    language::Word,
    trace::{Step, Trace},
};

/// What to do with an empty production that subset enumeration produces for a head.
///
/// Only the start symbol ever receives the explicit `S → ε` added after enumeration; this
/// setting concerns the ε that appears when deleting every nullable symbol of a production
/// leaves nothing behind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SynthesizedEpsilon {
    /// Keep it, under any head.
    #[default]
    Keep,
    /// Discard it, so the start symbol is the only head that can end up with ε.
    Drop,
}

/// Builds an equivalent grammar without epsilon productions, keeping `start_symbol → ε` when
/// the start symbol is nullable. The input grammar is left untouched.
pub fn eliminate_epsilon(
    grammar: &ContextFreeGrammar,
    start_symbol: &NonTerminal,
) -> (ContextFreeGrammar, Trace) {
    eliminate_epsilon_with(grammar, start_symbol, SynthesizedEpsilon::Keep)
}

pub fn eliminate_epsilon_with(
    grammar: &ContextFreeGrammar,
    start_symbol: &NonTerminal,
    synthesized_epsilon: SynthesizedEpsilon,
) -> (ContextFreeGrammar, Trace) {
    let mut steps = Trace::new();
    steps.push(Step::EliminationStarted);

    let (nullable, nullable_steps) = compute_nullable(grammar);
    steps.append(nullable_steps);

    let mut epsilon_free = ContextFreeGrammar::with_start_symbol(*start_symbol);
    for head in grammar.productions().keys() {
        epsilon_free.add_head(*head);
    }

    for (head, rhs) in grammar.productions() {
        steps.push(Step::HeadStarted(*head));

        for production in rhs {
            if production.is_epsilon() {
                steps.push(Step::EpsilonSkipped(*head));
                continue;
            }

            steps.push(Step::ProductionStarted {
                head: *head,
                production: production.clone(),
            });

            let positions = production
                .iter()
                .positions(|symbol| {
                    symbol
                        .as_non_terminal()
                        .is_some_and(|nt| nullable.contains(nt))
                })
                .collect::<Vec<_>>();

            if positions.is_empty() {
                steps.push(Step::NoNullablePositions {
                    head: *head,
                    production: production.clone(),
                });
                epsilon_free.add_production(*head, production.clone());
                continue;
            }

            steps.push(Step::NullablePositions {
                symbols: positions
                    .iter()
                    .filter_map(|&i| production.0[i].as_non_terminal())
                    .copied()
                    .collect(),
                positions: positions.clone(),
            });
            steps.push(Step::VariantCount {
                variants: 1 << positions.len(),
                exponent: positions.len(),
            });

            for removed in positions.iter().copied().powerset() {
                let variant = production
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !removed.contains(i))
                    .map(|(_, symbol)| *symbol)
                    .collect::<Word<_>>();

                if variant.is_epsilon() && synthesized_epsilon == SynthesizedEpsilon::Drop {
                    trace!("dropping synthesized ε for {head}");
                    steps.push(Step::SynthesizedEpsilonDropped {
                        head: *head,
                        removed,
                    });
                    continue;
                }

                trace!("{head} -> {production} without {removed:?} gives {variant}");
                epsilon_free.add_production(*head, variant.clone());
                steps.push(Step::Variant {
                    removed,
                    production: variant,
                });
            }
        }
    }

    if nullable.contains(start_symbol) {
        steps.push(Step::StartSymbolNullable(*start_symbol));
        epsilon_free.add_production(*start_symbol, Word::epsilon());
    } else {
        steps.push(Step::StartSymbolNotNullable(*start_symbol));
    }

    steps.push(Step::EliminationFinished);

    debug!(
        "eliminated ε-productions: {} productions before, {} after",
        grammar.production_count(),
        epsilon_free.production_count()
    );

    (epsilon_free, steps)
}

impl ContextFreeGrammar {
    /// Runs [`eliminate_epsilon`] with the grammar's own start symbol. A grammar without any
    /// rule has no start symbol and yields another empty grammar.
    pub fn without_epsilon_productions(&self) -> (ContextFreeGrammar, Trace) {
        self.without_epsilon_productions_with(SynthesizedEpsilon::Keep)
    }

    pub fn without_epsilon_productions_with(
        &self,
        synthesized_epsilon: SynthesizedEpsilon,
    ) -> (ContextFreeGrammar, Trace) {
        match &self.start_symbol {
            Some(start_symbol) => eliminate_epsilon_with(self, start_symbol, synthesized_epsilon),
            None => {
                let mut steps = Trace::new();
                steps.push(Step::EliminationStarted);
                steps.append(compute_nullable(self).1);
                steps.push(Step::EliminationFinished);

                (ContextFreeGrammar::new(), steps)
            }
        }
    }

    pub fn nullable(&self) -> IndexSet<NonTerminal> {
        compute_nullable(self).0
    }
}
