use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use tabled::{builder::Builder, settings::Style};

use crate::{
    grammars::types::{NonTerminal, ProductionSymbol, Terminal},
    language::Word,
};

/// A context-free grammar over single-character symbols.
///
/// Productions are grouped by head; the empty word is the epsilon production. The start symbol is
/// kept as its own field and is never derived from the iteration order of `productions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextFreeGrammar {
    pub(super) start_symbol: Option<NonTerminal>,
    pub(super) productions: IndexMap<NonTerminal, IndexSet<Word<ProductionSymbol>>>,
}

impl ContextFreeGrammar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_symbol(start_symbol: NonTerminal) -> Self {
        Self {
            start_symbol: Some(start_symbol),
            productions: IndexMap::new(),
        }
    }

    pub fn start_symbol(&self) -> Option<&NonTerminal> {
        self.start_symbol.as_ref()
    }

    pub fn productions(&self) -> &IndexMap<NonTerminal, IndexSet<Word<ProductionSymbol>>> {
        &self.productions
    }

    pub fn productions_of(&self, head: &NonTerminal) -> Option<&IndexSet<Word<ProductionSymbol>>> {
        self.productions.get(head)
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// Registers `head` without adding any production to it. The first head ever registered
    /// becomes the start symbol unless one was set explicitly.
    pub fn add_head(&mut self, head: NonTerminal) -> &mut IndexSet<Word<ProductionSymbol>> {
        self.start_symbol.get_or_insert(head);
        self.productions.entry(head).or_default()
    }

    /// Returns `false` if the production was already present.
    pub fn add_production(&mut self, head: NonTerminal, body: Word<ProductionSymbol>) -> bool {
        self.add_head(head).insert(body)
    }

    /// Every non-terminal that appears in the grammar, heads first in insertion order.
    pub fn non_terminals(&self) -> IndexSet<NonTerminal> {
        let mut non_terminals = self.productions.keys().copied().collect::<IndexSet<_>>();

        non_terminals.extend(
            self.productions
                .values()
                .flatten()
                .flatten()
                .filter_map(ProductionSymbol::as_non_terminal)
                .copied(),
        );

        non_terminals
    }

    pub fn terminals(&self) -> IndexSet<Terminal> {
        self.productions
            .values()
            .flatten()
            .flatten()
            .filter_map(|symbol| match symbol {
                ProductionSymbol::Terminal(t) => Some(*t),
                ProductionSymbol::NonTerminal(_) => None,
            })
            .collect()
    }

    /// Heads that own an epsilon production.
    pub fn epsilon_heads(&self) -> IndexSet<NonTerminal> {
        self.productions
            .iter()
            .filter(|(_, rhs)| rhs.iter().any(Word::is_epsilon))
            .map(|(lhs, _)| *lhs)
            .collect()
    }

    pub fn production_count(&self) -> usize {
        self.productions.values().map(IndexSet::len).sum()
    }

    /// Formal `G = (N, T, P, S)` rendering with the start symbol listed first.
    pub fn definition(&self) -> String {
        let start_symbol = self.start_symbol.as_ref();

        let mut non_terminals = self.non_terminals();
        non_terminals.sort_by(|a, b| {
            if Some(a) == start_symbol {
                return std::cmp::Ordering::Less;
            }
            if Some(b) == start_symbol {
                return std::cmp::Ordering::Greater;
            }
            a.cmp(b)
        });

        let mut terminals = self.terminals();
        terminals.sort();

        let mut definition = format!(
            "G = ({{{}}}, {{{}}}, P, {})\n\n",
            non_terminals.iter().join(", "),
            terminals.iter().join(", "),
            start_symbol.map_or_else(|| "∅".to_string(), ToString::to_string)
        );

        definition += "P = {\n";

        for (lhs, rhs) in self.productions.iter().sorted_by(|(a, _), (b, _)| {
            (Some(*a) != start_symbol)
                .cmp(&(Some(*b) != start_symbol))
                .then_with(|| a.cmp(b))
        }) {
            definition += &format!("  {} → {}\n", lhs, alternatives(rhs));
        }

        definition += "}\n";

        definition
    }

    pub fn productions_table(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(["Head", "Productions"]);
        for (lhs, rhs) in &self.productions {
            builder.push_record([lhs.to_string(), alternatives(rhs)]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());

        table.to_string()
    }
}

fn alternatives(rhs: &IndexSet<Word<ProductionSymbol>>) -> String {
    if rhs.is_empty() {
        "∅".to_string()
    } else {
        rhs.iter().join(" | ")
    }
}

impl std::fmt::Display for ContextFreeGrammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (lhs, rhs) in &self.productions {
            writeln!(f, "{} -> {}", lhs, alternatives(rhs))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word<ProductionSymbol> {
        Word::try_from(s).unwrap()
    }

    #[test]
    fn first_head_becomes_start_symbol() {
        let mut grammar = ContextFreeGrammar::new();
        grammar.add_production(NonTerminal::new('B'), word("b"));
        grammar.add_production(NonTerminal::new('A'), word("aB"));

        assert_eq!(grammar.start_symbol(), Some(&NonTerminal::new('B')));
    }

    #[test]
    fn explicit_start_symbol_is_kept() {
        let mut grammar = ContextFreeGrammar::with_start_symbol(NonTerminal::new('S'));
        grammar.add_production(NonTerminal::new('A'), word("a"));

        assert_eq!(grammar.start_symbol(), Some(&NonTerminal::new('S')));
    }

    #[test]
    fn duplicate_productions_collapse() {
        let mut grammar = ContextFreeGrammar::new();

        assert!(grammar.add_production(NonTerminal::new('S'), word("aS")));
        assert!(!grammar.add_production(NonTerminal::new('S'), word("aS")));
        assert!(grammar.add_production(NonTerminal::new('S'), Word::epsilon()));
        assert_eq!(grammar.production_count(), 2);
        assert_eq!(grammar.epsilon_heads(), IndexSet::from([NonTerminal::new('S')]));
    }

    #[test]
    fn collects_symbols() {
        let mut grammar = ContextFreeGrammar::new();
        grammar.add_production(NonTerminal::new('S'), word("aB1"));

        assert_eq!(
            grammar.non_terminals(),
            IndexSet::from([NonTerminal::new('S'), NonTerminal::new('B')])
        );
        assert_eq!(
            grammar.terminals(),
            IndexSet::from([Terminal::new('a'), Terminal::new('1')])
        );
    }

    #[test]
    fn definition_lists_start_symbol_first() {
        let mut grammar = ContextFreeGrammar::new();
        grammar.add_production(NonTerminal::new('S'), word("aA"));
        grammar.add_production(NonTerminal::new('S'), word("b"));
        grammar.add_production(NonTerminal::new('A'), Word::epsilon());
        grammar.add_head(NonTerminal::new('C'));

        assert_eq!(
            grammar.definition(),
            "G = ({S, A, C}, {a, b}, P, S)\n\nP = {\n  S → aA | b\n  A → ε\n  C → ∅\n}\n"
        );
    }

    #[test]
    fn display_one_line_per_head() {
        let mut grammar = ContextFreeGrammar::new();
        grammar.add_production(NonTerminal::new('S'), word("aA"));
        grammar.add_production(NonTerminal::new('A'), Word::epsilon());

        assert_eq!(grammar.to_string(), "S -> aA\nA -> ε\n");
    }

    #[test]
    fn table_contains_every_head() {
        let mut grammar = ContextFreeGrammar::new();
        grammar.add_production(NonTerminal::new('S'), word("aA"));
        grammar.add_production(NonTerminal::new('A'), word("b"));

        let table = grammar.productions_table();

        assert!(table.contains("Head"));
        assert!(table.contains("aA"));
        assert!(table.contains('b'));
    }
}
