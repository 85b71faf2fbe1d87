//! Ordered, human-readable record of the decisions taken while computing the nullable set and
//! eliminating epsilon productions. Steps never influence the computed results.

use indexmap::IndexSet;
use itertools::Itertools;

use crate::{
    grammars::types::{NonTerminal, ProductionSymbol, Terminal},
    language::{Word, EPSILON},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    NullableStarted,
    PassStarted(usize),
    AlreadyNullable(NonTerminal),
    EpsilonProduction(NonTerminal),
    AllSymbolsNullable {
        head: NonTerminal,
        production: Word<ProductionSymbol>,
    },
    BlockedByTerminal {
        head: NonTerminal,
        production: Word<ProductionSymbol>,
        terminals: Vec<Terminal>,
    },
    Pending {
        head: NonTerminal,
        production: Word<ProductionSymbol>,
        missing: Vec<NonTerminal>,
    },
    NullableComputed(IndexSet<NonTerminal>),

    EliminationStarted,
    HeadStarted(NonTerminal),
    ProductionStarted {
        head: NonTerminal,
        production: Word<ProductionSymbol>,
    },
    EpsilonSkipped(NonTerminal),
    NoNullablePositions {
        head: NonTerminal,
        production: Word<ProductionSymbol>,
    },
    NullablePositions {
        positions: Vec<usize>,
        symbols: Vec<NonTerminal>,
    },
    VariantCount {
        variants: usize,
        exponent: usize,
    },
    Variant {
        removed: Vec<usize>,
        production: Word<ProductionSymbol>,
    },
    SynthesizedEpsilonDropped {
        head: NonTerminal,
        removed: Vec<usize>,
    },
    StartSymbolNullable(NonTerminal),
    StartSymbolNotNullable(NonTerminal),
    EliminationFinished,
}

fn set(symbols: impl IntoIterator<Item = impl std::fmt::Display>) -> String {
    let symbols = symbols.into_iter().join(", ");
    if symbols.is_empty() {
        "∅".to_string()
    } else {
        format!("{{{symbols}}}")
    }
}

fn list(items: impl IntoIterator<Item = impl std::fmt::Display>) -> String {
    format!("[{}]", items.into_iter().join(", "))
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::NullableStarted => write!(f, "start: nullable = ∅"),
            Step::PassStarted(pass) => write!(f, "-- pass {pass} --"),
            Step::AlreadyNullable(head) => write!(f, "  {head} is already nullable; skipped"),
            Step::EpsilonProduction(head) => {
                write!(f, "  {head} -> {EPSILON}  => add {head} to nullable")
            }
            Step::AllSymbolsNullable { head, production } => write!(
                f,
                "  {head} -> {production}: all symbols ({}) are nullable => add {head}",
                production.iter().join(",")
            ),
            Step::BlockedByTerminal {
                head,
                production,
                terminals,
            } => write!(
                f,
                "  {head} -> {production}: contains terminal(s) {} => not nullable through this production",
                list(terminals)
            ),
            Step::Pending {
                head,
                production,
                missing,
            } => write!(
                f,
                "  {head} -> {production}: symbols not nullable yet {} => {head} not added",
                list(missing)
            ),
            Step::NullableComputed(nullable) => {
                write!(f, "result: nullable = {}", set(nullable.iter().sorted()))
            }

            Step::EliminationStarted => write!(f, "== epsilon-production elimination =="),
            Step::HeadStarted(head) => write!(f, "processing {head}:"),
            Step::ProductionStarted { head, production } => {
                write!(f, "  - production: {head} -> {production}")
            }
            Step::EpsilonSkipped(head) => write!(
                f,
                "    {head} -> {EPSILON} is not copied; only the start symbol may keep {EPSILON}"
            ),
            Step::NoNullablePositions { .. } => {
                write!(f, "    no nullable symbols => production kept as is")
            }
            Step::NullablePositions { positions, symbols } => write!(
                f,
                "    nullable symbols at positions {} (symbols: {})",
                list(positions),
                list(symbols)
            ),
            Step::VariantCount { variants, exponent } => write!(
                f,
                "    {variants} = 2^{exponent} variants will be generated (including removing none)"
            ),
            Step::Variant {
                removed,
                production,
            } => {
                if production.is_epsilon() {
                    write!(
                        f,
                        "      remove positions {} -> empty production '{EPSILON}'",
                        list(removed)
                    )
                } else {
                    write!(
                        f,
                        "      remove positions {} -> new production '{production}'",
                        list(removed)
                    )
                }
            }
            Step::SynthesizedEpsilonDropped { head, removed } => write!(
                f,
                "      remove positions {} -> empty production dropped for {head}",
                list(removed)
            ),
            Step::StartSymbolNullable(start) => write!(
                f,
                "start symbol '{start}' is nullable => keep {start} -> {EPSILON}"
            ),
            Step::StartSymbolNotNullable(start) => write!(
                f,
                "start symbol '{start}' is NOT nullable => no {EPSILON} added"
            ),
            Step::EliminationFinished => write!(f, "== end of epsilon elimination =="),
        }
    }
}

/// Created fresh per computation and handed over to the caller once complete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace(Vec<Step>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: Step) {
        self.0.push(step);
    }

    pub fn append(&mut self, other: Trace) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.0.iter()
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for step in &self.0 {
            writeln!(f, "{step}")?;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Trace {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
