pub use crate::grammars::{
    context_free::ContextFreeGrammar,
    epsilon_free::{eliminate_epsilon, eliminate_epsilon_with, SynthesizedEpsilon},
    loader::parse_rule,
    nullable::compute_nullable,
    types::{NonTerminal, ProductionSymbol, Terminal},
};
