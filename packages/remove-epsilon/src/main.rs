use anyhow::{Context, Result};
use cfg_epsilon::grammar::{ContextFreeGrammar, SynthesizedEpsilon};
use clap::Parser;
use log::info;

mod args;

use args::Options;

fn print_grammar(grammar: &ContextFreeGrammar, title: &str, table: bool) {
    println!("=== {title} ===");
    if table {
        println!("{}", grammar.productions_table());
    } else {
        print!("{}", grammar.definition());
    }
    println!();
}

fn main() -> Result<()> {
    env_logger::init();

    let options = Options::parse();

    let grammar = ContextFreeGrammar::load(&options.grammar)
        .with_context(|| format!("failed to load grammar '{}'", options.grammar.display()))?;

    info!(
        "loaded {} productions from {}",
        grammar.production_count(),
        options.grammar.display()
    );

    print_grammar(&grammar, "Original grammar", options.table);

    let synthesized_epsilon = if options.strict {
        SynthesizedEpsilon::Drop
    } else {
        SynthesizedEpsilon::Keep
    };
    let (epsilon_free, steps) = grammar.without_epsilon_productions_with(synthesized_epsilon);

    if !options.quiet {
        println!("########### Steps ###########");
        print!("{steps}");
        println!("#############################");
        println!();
    }

    print_grammar(&epsilon_free, "Grammar without ε-productions", options.table);

    Ok(())
}
