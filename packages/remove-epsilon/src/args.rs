use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Removes ε-productions from a grammar file, printing every step taken
pub struct Options {
    /// Grammar file, one rule per line (e.g. `S -> aSb | ε`)
    #[arg(default_value = "grammar.txt")]
    pub grammar: PathBuf,

    /// Drop ε-productions produced for heads other than the start symbol
    #[arg(long)]
    pub strict: bool,

    /// Do not print the step trace
    #[arg(short, long)]
    pub quiet: bool,

    /// Print grammars as tables instead of formal definitions
    #[arg(long)]
    pub table: bool,
}
