use derive_more::{Display, From};

use crate::{
    error::{Error, Result},
    language::{Symbol, Word},
};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Terminal(pub Symbol);

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonTerminal(pub Symbol);

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From)]
pub enum ProductionSymbol {
    Terminal(Terminal),
    NonTerminal(NonTerminal),
}

impl Terminal {
    pub fn new(c: char) -> Self {
        Terminal(Symbol::new(c))
    }
}

impl NonTerminal {
    pub fn new(c: char) -> Self {
        NonTerminal(Symbol::new(c))
    }
}

impl ProductionSymbol {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProductionSymbol::Terminal(_))
    }

    pub fn as_non_terminal(&self) -> Option<&NonTerminal> {
        match self {
            ProductionSymbol::NonTerminal(nt) => Some(nt),
            ProductionSymbol::Terminal(_) => None,
        }
    }
}

/// Uppercase ASCII letters are non-terminals; lowercase ASCII letters and digits are terminals.
impl TryFrom<char> for ProductionSymbol {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        if c.is_ascii_uppercase() {
            Ok(ProductionSymbol::NonTerminal(NonTerminal::new(c)))
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            Ok(ProductionSymbol::Terminal(Terminal::new(c)))
        } else {
            Err(Error::InvalidSymbol(c))
        }
    }
}

impl TryFrom<char> for NonTerminal {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match ProductionSymbol::try_from(c)? {
            ProductionSymbol::NonTerminal(nt) => Ok(nt),
            ProductionSymbol::Terminal(_) => Err(Error::ExpectedNonTerminal(c)),
        }
    }
}

impl TryFrom<&str> for Word<ProductionSymbol> {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.chars().map(ProductionSymbol::try_from).collect()
    }
}
