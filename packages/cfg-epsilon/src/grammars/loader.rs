use std::{path::Path, str::FromStr};

use log::debug;
use winnow::{
    ascii::space0,
    combinator::{alt, delimited, preceded, separated, terminated},
    prelude::*,
    token::{one_of, take_while},
    ModalResult,
};

use crate::{
    error::{Error, Result},
    grammars::{
        context_free::ContextFreeGrammar,
        types::{NonTerminal, ProductionSymbol},
    },
    language::{Word, EPSILON, EPSILON_ALIAS},
};

fn head(input: &mut &str) -> ModalResult<char> {
    delimited(space0, one_of(|c: char| c.is_ascii_uppercase()), space0).parse_next(input)
}

fn arrow(input: &mut &str) -> ModalResult<()> {
    terminated(alt(("->", "→")), space0).void().parse_next(input)
}

fn alternative<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    terminated(
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == 'ε'),
        space0,
    )
    .parse_next(input)
}

fn rule<'s>(input: &mut &'s str) -> ModalResult<(char, Vec<&'s str>)> {
    (
        head,
        preceded(arrow, separated(1.., alternative, ('|', space0))),
    )
        .parse_next(input)
}

fn to_word(alternative: &str, line: usize) -> Result<Word<ProductionSymbol>> {
    if alternative == EPSILON || alternative.eq_ignore_ascii_case(EPSILON_ALIAS) {
        return Ok(Word::epsilon());
    }

    if alternative.contains('ε') {
        return Err(Error::EpsilonNotAlone {
            line,
            alternative: alternative.to_string(),
        });
    }

    Word::try_from(alternative)
}

fn parse_numbered_rule(
    text: &str,
    line: usize,
) -> Result<(NonTerminal, Vec<Word<ProductionSymbol>>)> {
    let (head, alternatives) = rule.parse(text).map_err(|e| Error::Syntax {
        line,
        column: text[..e.offset()].chars().count() + 1,
        text: text.to_string(),
    })?;

    let words = alternatives
        .into_iter()
        .map(|alternative| to_word(alternative, line))
        .collect::<Result<Vec<_>>>()?;

    Ok((NonTerminal::try_from(head)?, words))
}

/// Parses one rule line such as `S -> aSb | ε`.
///
/// The head is a single uppercase letter, the arrow is `->` or `→` and alternatives are separated
/// by `|`. An alternative is a run of letters and digits, or the epsilon marker (`ε` or `eps`)
/// on its own.
pub fn parse_rule(line: &str) -> Result<(NonTerminal, Vec<Word<ProductionSymbol>>)> {
    parse_numbered_rule(line.trim(), 1)
}

impl ContextFreeGrammar {
    /// Reads one rule per line. Blank lines and lines starting with `#` are ignored, repeated
    /// heads merge their alternatives and the head of the first rule is the start symbol.
    pub fn from_source(source: &str) -> Result<Self> {
        let mut grammar = ContextFreeGrammar::new();

        for (idx, raw) in source.lines().enumerate() {
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let (head, words) = parse_numbered_rule(text, idx + 1)?;

            let rhs = grammar.add_head(head);
            rhs.extend(words);
        }

        debug!(
            "loaded grammar with {} heads and {} productions",
            grammar.productions.len(),
            grammar.production_count()
        );

        Ok(grammar)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_source(&source)
    }

    pub fn from_productions(productions: &[impl AsRef<str>]) -> Result<Self> {
        let mut grammar = ContextFreeGrammar::new();

        for (idx, production) in productions.iter().enumerate() {
            let (head, words) = parse_numbered_rule(production.as_ref().trim(), idx + 1)?;
            grammar.add_head(head).extend(words);
        }

        Ok(grammar)
    }
}

impl FromStr for ContextFreeGrammar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_source(s)
    }
}
