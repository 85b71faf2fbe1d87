use derive_more::Display;

pub const EPSILON: &str = "ε";

/// Spelling of the epsilon marker that can be typed without `ε`. Matched case-insensitively.
pub const EPSILON_ALIAS: &str = "eps";

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(char);

impl Symbol {
    pub fn new(c: char) -> Self {
        Symbol(c)
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol(c)
    }
}

/// A finite sequence of symbols. The empty word is ε.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word<S>(pub Vec<S>);

impl<S> Word<S> {
    pub fn new(symbols: impl IntoIterator<Item = S>) -> Self {
        Word(symbols.into_iter().collect())
    }

    pub fn epsilon() -> Self {
        Word(Vec::new())
    }

    pub fn is_epsilon(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.0.iter()
    }
}

impl<S: std::fmt::Display> std::fmt::Display for Word<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "{EPSILON}");
        }

        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }

        Ok(())
    }
}

impl<S> FromIterator<S> for Word<S> {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Word(iter.into_iter().collect())
    }
}

impl<'a, S> IntoIterator for &'a Word<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
