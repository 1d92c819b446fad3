use serde::Serialize;
use std::{collections::BTreeSet, fmt, str::FromStr};

/// Set of input symbols a DFA is built over. Iteration is in ascending order, which fixes the
/// order of transition signatures during minimization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Alphabet(BTreeSet<char>);

impl Alphabet {
    /// Collects the ASCII alphanumeric characters appearing in `pattern`.
    pub fn from_pattern(pattern: &str) -> Self {
        pattern.chars().collect()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.0.contains(&symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Keeps only ASCII alphanumeric characters, the only valid symbols.
impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect(),
        )
    }
}

/// A character that cannot be an input symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSymbol {
    pub symbol: char,
    /// Start and end position of the character in the parsed string.
    pub pos: (usize, usize),
}

impl fmt::Display for InvalidSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ERROR] ({}, {}): `{}` is not an alphanumeric symbol",
            self.pos.0, self.pos.1, self.symbol
        )
    }
}

impl std::error::Error for InvalidSymbol {}

/// Parses a string of symbols such as `"abc"`. Any character that is not ASCII alphanumeric is
/// rejected.
impl FromStr for Alphabet {
    type Err = InvalidSymbol;

    fn from_str(symbols: &str) -> Result<Self, Self::Err> {
        if let Some((pos, symbol)) = symbols
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphanumeric())
        {
            return Err(InvalidSymbol {
                symbol,
                pos: (pos, pos + 1),
            });
        }

        Ok(symbols.chars().collect())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().map(String::from).collect::<Vec<_>>().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, InvalidSymbol};

    #[test]
    fn from_pattern() {
        let alphabet = Alphabet::from_pattern("(k+kkg+kk)*h*+kh*+kkh");
        assert_eq!(alphabet.iter().collect::<String>(), "ghk");
        assert_eq!(alphabet.to_string(), "{g,h,k}");
        assert!(!alphabet.contains('+'));
    }

    #[test]
    fn only_alphanumeric_symbols() {
        let collected: Alphabet = "a, b+".chars().collect();
        assert_eq!(collected.to_string(), "{a,b}");

        assert_eq!("cab".parse::<Alphabet>().unwrap().to_string(), "{a,b,c}");
        assert_eq!(
            "a, b".parse::<Alphabet>(),
            Err(InvalidSymbol {
                symbol: ',',
                pos: (1, 2),
            })
        );
        assert_eq!(
            "a b".parse::<Alphabet>().unwrap_err().to_string(),
            "[ERROR] (1, 2): ` ` is not an alphanumeric symbol"
        );
    }
}
