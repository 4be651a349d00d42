// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// The mark a player has placed in a board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Nothing has been placed.
    #[default]
    Blank,
    /// The cell is filled in.
    Filled,
    /// The cell is crossed out (known to be empty).
    Crossed,
}

impl Symbol {
    /// Returns the symbol that a click on a cell holding `self` paints.
    ///
    /// The cycle is `Blank → Filled → Crossed → Blank`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Blank => Self::Filled,
            Self::Filled => Self::Crossed,
            Self::Crossed => Self::Blank,
        }
    }

    /// Single-character form used by [`crate::Grid`]'s `Display` output.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Blank => ' ',
            Self::Filled => '.',
            Self::Crossed => 'x',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Symbol;

    #[test]
    fn next_cycles_through_all_symbols() {
        assert_eq!(Symbol::Blank.next(), Symbol::Filled);
        assert_eq!(Symbol::Filled.next(), Symbol::Crossed);
        assert_eq!(Symbol::Crossed.next(), Symbol::Blank);
        assert_eq!(Symbol::default(), Symbol::Blank);
    }
}
