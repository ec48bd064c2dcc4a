//! Impact value object: the preferred direction of a criterion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether higher (`Benefit`) or lower (`Cost`) raw values are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    Benefit,
    Cost,
}

impl Impact {
    /// Parses a `+` / `-` symbol. Returns `None` for anything else.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Impact::Benefit),
            "-" => Some(Impact::Cost),
            _ => None,
        }
    }

    /// Returns the symbol used on the command line.
    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Benefit => "+",
            Impact::Cost => "-",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Impact::Benefit => "Benefit",
            Impact::Cost => "Cost",
        }
    }

    /// Returns the opposite direction.
    pub fn flipped(&self) -> Self {
        match self {
            Impact::Benefit => Impact::Cost,
            Impact::Cost => Impact::Benefit,
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_symbol_accepts_plus_and_minus() {
        assert_eq!(Impact::from_symbol("+"), Some(Impact::Benefit));
        assert_eq!(Impact::from_symbol("-"), Some(Impact::Cost));
    }

    #[test]
    fn from_symbol_rejects_other_values() {
        assert_eq!(Impact::from_symbol(""), None);
        assert_eq!(Impact::from_symbol("*"), None);
        assert_eq!(Impact::from_symbol("++"), None);
        assert_eq!(Impact::from_symbol("Benefit"), None);
    }

    #[test]
    fn symbol_round_trips() {
        for impact in [Impact::Benefit, Impact::Cost] {
            assert_eq!(Impact::from_symbol(impact.symbol()), Some(impact));
        }
    }

    #[test]
    fn flipped_swaps_direction() {
        assert_eq!(Impact::Benefit.flipped(), Impact::Cost);
        assert_eq!(Impact::Cost.flipped(), Impact::Benefit);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Impact::Cost.to_string(), "Cost");
    }
}
