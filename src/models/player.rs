use super::constants::{COMPUTER_NAME, COMPUTER_SYMBOL, HUMAN_SYMBOL};

/// A participant in a round, identified by name and board symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    symbol: char,
}

impl Player {
    /// The human player, who always plays `X`.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: HUMAN_SYMBOL,
        }
    }

    /// The computer opponent, who always plays `O`.
    pub fn computer() -> Self {
        Self {
            name: COMPUTER_NAME.to_string(),
            symbol: COMPUTER_SYMBOL,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_plays_x() {
        let p = Player::human("Alice");
        assert_eq!(p.name(), "Alice");
        assert_eq!(p.symbol(), 'X');
    }

    #[test]
    fn computer_has_fixed_identity() {
        let p = Player::computer();
        assert_eq!(p.name(), "Computer");
        assert_eq!(p.symbol(), 'O');
    }

    #[test]
    fn empty_name_is_allowed() {
        assert_eq!(Player::human("").name(), "");
    }
}
