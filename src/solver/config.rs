//! Game parameters

use std::fmt;

/// Parameters of one code breaking game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Possible colors as a string of distinct characters, e.g. "RGBY"
    pub colors: String,
    /// Number of pegs in the code
    pub code_length: usize,
    /// Whether a color may appear more than once in the code
    pub allow_duplicates: bool,
}

impl GameConfig {
    #[must_use]
    pub fn new(colors: impl Into<String>, code_length: usize, allow_duplicates: bool) -> Self {
        Self {
            colors: colors.into(),
            code_length,
            allow_duplicates,
        }
    }
}

impl Default for GameConfig {
    /// Classic six colors, four pegs, no duplicates
    fn default() -> Self {
        Self::new("RGBYOP", 4, false)
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} colours ({}), {} pegs, duplicates {}",
            self.colors.chars().count(),
            self.colors,
            self.code_length,
            if self.allow_duplicates {
                "allowed"
            } else {
                "not allowed"
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_game() {
        let config = GameConfig::default();
        assert_eq!(config.colors, "RGBYOP");
        assert_eq!(config.code_length, 4);
        assert!(!config.allow_duplicates);
    }

    #[test]
    fn display_describes_parameters() {
        assert_eq!(
            GameConfig::new("RGBY", 3, true).to_string(),
            "4 colours (RGBY), 3 pegs, duplicates allowed"
        );
        assert_eq!(
            GameConfig::default().to_string(),
            "6 colours (RGBYOP), 4 pegs, duplicates not allowed"
        );
    }
}
