//! file: country.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:05:19 Saturday
//! brief:

/// Placeholder capital for records the directory has no capital for.
pub const UNKNOWN_CAPITAL: &str = "N/A";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    pub capital: String,
}

impl Country {
    pub fn new(name: impl Into<String>, capital: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capital: capital.into(),
        }
    }

    /// A country without a known capital cannot be put on the board.
    pub fn is_quizzable(&self) -> bool {
        !self.capital.is_empty() && self.capital != UNKNOWN_CAPITAL
    }
}
