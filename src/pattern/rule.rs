//! Pattern rule vocabulary for plot id classification

use crate::pattern::classifier;

/// Named predicate classes over a plot id's decimal digit string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternRule {
    /// Every id matches (identity filter)
    All,
    /// Digit string equals its own reversal (12321, 1221)
    Palindrome,
    /// Every digit is identical (111, 2222)
    Repeating,
    /// At least two trailing zeros (100, 5000, 20000)
    Round,
    /// First half equals the reversed second half, middle digit dropped (456654)
    Mirror,
    /// Even length and the first half equals the second half literally (1212, 123123)
    Combination,
    /// Wildcard pattern where `*` stands for exactly one digit (1*1*1)
    ///
    /// An empty pattern, or any character other than a digit or `*`,
    /// makes the rule match nothing.
    Custom(String),
}

impl PatternRule {
    /// Test a plot id against this rule
    pub fn matches(&self, id: u64) -> bool {
        classifier::matches(id, self)
    }

    /// Short rule label for display output
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Palindrome => "palindrome",
            Self::Repeating => "repeating",
            Self::Round => "round",
            Self::Mirror => "mirror",
            Self::Combination => "combination",
            Self::Custom(_) => "custom",
        }
    }
}
