use regex::Regex;
use std::sync::LazyLock;

/// Pre-compiled regex patterns for episode label parsing
pub struct Patterns {
    /// Leading maximal run of decimal digits
    pub leading_digits: Regex,
    /// Underscore immediately followed by digits, e.g. "_1"
    pub numeric_suffix: Regex,
}

impl Patterns {
    pub fn new() -> Self {
        Self {
            leading_digits: Regex::new(r"^(\d+)").expect("Invalid leading_digits regex"),
            numeric_suffix: Regex::new(r"_(\d+)").expect("Invalid numeric_suffix regex"),
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Global singleton for patterns
pub static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::new);
