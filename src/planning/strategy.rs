//! Allocation strategies
//!
//! The three policies for splitting a month's money across outstanding items.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How available money is distributed across items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Largest remaining balance first
    #[default]
    Avalanche,
    /// Smallest remaining balance first
    Snowball,
    /// One flat share per item
    Equal,
}

impl Strategy {
    /// Every strategy, in presentation order
    pub const ALL: [Strategy; 3] = [Strategy::Avalanche, Strategy::Snowball, Strategy::Equal];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Avalanche => "Avalanche",
            Self::Snowball => "Snowball",
            Self::Equal => "Equal split",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Avalanche => "Pay off the largest balance first",
            Self::Snowball => "Pay off the smallest balance first",
            Self::Equal => "Split the money evenly across items",
        }
    }

    /// Parse a strategy from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "avalanche" | "largest" => Some(Self::Avalanche),
            "snowball" | "smallest" => Some(Self::Snowball),
            "equal" | "even" | "equal-split" | "equal_split" => Some(Self::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Invalid strategy: '{}'. Valid strategies: avalanche, snowball, equal",
                s
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Strategy::parse("avalanche"), Some(Strategy::Avalanche));
        assert_eq!(Strategy::parse("Snowball"), Some(Strategy::Snowball));
        assert_eq!(Strategy::parse(" even "), Some(Strategy::Equal));
        assert_eq!(Strategy::parse("largest"), Some(Strategy::Avalanche));
        assert_eq!(Strategy::parse("random"), None);
    }

    #[test]
    fn test_from_str_error_lists_valid_values() {
        let err = "nope".parse::<Strategy>().unwrap_err();
        assert!(err.contains("avalanche, snowball, equal"));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Strategy::Equal).unwrap(),
            "\"equal\""
        );
        let parsed: Strategy = serde_json::from_str("\"snowball\"").unwrap();
        assert_eq!(parsed, Strategy::Snowball);
    }

    #[test]
    fn test_default_is_avalanche() {
        assert_eq!(Strategy::default(), Strategy::Avalanche);
    }
}
