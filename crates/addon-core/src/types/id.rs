//! Newtype wrapper for the integer identifiers the host uses to address
//! menu entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a menu entry.
///
/// The host addresses every menu entry by a plain integer. Wrapping it
/// keeps menu ids from being confused with exit codes or sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(pub i32);

impl MenuId {
    /// Return the raw integer value handed to the host.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MenuId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i32>().map(Self)
    }
}

impl From<i32> for MenuId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<MenuId> for i32 {
    fn from(id: MenuId) -> i32 {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let id: MenuId = " 9090 ".parse().expect("parse");
        assert_eq!(id, MenuId(9090));
        assert_eq!(id.to_string(), "9090");
        assert!("run".parse::<MenuId>().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&MenuId(401)).expect("serialize");
        assert_eq!(json, "401");
    }
}
