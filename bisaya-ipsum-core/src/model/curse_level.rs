use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IpsumError;
use super::weights::WeightTable;

/// How strongly sentence selection skews toward vulgar template families.
///
/// This is a probability skew, not a filter: every family stays reachable
/// unless its weight for the level is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurseLevel {
	Low,
	#[default]
	Medium,
	High,
	Yawa,
}

impl CurseLevel {
	pub const ALL: [CurseLevel; 4] = [CurseLevel::Low, CurseLevel::Medium, CurseLevel::High, CurseLevel::Yawa];

	pub fn as_str(self) -> &'static str {
		match self {
			CurseLevel::Low => "low",
			CurseLevel::Medium => "medium",
			CurseLevel::High => "high",
			CurseLevel::Yawa => "yawa",
		}
	}

	/// Returns the weight table driving family selection at this level.
	pub fn weights(self) -> &'static WeightTable {
		WeightTable::for_level(self)
	}
}

impl fmt::Display for CurseLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for CurseLevel {
	type Err = IpsumError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		CurseLevel::ALL
			.into_iter()
			.find(|level| level.as_str() == s)
			.ok_or_else(|| IpsumError::InvalidOption("Invalid curseLevel. Use: low, medium, high, yawa".to_owned()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_known_levels() {
		assert_eq!("yawa".parse::<CurseLevel>().unwrap(), CurseLevel::Yawa);
		assert_eq!("low".parse::<CurseLevel>().unwrap(), CurseLevel::Low);
	}

	#[test]
	fn rejects_unknown_level() {
		assert!(matches!("extreme".parse::<CurseLevel>(), Err(IpsumError::InvalidOption(_))));
		assert!("YAWA".parse::<CurseLevel>().is_err());
	}

	#[test]
	fn defaults_to_medium() {
		assert_eq!(CurseLevel::default(), CurseLevel::Medium);
	}
}
