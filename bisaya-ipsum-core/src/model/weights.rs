use rand::Rng;

use super::curse_level::CurseLevel;
use super::template::TemplateFamily;
use super::template::TemplateFamily::*;

/// Family returned whenever the weighted walk selects nothing.
pub const DEFAULT_FAMILY: TemplateFamily = TemplateFamily::Basic;

/// Selection weights of every template family for one curse level.
///
/// ## Invariants
/// - One entry per family, in `TemplateFamily::ALL` order
/// - At least one weight is strictly positive
#[derive(Debug)]
pub struct WeightTable {
	entries: [(TemplateFamily, u32); TemplateFamily::COUNT],
}

static LOW: WeightTable = WeightTable {
	entries: [
		(Basic, 18), (Time, 12), (Adjective, 12), (Exclamation, 8), (Question, 8),
		(Negative, 6), (Future, 8), (Curse, 2), (Compound, 6), (Casual, 6),
		(Reaction, 4), (Location, 6), (Comparison, 3), (Story, 3), (Meme, 4),
		(Object, 10), (Reason, 6), (Connector, 6), (Intensifier, 4), (CurseAdj, 1),
		(ObjectQ, 6), (FutureTime, 8), (NegativeConn, 5),
	],
};

static MEDIUM: WeightTable = WeightTable {
	entries: [
		(Basic, 14), (Time, 10), (Adjective, 10), (Exclamation, 8), (Question, 6),
		(Negative, 6), (Future, 6), (Curse, 10), (Compound, 6), (Casual, 8),
		(Reaction, 4), (Location, 5), (Comparison, 3), (Story, 3), (Meme, 6),
		(Object, 8), (Reason, 6), (Connector, 6), (Intensifier, 5), (CurseAdj, 6),
		(ObjectQ, 5), (FutureTime, 6), (NegativeConn, 5),
	],
};

static HIGH: WeightTable = WeightTable {
	entries: [
		(Basic, 4), (Time, 2), (Adjective, 3), (Exclamation, 5), (Question, 2),
		(Negative, 3), (Future, 2), (Curse, 28), (Compound, 2), (Casual, 15),
		(Reaction, 5), (Location, 1), (Comparison, 1), (Story, 2), (Meme, 18),
		(Object, 2), (Reason, 3), (Connector, 2), (Intensifier, 8), (CurseAdj, 20),
		(ObjectQ, 1), (FutureTime, 2), (NegativeConn, 2),
	],
};

static YAWA: WeightTable = WeightTable {
	entries: [
		(Basic, 1), (Time, 1), (Adjective, 1), (Exclamation, 3), (Question, 1),
		(Negative, 2), (Future, 1), (Curse, 35), (Compound, 1), (Casual, 18),
		(Reaction, 5), (Location, 0), (Comparison, 0), (Story, 1), (Meme, 25),
		(Object, 1), (Reason, 2), (Connector, 1), (Intensifier, 10), (CurseAdj, 28),
		(ObjectQ, 0), (FutureTime, 1), (NegativeConn, 1),
	],
};

impl WeightTable {
	/// Returns the fixed table of a curse level.
	pub fn for_level(level: CurseLevel) -> &'static WeightTable {
		match level {
			CurseLevel::Low => &LOW,
			CurseLevel::Medium => &MEDIUM,
			CurseLevel::High => &HIGH,
			CurseLevel::Yawa => &YAWA,
		}
	}

	/// Iterates over `(family, weight)` pairs in walk order.
	pub fn entries(&self) -> impl Iterator<Item = (TemplateFamily, u32)> + '_ {
		self.entries.iter().copied()
	}

	/// Weight of one family.
	pub fn weight(&self, family: TemplateFamily) -> u32 {
		self.entries().find(|(f, _)| *f == family).map_or(0, |(_, weight)| weight)
	}

	/// Sum of every weight.
	pub fn total(&self) -> u32 {
		self.entries().map(|(_, weight)| weight).sum()
	}

	/// Picks a family with probability proportional to its weight.
	///
	/// Draws `r` uniformly in `[0, total)` then subtracts each weight in
	/// walk order, returning the first family where `r` drops to zero or
	/// below. Falls back to `DEFAULT_FAMILY` if nothing is selected.
	pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> TemplateFamily {
		let total = self.total();
		if total == 0 {
			log::warn!("weight table sums to zero, using {DEFAULT_FAMILY}");
			return DEFAULT_FAMILY;
		}

		let mut r: f64 = rng.random_range(0.0..f64::from(total));
		for (family, weight) in self.entries() {
			r -= f64::from(weight);
			if r <= 0.0 {
				return family;
			}
		}

		log::debug!("weighted walk selected nothing, using {DEFAULT_FAMILY}");
		DEFAULT_FAMILY
	}

	/// Picks a family for a curse level given by name.
	///
	/// Unknown level names select `DEFAULT_FAMILY` instead of failing.
	pub fn select_by_name<R: Rng + ?Sized>(level: &str, rng: &mut R) -> TemplateFamily {
		match level.parse::<CurseLevel>() {
			Ok(level) => level.weights().select(rng),
			Err(_) => {
				log::debug!("unknown curse level '{level}', using {DEFAULT_FAMILY}");
				DEFAULT_FAMILY
			}
		}
	}
}
