use time::Date;

use crate::{
	criteria::{MatchMode, SearchCriteria},
	strategy::SearchStrategy,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
	pub first_name: Option<String>,
	pub middle_names: Option<String>,
	pub last_name: Option<String>,
	pub mode: MatchMode,
	/// Also match a contact through any of its previous names.
	pub include_previous_names: bool,
}

/// Predicate composition for the identifier phase. Absent parts match every contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFilter {
	pub contact_id: Option<i64>,
	pub date_of_birth: Option<Date>,
	pub names: Option<NameFilter>,
	/// Set only for the phonetic scan strategies.
	pub row_limit: Option<u32>,
}
impl ContactFilter {
	pub fn for_strategy(
		strategy: SearchStrategy,
		criteria: &SearchCriteria,
		slow_query_row_limit: u32,
	) -> Self {
		if strategy == SearchStrategy::IdentifierOnly {
			return Self {
				contact_id: criteria.contact_id(),
				date_of_birth: None,
				names: None,
				row_limit: None,
			};
		}

		let date_of_birth =
			if strategy.matches_date_of_birth() { criteria.date_of_birth() } else { None };
		let names = strategy.name_mode().map(|mode| NameFilter {
			first_name: criteria.first_name().map(str::to_string),
			middle_names: criteria.middle_names().map(str::to_string),
			last_name: criteria.last_name().map(str::to_string),
			mode,
			include_previous_names: strategy.includes_history(),
		});
		let row_limit = strategy.is_phonetic_scan().then_some(slow_query_row_limit);

		Self { contact_id: None, date_of_birth, names, row_limit }
	}

	pub fn is_phonetic_scan(&self) -> bool {
		self.row_limit.is_some()
	}
}
