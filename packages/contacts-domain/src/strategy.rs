use crate::{
	Error, Result,
	criteria::{MatchMode, SearchCriteria},
};

pub const MIN_LAST_NAME_CHARS: usize = 2;

/// The query shape used for one search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
	IdentifierOnly,
	DobOnly,
	DobNamesExact,
	DobNamesExactWithHistory,
	DobNamesPartial,
	DobNamesPartialWithHistory,
	DobNamesPhonetic,
	DobNamesPhoneticWithHistory,
	NamesExact,
	NamesExactWithHistory,
	NamesPartial,
	NamesPartialWithHistory,
	NamesPhonetic,
	NamesPhoneticWithHistory,
}
impl SearchStrategy {
	pub const ALL: [Self; 14] = [
		Self::IdentifierOnly,
		Self::DobOnly,
		Self::DobNamesExact,
		Self::DobNamesExactWithHistory,
		Self::DobNamesPartial,
		Self::DobNamesPartialWithHistory,
		Self::DobNamesPhonetic,
		Self::DobNamesPhoneticWithHistory,
		Self::NamesExact,
		Self::NamesExactWithHistory,
		Self::NamesPartial,
		Self::NamesPartialWithHistory,
		Self::NamesPhonetic,
		Self::NamesPhoneticWithHistory,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::IdentifierOnly => "IDENTIFIER_ONLY",
			Self::DobOnly => "DOB_ONLY",
			Self::DobNamesExact => "DOB_NAMES_EXACT",
			Self::DobNamesExactWithHistory => "DOB_NAMES_EXACT_WITH_HISTORY",
			Self::DobNamesPartial => "DOB_NAMES_PARTIAL",
			Self::DobNamesPartialWithHistory => "DOB_NAMES_PARTIAL_WITH_HISTORY",
			Self::DobNamesPhonetic => "DOB_NAMES_PHONETIC",
			Self::DobNamesPhoneticWithHistory => "DOB_NAMES_PHONETIC_WITH_HISTORY",
			Self::NamesExact => "NAMES_EXACT",
			Self::NamesExactWithHistory => "NAMES_EXACT_WITH_HISTORY",
			Self::NamesPartial => "NAMES_PARTIAL",
			Self::NamesPartialWithHistory => "NAMES_PARTIAL_WITH_HISTORY",
			Self::NamesPhonetic => "NAMES_PHONETIC",
			Self::NamesPhoneticWithHistory => "NAMES_PHONETIC_WITH_HISTORY",
		}
	}

	/// Name comparison used by this strategy, if it matches on names at all.
	pub fn name_mode(self) -> Option<MatchMode> {
		match self {
			Self::IdentifierOnly | Self::DobOnly => None,
			Self::DobNamesExact
			| Self::DobNamesExactWithHistory
			| Self::NamesExact
			| Self::NamesExactWithHistory => Some(MatchMode::Exact),
			Self::DobNamesPartial
			| Self::DobNamesPartialWithHistory
			| Self::NamesPartial
			| Self::NamesPartialWithHistory => Some(MatchMode::Partial),
			Self::DobNamesPhonetic
			| Self::DobNamesPhoneticWithHistory
			| Self::NamesPhonetic
			| Self::NamesPhoneticWithHistory => Some(MatchMode::Phonetic),
		}
	}

	pub fn requires_names(self) -> bool {
		self.name_mode().is_some()
	}

	pub fn matches_date_of_birth(self) -> bool {
		matches!(
			self,
			Self::DobOnly
				| Self::DobNamesExact
				| Self::DobNamesExactWithHistory
				| Self::DobNamesPartial
				| Self::DobNamesPartialWithHistory
				| Self::DobNamesPhonetic
				| Self::DobNamesPhoneticWithHistory
		)
	}

	pub fn includes_history(self) -> bool {
		matches!(
			self,
			Self::DobNamesExactWithHistory
				| Self::DobNamesPartialWithHistory
				| Self::DobNamesPhoneticWithHistory
				| Self::NamesExactWithHistory
				| Self::NamesPartialWithHistory
				| Self::NamesPhoneticWithHistory
		)
	}

	/// Phonetic name searches without a date of birth cannot use an index and are bounded by
	/// the slow-query row limit.
	pub fn is_phonetic_scan(self) -> bool {
		matches!(self, Self::NamesPhonetic | Self::NamesPhoneticWithHistory)
	}
}
impl std::fmt::Display for SearchStrategy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Maps criteria to a strategy. Total and pure; does not validate.
pub fn determine_search_strategy(criteria: &SearchCriteria) -> SearchStrategy {
	if criteria.contact_id().is_some() {
		return SearchStrategy::IdentifierOnly;
	}

	let has_dob = criteria.date_of_birth().is_some();

	if has_dob && !criteria.has_any_name() {
		return SearchStrategy::DobOnly;
	}
	if criteria.has_any_name() {
		return name_strategy(
			criteria.match_mode(),
			has_dob,
			criteria.include_previous_names(),
		);
	}

	// Only reachable for criteria that fail validation.
	SearchStrategy::NamesPartial
}

/// Validates criteria and selects the strategy to dispatch.
pub fn select_search_strategy(criteria: &SearchCriteria) -> Result<SearchStrategy> {
	if !criteria.has_any_identifying_field() {
		return Err(Error::InvalidSearchCriteria {
			message: "At least one of contactId, dateOfBirth, firstName, middleNames, or lastName must be supplied."
				.to_string(),
		});
	}

	let strategy = determine_search_strategy(criteria);

	if strategy.requires_names() && !criteria.has_any_name() {
		return Err(Error::InvalidSearchCriteria {
			message: format!("{strategy} searches require at least one name."),
		});
	}
	if let Some(last_name) = criteria.last_name()
		&& last_name.chars().count() < MIN_LAST_NAME_CHARS
	{
		return Err(Error::InvalidSearchCriteria {
			message: format!("lastName must be at least {MIN_LAST_NAME_CHARS} characters."),
		});
	}

	Ok(strategy)
}

fn name_strategy(mode: MatchMode, has_dob: bool, history: bool) -> SearchStrategy {
	match (mode, has_dob, history) {
		(MatchMode::Exact, true, false) => SearchStrategy::DobNamesExact,
		(MatchMode::Exact, true, true) => SearchStrategy::DobNamesExactWithHistory,
		(MatchMode::Partial, true, false) => SearchStrategy::DobNamesPartial,
		(MatchMode::Partial, true, true) => SearchStrategy::DobNamesPartialWithHistory,
		(MatchMode::Phonetic, true, false) => SearchStrategy::DobNamesPhonetic,
		(MatchMode::Phonetic, true, true) => SearchStrategy::DobNamesPhoneticWithHistory,
		(MatchMode::Exact, false, false) => SearchStrategy::NamesExact,
		(MatchMode::Exact, false, true) => SearchStrategy::NamesExactWithHistory,
		(MatchMode::Partial, false, false) => SearchStrategy::NamesPartial,
		(MatchMode::Partial, false, true) => SearchStrategy::NamesPartialWithHistory,
		(MatchMode::Phonetic, false, false) => SearchStrategy::NamesPhonetic,
		(MatchMode::Phonetic, false, true) => SearchStrategy::NamesPhoneticWithHistory,
	}
}
