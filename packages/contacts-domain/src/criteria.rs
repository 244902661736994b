use time::Date;

/// How supplied names are compared against stored names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchMode {
	Exact,
	#[default]
	Partial,
	Phonetic,
}
impl MatchMode {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Exact => "EXACT",
			Self::Partial => "PARTIAL",
			Self::Phonetic => "PHONETIC",
		}
	}
}

/// Criteria as received from a caller, before any trimming.
#[derive(Debug, Clone, Default)]
pub struct RawSearchCriteria {
	pub contact_id: Option<i64>,
	pub date_of_birth: Option<Date>,
	pub first_name: Option<String>,
	pub middle_names: Option<String>,
	pub last_name: Option<String>,
	pub match_mode: MatchMode,
	pub include_previous_names: bool,
	/// Prisoner whose existing relationships should be attached to each result.
	pub relationships_prisoner_number: Option<String>,
}

/// Normalized, immutable search criteria.
///
/// Name fields are trimmed and blank names are treated as not supplied. Identifier and date
/// fields are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
	contact_id: Option<i64>,
	date_of_birth: Option<Date>,
	first_name: Option<String>,
	middle_names: Option<String>,
	last_name: Option<String>,
	match_mode: MatchMode,
	include_previous_names: bool,
	relationships_prisoner_number: Option<String>,
}
impl SearchCriteria {
	pub fn normalize(raw: RawSearchCriteria) -> Self {
		Self {
			contact_id: raw.contact_id,
			date_of_birth: raw.date_of_birth,
			first_name: trimmed(raw.first_name),
			middle_names: trimmed(raw.middle_names),
			last_name: trimmed(raw.last_name),
			match_mode: raw.match_mode,
			include_previous_names: raw.include_previous_names,
			relationships_prisoner_number: raw.relationships_prisoner_number,
		}
	}

	pub fn contact_id(&self) -> Option<i64> {
		self.contact_id
	}

	pub fn date_of_birth(&self) -> Option<Date> {
		self.date_of_birth
	}

	pub fn first_name(&self) -> Option<&str> {
		self.first_name.as_deref()
	}

	pub fn middle_names(&self) -> Option<&str> {
		self.middle_names.as_deref()
	}

	pub fn last_name(&self) -> Option<&str> {
		self.last_name.as_deref()
	}

	pub fn match_mode(&self) -> MatchMode {
		self.match_mode
	}

	pub fn include_previous_names(&self) -> bool {
		self.include_previous_names
	}

	pub fn relationships_prisoner_number(&self) -> Option<&str> {
		self.relationships_prisoner_number.as_deref()
	}

	pub fn has_any_name(&self) -> bool {
		self.first_name.is_some() || self.middle_names.is_some() || self.last_name.is_some()
	}

	pub fn has_any_identifying_field(&self) -> bool {
		self.contact_id.is_some() || self.date_of_birth.is_some() || self.has_any_name()
	}
}
impl From<RawSearchCriteria> for SearchCriteria {
	fn from(raw: RawSearchCriteria) -> Self {
		Self::normalize(raw)
	}
}

fn trimmed(value: Option<String>) -> Option<String> {
	value.map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}
