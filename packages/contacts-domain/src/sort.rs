use crate::{Error, Result};

/// Properties a caller may sort search results by.
pub const SORTABLE_PROPERTIES: [&str; 5] =
	["contactId", "lastName", "firstName", "middleNames", "dateOfBirth"];

pub const CONTACT_ID_PROPERTY: &str = "contactId";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
	#[default]
	Asc,
	Desc,
}
impl Direction {
	pub fn as_sql(self) -> &'static str {
		match self {
			Self::Asc => "ASC",
			Self::Desc => "DESC",
		}
	}

	fn parse(raw: &str) -> Option<Self> {
		match raw.trim().to_ascii_lowercase().as_str() {
			"asc" => Some(Self::Asc),
			"desc" => Some(Self::Desc),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortTerm {
	pub property: String,
	pub direction: Direction,
}
impl SortTerm {
	pub fn new(property: impl Into<String>, direction: Direction) -> Self {
		Self { property: property.into(), direction }
	}

	pub fn asc(property: impl Into<String>) -> Self {
		Self::new(property, Direction::Asc)
	}

	pub fn desc(property: impl Into<String>) -> Self {
		Self::new(property, Direction::Desc)
	}
}

/// Ordered sort specification. An empty term list means unsorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sort {
	terms: Vec<SortTerm>,
}
impl Sort {
	pub fn unsorted() -> Self {
		Self { terms: Vec::new() }
	}

	pub fn by(terms: Vec<SortTerm>) -> Self {
		Self { terms }
	}

	/// Parses `property[,asc|desc]` entries, rejecting properties that are not sortable.
	pub fn parse<S>(specs: &[S]) -> Result<Self>
	where
		S: AsRef<str>,
	{
		let mut terms = Vec::with_capacity(specs.len());

		for spec in specs {
			let spec = spec.as_ref().trim();

			if spec.is_empty() {
				continue;
			}

			let (property, direction) = match spec.split_once(',') {
				Some((property, direction)) => {
					let direction = Direction::parse(direction).ok_or_else(|| Error::InvalidSort {
						message: format!("Unknown sort direction in {spec:?}; use asc or desc."),
					})?;

					(property.trim(), direction)
				},
				None => (spec, Direction::Asc),
			};

			if !SORTABLE_PROPERTIES.contains(&property) {
				return Err(Error::InvalidSort {
					message: format!(
						"Cannot sort by {property:?}; sortable properties are {}.",
						SORTABLE_PROPERTIES.join(", ")
					),
				});
			}

			terms.push(SortTerm::new(property, direction));
		}

		Ok(Self { terms })
	}

	pub fn terms(&self) -> &[SortTerm] {
		&self.terms
	}

	pub fn is_unsorted(&self) -> bool {
		self.terms.is_empty()
	}

	pub fn sorts_on(&self, property: &str) -> bool {
		self.terms.iter().any(|term| term.property == property)
	}

	/// Rewrites each property into the store's column naming (`dateOfBirth` becomes
	/// `date_of_birth`), keeping directions and term order.
	pub fn to_store_native(&self) -> Self {
		if self.is_unsorted() {
			return self.clone();
		}

		let terms = self
			.terms
			.iter()
			.map(|term| SortTerm::new(column_name(&term.property), term.direction))
			.collect();

		Self { terms }
	}
}

pub fn to_store_native(sort: &Sort) -> Sort {
	sort.to_store_native()
}

fn column_name(property: &str) -> String {
	let mut out = String::with_capacity(property.len() + 4);

	for (i, ch) in property.chars().enumerate() {
		if i > 0 && ch.is_uppercase() {
			out.push('_');
		}

		out.extend(ch.to_lowercase());
	}

	out
}
