use time::{Date, OffsetDateTime};
use tracing::{debug, warn};

use contacts_domain::{
	criteria::{MatchMode, RawSearchCriteria, SearchCriteria},
	filter::ContactFilter,
	page::{IdentifierPage, Page, PageRequest},
	sort::{Sort, SortTerm},
	strategy::{self, SearchStrategy},
};
use contacts_storage::models::{ContactRelationship, ContactWithAddress};

use crate::{ContactSearchService, Error, Result, enrich};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSearchRequest {
	#[serde(default)]
	pub contact_id: Option<i64>,
	#[serde(default, with = "crate::time_serde::date::option")]
	pub date_of_birth: Option<Date>,
	#[serde(default)]
	pub first_name: Option<String>,
	#[serde(default)]
	pub middle_names: Option<String>,
	#[serde(default)]
	pub last_name: Option<String>,
	#[serde(default)]
	pub match_mode: MatchMode,
	#[serde(default)]
	pub include_previous_names: bool,
	/// Prisoner number whose existing relationships are attached to each result.
	#[serde(default)]
	pub include_any_existing_relationships_to_prisoner: Option<String>,
	#[serde(default)]
	pub page: Option<u32>,
	#[serde(default)]
	pub size: Option<u32>,
	/// `property[,asc|desc]` entries.
	#[serde(default)]
	pub sort: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingRelationshipToPrisoner {
	pub prisoner_contact_id: i64,
	pub relationship_type_code: String,
	pub relationship_to_prisoner_code: String,
	pub relationship_to_prisoner_description: Option<String>,
	pub is_relationship_active: bool,
}
impl From<ContactRelationship> for ExistingRelationshipToPrisoner {
	fn from(row: ContactRelationship) -> Self {
		Self {
			prisoner_contact_id: row.prisoner_contact_id,
			relationship_type_code: row.relationship_type,
			relationship_to_prisoner_code: row.relationship_to_prisoner,
			relationship_to_prisoner_description: row.relationship_description,
			is_relationship_active: row.active,
		}
	}
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSearchResultItem {
	pub id: i64,
	pub title_code: Option<String>,
	pub last_name: String,
	pub first_name: String,
	pub middle_names: Option<String>,
	#[serde(with = "crate::time_serde::date::option")]
	pub date_of_birth: Option<Date>,
	#[serde(with = "crate::time_serde::date::option")]
	pub deceased_date: Option<Date>,
	pub contact_address_id: Option<i64>,
	pub flat: Option<String>,
	pub property: Option<String>,
	pub street: Option<String>,
	pub area: Option<String>,
	pub city_code: Option<String>,
	pub county_code: Option<String>,
	pub postcode: Option<String>,
	pub country_code: Option<String>,
	pub mail_flag: Option<bool>,
	#[serde(with = "crate::time_serde::date::option")]
	pub start_date: Option<Date>,
	#[serde(with = "crate::time_serde::date::option")]
	pub end_date: Option<Date>,
	pub no_fixed_address: Option<bool>,
	pub created_by: String,
	#[serde(with = "crate::time_serde")]
	pub created_time: OffsetDateTime,
	pub updated_by: Option<String>,
	#[serde(with = "crate::time_serde::option")]
	pub updated_time: Option<OffsetDateTime>,
	/// `None` when relationships were not requested; an empty list when requested but absent.
	pub existing_relationships: Option<Vec<ExistingRelationshipToPrisoner>>,
}
impl ContactSearchResultItem {
	pub(crate) fn from_row(
		row: ContactWithAddress,
		existing_relationships: Option<Vec<ExistingRelationshipToPrisoner>>,
	) -> Self {
		Self {
			id: row.contact_id,
			title_code: row.title_code,
			last_name: row.last_name,
			first_name: row.first_name,
			middle_names: row.middle_names,
			date_of_birth: row.date_of_birth,
			deceased_date: row.deceased_date,
			contact_address_id: row.contact_address_id,
			flat: row.flat,
			property: row.property,
			street: row.street,
			area: row.area,
			city_code: row.city_code,
			county_code: row.county_code,
			postcode: row.post_code,
			country_code: row.country_code,
			mail_flag: row.mail_flag,
			start_date: row.start_date,
			end_date: row.end_date,
			no_fixed_address: row.no_fixed_address,
			created_by: row.created_by,
			created_time: row.created_time,
			updated_by: row.updated_by,
			updated_time: row.updated_time,
			existing_relationships,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
	pub size: u32,
	pub number: u32,
	pub total_elements: u64,
	pub total_pages: u64,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ContactSearchResponse {
	pub content: Vec<ContactSearchResultItem>,
	pub page: PageMetadata,
}
impl From<Page<ContactSearchResultItem>> for ContactSearchResponse {
	fn from(page: Page<ContactSearchResultItem>) -> Self {
		Self {
			page: PageMetadata {
				size: page.size,
				number: page.number,
				total_elements: page.total_elements,
				total_pages: page.total_pages,
			},
			content: page.content,
		}
	}
}

impl ContactSearchService {
	/// Request-shaped entry point: validates paging and sorting, then runs
	/// [`ContactSearchService::search_contacts`].
	pub async fn search(&self, req: ContactSearchRequest) -> Result<ContactSearchResponse> {
		let page = self.page_request(req.page, req.size, &req.sort)?;
		let criteria = RawSearchCriteria {
			contact_id: req.contact_id,
			date_of_birth: req.date_of_birth,
			first_name: req.first_name,
			middle_names: req.middle_names,
			last_name: req.last_name,
			match_mode: req.match_mode,
			include_previous_names: req.include_previous_names,
			relationships_prisoner_number: req.include_any_existing_relationships_to_prisoner,
		};
		let page = self.search_contacts(criteria, page).await?;

		Ok(page.into())
	}

	/// Searches contacts in two phases.
	///
	/// The identifier phase selects one sorted page of contact identifiers and the total count
	/// without joining anything that can multiply rows. The detail phase then fetches addresses
	/// and relationships for exactly those identifiers. Page metadata always comes from the
	/// identifier phase.
	pub async fn search_contacts(
		&self,
		criteria: RawSearchCriteria,
		page: PageRequest,
	) -> Result<Page<ContactSearchResultItem>> {
		let criteria = SearchCriteria::normalize(criteria);
		let strategy = strategy::select_search_strategy(&criteria)?;
		let identifiers = self.find_contact_ids(strategy, &criteria, &page).await?;

		if identifiers.is_empty() {
			return Ok(Page::empty(&identifiers.request, identifiers.total));
		}

		let items = enrich::enrich(self.store.as_ref(), &identifiers, &criteria).await?;

		Ok(Page::new(items, &identifiers.request, identifiers.total))
	}

	async fn find_contact_ids(
		&self,
		strategy: SearchStrategy,
		criteria: &SearchCriteria,
		page: &PageRequest,
	) -> Result<IdentifierPage> {
		let filter =
			ContactFilter::for_strategy(strategy, criteria, self.cfg.search.slow_query_row_limit);
		let identifiers = self.store.find_contact_ids(&filter, page).await?;

		if let Some(row_limit) = filter.row_limit
			&& identifiers.total >= u64::from(row_limit)
		{
			warn!(
				strategy = %strategy,
				row_limit,
				"Phonetic contact search reached the slow-query row limit; results are truncated."
			);
		}

		debug!(
			strategy = %strategy,
			total = identifiers.total,
			page_ids = identifiers.ids.len(),
			"Resolved contact search identifiers."
		);

		Ok(identifiers)
	}

	fn page_request(&self, page: Option<u32>, size: Option<u32>, sort: &[String]) -> Result<PageRequest> {
		let max_page_size = self.cfg.search.max_page_size;
		let size = size.unwrap_or(self.cfg.search.default_page_size);

		if size == 0 || size > max_page_size {
			return Err(Error::InvalidRequest {
				message: format!("size must be between 1 and {max_page_size}."),
			});
		}

		let sort = if sort.is_empty() { default_sort() } else { Sort::parse(sort)? };

		Ok(PageRequest::new(page.unwrap_or(0), size, sort)?)
	}
}

fn default_sort() -> Sort {
	Sort::by(vec![SortTerm::asc("lastName"), SortTerm::asc("firstName")])
}
