//! Contact search queries.
//!
//! The identifier phase only ever reads `contacts` (and `contact_previous_names` through
//! `EXISTS`), so one contact yields at most one row regardless of how many addresses it has.
//! Addresses are joined in the detail phase, restricted to the identifiers of a single page.

use sqlx::{Postgres, QueryBuilder};

use contacts_domain::{
	criteria::MatchMode,
	filter::{ContactFilter, NameFilter},
	page::{IdentifierPage, PageRequest},
	sort::Sort,
};

use crate::{
	Error, Result,
	db::Db,
	models::{ContactRelationship, ContactWithAddress},
};

const NATIVE_SORT_COLUMNS: [&str; 5] =
	["contact_id", "last_name", "first_name", "middle_names", "date_of_birth"];
const CONTACT_WITH_ADDRESS_COLUMNS: &str = "\
v.contact_id, v.title_code, v.last_name, v.first_name, v.middle_names, v.date_of_birth, \
v.deceased_date, v.created_by, v.created_time, v.updated_by, v.updated_time, \
v.contact_address_id, v.flat, v.property, v.street, v.area, v.city_code, v.county_code, \
v.post_code, v.country_code, v.mail_flag, v.start_date, v.end_date, v.no_fixed_address";

/// Runs the identifier phase: one page of contact identifiers plus the total match count.
pub async fn find_contact_ids(
	db: &Db,
	filter: &ContactFilter,
	page: &PageRequest,
) -> Result<IdentifierPage> {
	match filter.row_limit {
		Some(row_limit) => find_contact_ids_phonetic_scan(db, filter, page, row_limit).await,
		None => find_contact_ids_indexed(db, filter, page).await,
	}
}

/// Fetches detail rows for exactly `ids`, ordered by `sort`.
pub async fn fetch_contacts_with_address(
	db: &Db,
	ids: &[i64],
	sort: &Sort,
) -> Result<Vec<ContactWithAddress>> {
	if ids.is_empty() {
		return Ok(Vec::new());
	}

	let order_by = order_by_clause(sort, "v.", property_column)?;
	let mut builder = QueryBuilder::<Postgres>::new("SELECT ");

	builder.push(CONTACT_WITH_ADDRESS_COLUMNS);
	builder.push(" FROM contacts_with_primary_address v WHERE v.contact_id = ANY(");
	builder.push_bind(ids.to_vec());
	builder.push(")");
	builder.push(order_by);

	let rows = builder.build_query_as::<ContactWithAddress>().fetch_all(&db.pool).await?;

	Ok(rows)
}

/// Relationships between `prisoner_number` and any of `contact_ids`.
pub async fn fetch_relationships(
	db: &Db,
	prisoner_number: &str,
	contact_ids: &[i64],
) -> Result<Vec<ContactRelationship>> {
	if contact_ids.is_empty() {
		return Ok(Vec::new());
	}

	let rows = sqlx::query_as::<_, ContactRelationship>(
		"\
SELECT
	pc.contact_id,
	pc.prisoner_contact_id,
	pc.relationship_type,
	pc.relationship_to_prisoner,
	rc.description AS relationship_description,
	pc.active
FROM prisoner_contacts pc
LEFT JOIN reference_codes rc
	ON rc.group_code = CASE pc.relationship_type
		WHEN 'S' THEN 'SOCIAL_RELATIONSHIP'
		ELSE 'OFFICIAL_RELATIONSHIP'
	END
	AND rc.code = pc.relationship_to_prisoner
WHERE pc.prisoner_number = $1
	AND pc.contact_id = ANY($2)
ORDER BY pc.contact_id, pc.prisoner_contact_id",
	)
	.bind(prisoner_number)
	.bind(contact_ids)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

async fn find_contact_ids_indexed(
	db: &Db,
	filter: &ContactFilter,
	page: &PageRequest,
) -> Result<IdentifierPage> {
	let order_by = order_by_clause(page.sort(), "c.", property_column)?;
	let mut count = QueryBuilder::<Postgres>::new("SELECT count(*) FROM contacts c WHERE true");

	push_filter(&mut count, filter);

	let total = count.build_query_scalar::<i64>().fetch_one(&db.pool).await?;
	let mut select = QueryBuilder::<Postgres>::new("SELECT c.contact_id FROM contacts c WHERE true");

	push_filter(&mut select, filter);

	select.push(order_by);
	select.push(" LIMIT ").push_bind(page.limit());
	select.push(" OFFSET ").push_bind(page.offset());

	let ids = select.build_query_scalar::<i64>().fetch_all(&db.pool).await?;

	Ok(IdentifierPage { ids, total: total.max(0) as u64, request: page.clone() })
}

async fn find_contact_ids_phonetic_scan(
	db: &Db,
	filter: &ContactFilter,
	page: &PageRequest,
	row_limit: u32,
) -> Result<IdentifierPage> {
	// Candidate columns are exposed under their store names, so the caller's sort is translated
	// here and only here.
	let native = page.sort().to_store_native();
	let order_by = order_by_clause(&native, "", native_column)?;
	let mut count = QueryBuilder::<Postgres>::new("SELECT count(*) FROM (");

	push_phonetic_candidates(&mut count, filter, row_limit);
	count.push(") candidates");

	let total = count.build_query_scalar::<i64>().fetch_one(&db.pool).await?;
	let mut select = QueryBuilder::<Postgres>::new("SELECT contact_id FROM (");

	push_phonetic_candidates(&mut select, filter, row_limit);
	select.push(") candidates");
	select.push(order_by);
	select.push(" LIMIT ").push_bind(page.limit());
	select.push(" OFFSET ").push_bind(page.offset());

	let ids = select.build_query_scalar::<i64>().fetch_all(&db.pool).await?;

	Ok(IdentifierPage { ids, total: total.max(0) as u64, request: page.clone() })
}

fn push_phonetic_candidates(
	builder: &mut QueryBuilder<'_, Postgres>,
	filter: &ContactFilter,
	row_limit: u32,
) {
	builder.push(
		"SELECT c.contact_id, c.last_name, c.first_name, c.middle_names, c.date_of_birth \
		 FROM contacts c WHERE true",
	);

	push_filter(builder, filter);

	builder.push(" ORDER BY c.contact_id LIMIT ").push_bind(i64::from(row_limit));
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ContactFilter) {
	if let Some(contact_id) = filter.contact_id {
		builder.push(" AND c.contact_id = ").push_bind(contact_id);
	}
	if let Some(date_of_birth) = filter.date_of_birth {
		builder.push(" AND c.date_of_birth = ").push_bind(date_of_birth);
	}

	let Some(names) = filter.names.as_ref() else {
		return;
	};

	builder.push(" AND ((true");

	push_name_predicates(builder, names, "c");

	builder.push(")");

	if names.include_previous_names {
		builder.push(
			" OR EXISTS (SELECT 1 FROM contact_previous_names h WHERE h.contact_id = c.contact_id",
		);

		push_name_predicates(builder, names, "h");

		builder.push(")");
	}

	builder.push(")");
}

fn push_name_predicates(builder: &mut QueryBuilder<'_, Postgres>, names: &NameFilter, alias: &str) {
	let fields = [
		("first_name", names.first_name.as_deref()),
		("middle_names", names.middle_names.as_deref()),
		("last_name", names.last_name.as_deref()),
	];

	for (column, value) in fields {
		let Some(value) = value else {
			continue;
		};

		match names.mode {
			MatchMode::Exact => {
				builder.push(format!(" AND lower({alias}.{column}) = lower("));
				builder.push_bind(value.to_string());
				builder.push(")");
			},
			MatchMode::Partial => {
				builder.push(format!(" AND {alias}.{column} ILIKE "));
				builder.push_bind(format!("%{}%", escape_like(value)));
			},
			MatchMode::Phonetic => {
				builder.push(format!(" AND soundex({alias}.{column}) = soundex("));
				builder.push_bind(value.to_string());
				builder.push(")");
			},
		}
	}
}

/// Builds an `ORDER BY` clause, appending a `contact_id` tie-breaker when the sort lacks one.
fn order_by_clause<F>(sort: &Sort, alias: &str, column: F) -> Result<String>
where
	F: Fn(&str) -> Option<&'static str>,
{
	let mut terms = Vec::with_capacity(sort.terms().len() + 1);
	let mut has_contact_id = false;

	for term in sort.terms() {
		let Some(column) = column(&term.property) else {
			return Err(Error::InvalidArgument(format!(
				"Unsupported sort property {:?}.",
				term.property
			)));
		};

		has_contact_id |= column == "contact_id";

		terms.push(format!("{alias}{column} {}", term.direction.as_sql()));
	}

	if !has_contact_id {
		terms.push(format!("{alias}contact_id ASC"));
	}

	Ok(format!(" ORDER BY {}", terms.join(", ")))
}

fn property_column(property: &str) -> Option<&'static str> {
	match property {
		"contactId" => Some("contact_id"),
		"lastName" => Some("last_name"),
		"firstName" => Some("first_name"),
		"middleNames" => Some("middle_names"),
		"dateOfBirth" => Some("date_of_birth"),
		_ => None,
	}
}

fn native_column(column: &str) -> Option<&'static str> {
	NATIVE_SORT_COLUMNS.into_iter().find(|candidate| *candidate == column)
}

fn escape_like(value: &str) -> String {
	let mut out = String::with_capacity(value.len());

	for ch in value.chars() {
		if matches!(ch, '\\' | '%' | '_') {
			out.push('\\');
		}

		out.push(ch);
	}

	out
}
