//! Detail phase of contact search.

use std::collections::HashMap;

use tracing::debug;

use contacts_domain::{criteria::SearchCriteria, page::IdentifierPage};
use contacts_storage::models::{ContactRelationship, ContactWithAddress};

use crate::{
	ContactStore, Result,
	search::{ContactSearchResultItem, ExistingRelationshipToPrisoner},
};

/// Fetches details and, when requested, existing relationships for one identifier page.
///
/// Items come back in identifier-page order.
pub async fn enrich(
	store: &dyn ContactStore,
	identifiers: &IdentifierPage,
	criteria: &SearchCriteria,
) -> Result<Vec<ContactSearchResultItem>> {
	let ids = identifiers.ids.as_slice();
	let rows = store.fetch_contacts_with_address(ids, identifiers.request.sort()).await?;
	let fetched = rows.len();
	let rows = order_by_identifiers(rows, ids);

	if rows.len() != ids.len() || fetched != ids.len() {
		debug!(
			requested = ids.len(),
			fetched,
			kept = rows.len(),
			"Contact detail rows did not match the identifier page."
		);
	}

	let mut relationships = match criteria.relationships_prisoner_number() {
		Some(prisoner_number) =>
			Some(group_by_contact(store.fetch_relationships(prisoner_number, ids).await?)),
		None => None,
	};
	let items = rows
		.into_iter()
		.map(|row| {
			let existing = relationships
				.as_mut()
				.map(|by_contact| by_contact.remove(&row.contact_id).unwrap_or_default());

			ContactSearchResultItem::from_row(row, existing)
		})
		.collect();

	Ok(items)
}

/// Puts detail rows into the identifier-page order, dropping rows for identifiers outside the
/// page and repeated rows for the same identifier.
fn order_by_identifiers(rows: Vec<ContactWithAddress>, ids: &[i64]) -> Vec<ContactWithAddress> {
	let positions: HashMap<i64, usize> =
		ids.iter().enumerate().map(|(position, id)| (*id, position)).collect();
	let mut positioned = rows
		.into_iter()
		.filter_map(|row| positions.get(&row.contact_id).map(|position| (*position, row)))
		.collect::<Vec<_>>();

	positioned.sort_by_key(|(position, _)| *position);
	positioned.dedup_by_key(|(position, _)| *position);

	positioned.into_iter().map(|(_, row)| row).collect()
}

fn group_by_contact(
	rows: Vec<ContactRelationship>,
) -> HashMap<i64, Vec<ExistingRelationshipToPrisoner>> {
	let mut grouped: HashMap<i64, Vec<ExistingRelationshipToPrisoner>> = HashMap::new();

	for row in rows {
		grouped.entry(row.contact_id).or_default().push(row.into());
	}

	grouped
}
