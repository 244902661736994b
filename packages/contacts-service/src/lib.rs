pub mod enrich;
pub mod search;
pub mod time_serde;

mod error;

pub use error::{Error, Result};
pub use search::{
	ContactSearchRequest, ContactSearchResponse, ContactSearchResultItem,
	ExistingRelationshipToPrisoner, PageMetadata,
};

use std::{future::Future, pin::Pin, sync::Arc};

use contacts_config::Config;
use contacts_domain::{
	filter::ContactFilter,
	page::{IdentifierPage, PageRequest},
	sort::Sort,
};
use contacts_storage::{
	contacts,
	db::Db,
	models::{ContactRelationship, ContactWithAddress},
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read access to contact records needed by the search pipeline.
pub trait ContactStore
where
	Self: Send + Sync,
{
	/// One page of contact identifiers matching `filter`, plus the total match count.
	fn find_contact_ids<'a>(
		&'a self,
		filter: &'a ContactFilter,
		page: &'a PageRequest,
	) -> BoxFuture<'a, Result<IdentifierPage>>;

	/// Contact and primary-address rows for exactly `ids`, ordered by `sort`.
	fn fetch_contacts_with_address<'a>(
		&'a self,
		ids: &'a [i64],
		sort: &'a Sort,
	) -> BoxFuture<'a, Result<Vec<ContactWithAddress>>>;

	fn fetch_relationships<'a>(
		&'a self,
		prisoner_number: &'a str,
		contact_ids: &'a [i64],
	) -> BoxFuture<'a, Result<Vec<ContactRelationship>>>;
}

pub struct PgContactStore {
	pub db: Db,
}
impl PgContactStore {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}
impl ContactStore for PgContactStore {
	fn find_contact_ids<'a>(
		&'a self,
		filter: &'a ContactFilter,
		page: &'a PageRequest,
	) -> BoxFuture<'a, Result<IdentifierPage>> {
		Box::pin(async move { Ok(contacts::find_contact_ids(&self.db, filter, page).await?) })
	}

	fn fetch_contacts_with_address<'a>(
		&'a self,
		ids: &'a [i64],
		sort: &'a Sort,
	) -> BoxFuture<'a, Result<Vec<ContactWithAddress>>> {
		Box::pin(
			async move { Ok(contacts::fetch_contacts_with_address(&self.db, ids, sort).await?) },
		)
	}

	fn fetch_relationships<'a>(
		&'a self,
		prisoner_number: &'a str,
		contact_ids: &'a [i64],
	) -> BoxFuture<'a, Result<Vec<ContactRelationship>>> {
		Box::pin(async move {
			Ok(contacts::fetch_relationships(&self.db, prisoner_number, contact_ids).await?)
		})
	}
}

pub struct ContactSearchService {
	pub cfg: Config,
	pub store: Arc<dyn ContactStore>,
}
impl ContactSearchService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, store: Arc::new(PgContactStore::new(db)) }
	}

	pub fn with_store(cfg: Config, store: Arc<dyn ContactStore>) -> Self {
		Self { cfg, store }
	}
}
