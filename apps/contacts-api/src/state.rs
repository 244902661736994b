use std::sync::Arc;

use contacts_service::{ContactSearchService, ContactStore};
use contacts_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<ContactSearchService>,
}
impl AppState {
	pub async fn new(config: contacts_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		Ok(Self { service: Arc::new(ContactSearchService::new(config, db)) })
	}

	pub fn with_store(config: contacts_config::Config, store: Arc<dyn ContactStore>) -> Self {
		Self { service: Arc::new(ContactSearchService::with_store(config, store)) }
	}
}
