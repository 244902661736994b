use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub search: Search,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Search {
	/// Upper bound on candidate rows examined by the unindexed phonetic name scans.
	#[serde(default = "default_slow_query_row_limit")]
	pub slow_query_row_limit: u32,
	#[serde(default = "default_page_size")]
	pub default_page_size: u32,
	#[serde(default = "default_max_page_size")]
	pub max_page_size: u32,
}
impl Default for Search {
	fn default() -> Self {
		Self {
			slow_query_row_limit: default_slow_query_row_limit(),
			default_page_size: default_page_size(),
			max_page_size: default_max_page_size(),
		}
	}
}

pub(crate) fn default_log_level() -> String {
	"info".to_string()
}

fn default_slow_query_row_limit() -> u32 {
	2_000
}

fn default_page_size() -> u32 {
	10
}

fn default_max_page_size() -> u32 {
	100
}
