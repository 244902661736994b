pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("Invalid search criteria: {message}")]
	InvalidSearchCriteria { message: String },
	#[error("Invalid sort: {message}")]
	InvalidSort { message: String },
	#[error("Invalid page request: {message}")]
	InvalidPage { message: String },
}
