pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid search criteria: {message}")]
	InvalidSearchCriteria { message: String },
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<contacts_domain::Error> for Error {
	fn from(err: contacts_domain::Error) -> Self {
		match err {
			contacts_domain::Error::InvalidSearchCriteria { message } =>
				Self::InvalidSearchCriteria { message },
			contacts_domain::Error::InvalidSort { message }
			| contacts_domain::Error::InvalidPage { message } => Self::InvalidRequest { message },
		}
	}
}

impl From<contacts_storage::Error> for Error {
	fn from(err: contacts_storage::Error) -> Self {
		match err {
			contacts_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			contacts_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
		}
	}
}
