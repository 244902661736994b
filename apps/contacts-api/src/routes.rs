use axum::{
	Json, Router,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;
use contacts_service::{ContactSearchRequest, ContactSearchResponse, Error as ServiceError};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/contacts/search", post(search_contacts))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search_contacts(
	State(state): State<AppState>,
	Json(payload): Json<ContactSearchRequest>,
) -> Result<Json<ContactSearchResponse>, ApiError> {
	let response = state.service.search(payload).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidSearchCriteria { message } =>
				Self::new(StatusCode::BAD_REQUEST, "invalid_search_criteria", message, None),
			ServiceError::InvalidRequest { message } =>
				Self::new(StatusCode::BAD_REQUEST, "invalid_request", message, None),
			ServiceError::Storage { message } => {
				tracing::error!(error = %message, "Contact search failed in storage.");

				Self::new(
					StatusCode::INTERNAL_SERVER_ERROR,
					"storage_error",
					"Contact search failed due to a storage error.",
					None,
				)
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}
