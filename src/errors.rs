use crate::ledger::LedgerError;
use crate::storage::StoreError;
use axum::http::StatusCode;
use tracing::error;

pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text.";
pub const EMPTY_DONATION_MESSAGE: &str = "Please write something before donating.";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        error!("storage failure: {err}");
        Self::internal(err)
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::EmptyText => Self::bad_request(EMPTY_TEXT_MESSAGE),
            LedgerError::UnknownDate(_) => Self::internal(err),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
