use derive_more::{Display, Error};
use log::{error, warn};
use ntex::{http, web};
use serde::Serialize;

#[derive(Debug, Display, Error)]
pub enum ApiError {
    /// Carries the detail message returned to the caller, e.g. "Horse not found".
    #[display("{_0}")]
    NotFound(#[error(not(source))] &'static str),
    #[display("{_0}")]
    InvalidPayload(#[error(not(source))] String),
    #[display("{_0}")]
    Store(#[error(not(source))] anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Store(err)
    }
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ApiError {
    fn get_error_message(&self) -> String {
        match self {
            ApiError::NotFound(msg) => format!("[NotFound] {msg}"),
            ApiError::InvalidPayload(msg) => format!("[InvalidPayload] {msg}"),
            ApiError::Store(err) => format!("[StoreFailure] {err:#?}"),
        }
    }
}

impl web::error::WebResponseError for ApiError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        let detail = match self {
            ApiError::Store(_) => {
                error!("{}", self.get_error_message());
                "Internal server error".to_string()
            }
            _ => {
                warn!("{}", self.get_error_message());
                self.to_string()
            }
        };

        web::HttpResponse::build(self.status_code()).json(&ErrorDetail { detail })
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            ApiError::NotFound(_) => http::StatusCode::NOT_FOUND,
            ApiError::InvalidPayload(_) => http::StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
