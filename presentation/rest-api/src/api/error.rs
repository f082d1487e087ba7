use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned by every endpoint.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Store-reported diagnostic detail
    #[oai(skip_serializing_if_is_none)]
    pub detail: Option<String>,
    /// Id of the product that caused a conflict
    #[oai(skip_serializing_if_is_none)]
    pub product_id: Option<i64>,
}

impl ErrorResponse {
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
            product_id: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_product_id(mut self, product_id: i64) -> Self {
        self.product_id = Some(product_id);
        self
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
