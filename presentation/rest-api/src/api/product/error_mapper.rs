use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, body) = match self {
            ProductError::MissingField => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::message("missing required fields: name, sku, price, company_id"),
            ),
            ProductError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::message("price must be a decimal-compatible number"),
            ),
            ProductError::NegativePrice => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::message("price must be >= 0"),
            ),
            ProductError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::message("initial_quantity must be an integer"),
            ),
            ProductError::NegativeQuantity => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::message("initial_quantity must be >= 0"),
            ),
            ProductError::DuplicateSku { product_id } => (
                StatusCode::CONFLICT,
                ErrorResponse::message("SKU already exists").with_product_id(product_id),
            ),
            ProductError::IntegrityConflict(detail) => (
                StatusCode::CONFLICT,
                ErrorResponse::message("database integrity error").with_detail(detail),
            ),
            ProductError::InternalFailure(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::message("internal server error").with_detail(detail),
            ),
        };

        (status, Json(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        for err in [
            ProductError::MissingField,
            ProductError::InvalidPrice,
            ProductError::NegativePrice,
            ProductError::InvalidQuantity,
            ProductError::NegativeQuantity,
        ] {
            let (status, json) = err.into_error_response();
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(json.0.detail.is_none());
            assert!(json.0.product_id.is_none());
        }
    }

    #[test]
    fn should_map_duplicate_sku_to_conflict_with_existing_id() {
        let (status, json) = ProductError::DuplicateSku { product_id: 17 }.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.error, "SKU already exists");
        assert_eq!(json.0.product_id, Some(17));
    }

    #[test]
    fn should_map_integrity_conflict_to_conflict_with_detail() {
        let (status, json) =
            ProductError::IntegrityConflict("products_sku_key".to_string()).into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.error, "database integrity error");
        assert_eq!(json.0.detail.as_deref(), Some("products_sku_key"));
    }

    #[test]
    fn should_map_internal_failure_to_server_error() {
        let (status, json) =
            ProductError::InternalFailure("pool timed out".to_string()).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.error, "internal server error");
        assert_eq!(json.0.detail.as_deref(), Some("pool timed out"));
    }
}
