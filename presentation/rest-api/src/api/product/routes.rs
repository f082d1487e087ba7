use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::use_cases::create::CreateProductUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductCreatedResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
}

impl ProductApi {
    pub fn new(create_use_case: Arc<dyn CreateProductUseCase>) -> Self {
        Self { create_use_case }
    }
}

/// Product catalog API
#[OpenApi]
impl ProductApi {
    /// Create a product
    ///
    /// Creates a product and, when both `warehouse_id` and `initial_quantity`
    /// are given, its inventory row for that warehouse. Both writes happen in
    /// one transaction.
    #[oai(path = "/api/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        match self.create_use_case.execute(body.0.into()).await {
            Ok(created) => CreateProductResponse::Created(Json(created.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    409 => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "bad_request_handler")]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductCreatedResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Malformed bodies (bad JSON, wrong field types) get the same error shape
/// as domain validation failures.
fn bad_request_handler(err: poem::Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(Json(ErrorResponse::message(format!(
        "invalid request body: {}",
        err
    ))))
}
