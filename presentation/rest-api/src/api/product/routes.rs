use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductResponse};
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
    /// Create a new product
    ///
    /// Validates the body, stores the product and returns it with the
    /// identifier assigned by the database. Identical requests create
    /// distinct products.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = match CreateProductParams::try_from(body.0) {
            Ok(params) => params,
            Err(field) => {
                return CreateProductResponse::BadRequest(Json(ErrorResponse::validation(vec![
                    field,
                ])));
            }
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    /// Product stored
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    /// A field is missing, blank or not a number
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    /// The store rejected or could not take the write
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
