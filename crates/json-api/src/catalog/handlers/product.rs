//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{catalog::models::ListedProductResponse, extensions::*, state::State};

/// Get Product Handler
///
/// Returns a product with its category and subcategory for the breadcrumb.
#[endpoint(
    tags("catalog"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown product"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ListedProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let location = state
        .app
        .catalog
        .product(&id)
        .ok_or_else(|| StatusError::not_found().brief("Product not found"))?;

    let product =
        ListedProductResponse::try_from(location).or_500("failed to format product price")?;

    Ok(Json(product))
}
