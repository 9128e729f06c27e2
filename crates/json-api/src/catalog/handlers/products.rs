//! Subcategory Products Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::models::{ProductResponse, SubCategoryResponse},
    extensions::*,
    state::State,
};

/// Subcategory Products Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubCategoryProductsResponse {
    /// Owning category slug
    pub category_slug: String,

    /// The subcategory
    pub subcategory: SubCategoryResponse,

    /// Products in listing order
    pub products: Vec<ProductResponse>,
}

/// Subcategory Products Handler
///
/// Returns the products listed under a subcategory.
#[endpoint(
    tags("catalog"),
    summary = "List Subcategory Products",
    responses(
        (status_code = StatusCode::OK, description = "Products listed"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown category or subcategory"),
    ),
)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    sub: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<SubCategoryProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let catalog = &state.app.catalog;

    let subcategory = catalog
        .subcategory(&slug, &sub)
        .ok_or_else(|| StatusError::not_found().brief("Subcategory not found"))?;

    let products = catalog
        .products_in(&subcategory.slug)
        .iter()
        .map(ProductResponse::try_from)
        .collect::<Result<Vec<_>, _>>()
        .or_500("failed to format product prices")?;

    Ok(Json(SubCategoryProductsResponse {
        category_slug: slug.into_inner(),
        subcategory: subcategory.into(),
        products,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::catalog_service;

    use super::*;

    fn make_service() -> TestResult<Service> {
        catalog_service(Router::with_path("categories/{slug}/{sub}/products").get(handler))
    }

    #[tokio::test]
    async fn test_products_are_listed_with_display_prices() -> TestResult {
        let mut res = TestClient::get("http://example.com/categories/interior/wall-panel/products")
            .send(&make_service()?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: SubCategoryProductsResponse = res.take_json().await?;
        let ids: Vec<&str> = body.products.iter().map(|product| product.id.as_str()).collect();

        assert_eq!(ids, ["wp1", "wp2", "wp3"]);
        assert!(
            body.products
                .iter()
                .all(|product| product.display_price.contains(',')),
            "expected grouped display prices"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_subcategory_under_wrong_category_returns_404() -> TestResult {
        let res = TestClient::get("http://example.com/categories/door/wall-panel/products")
            .send(&make_service()?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
