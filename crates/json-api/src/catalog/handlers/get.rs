//! Get Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{catalog::models::CategoryResponse, extensions::*, state::State};

/// Get Category Handler
///
/// Returns a category and its subcategories.
#[endpoint(
    tags("catalog"),
    summary = "Get Category",
    responses(
        (status_code = StatusCode::OK, description = "Category found"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown category"),
    ),
)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = state
        .app
        .catalog
        .category(&slug)
        .ok_or_else(|| StatusError::not_found().brief("Category not found"))?;

    Ok(Json(category.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::catalog_service;

    use super::*;

    fn make_service() -> TestResult<Service> {
        catalog_service(Router::with_path("categories/{slug}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_subcategories() -> TestResult {
        let mut res = TestClient::get("http://example.com/categories/roller-blinds")
            .send(&make_service()?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let category: CategoryResponse = res.take_json().await?;

        assert_eq!(category.subcategories.len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_category_without_subcategories_is_found() -> TestResult {
        let mut res = TestClient::get("http://example.com/categories/outdoor")
            .send(&make_service()?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let category: CategoryResponse = res.take_json().await?;

        assert!(category.subcategories.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_category_returns_404() -> TestResult {
        let res = TestClient::get("http://example.com/categories/garden-gnomes")
            .send(&make_service()?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
