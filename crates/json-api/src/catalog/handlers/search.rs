//! Catalog Search Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::models::{CategoryResponse, ListedProductResponse},
    extensions::*,
    state::State,
};

/// Search Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SearchResponse {
    /// Matching products, at most five
    pub products: Vec<ListedProductResponse>,

    /// Matching categories, at most three
    pub categories: Vec<CategoryResponse>,
}

/// Catalog Search Handler
///
/// Case-insensitive substring search over product and category names and
/// descriptions. A missing or blank query returns no results.
#[endpoint(tags("catalog"), summary = "Search Catalog")]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<SearchResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let query = q.into_inner().unwrap_or_default();

    let results = state.app.catalog.search(&query);

    let products = results
        .products
        .into_iter()
        .map(ListedProductResponse::try_from)
        .collect::<Result<Vec<_>, _>>()
        .or_500("failed to format product prices")?;

    Ok(Json(SearchResponse {
        products,
        categories: results
            .categories
            .into_iter()
            .map(CategoryResponse::from)
            .collect(),
    }))
}
