//! Category Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{catalog::models::CategoryResponse, extensions::*, state::State};

/// Categories Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesResponse {
    /// Categories in listing order
    pub categories: Vec<CategoryResponse>,
}

/// Category Index Handler
///
/// Returns every category with its subcategories.
#[endpoint(tags("catalog"), summary = "List Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CategoriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(CategoriesResponse {
        categories: state
            .app
            .catalog
            .categories()
            .iter()
            .map(CategoryResponse::from)
            .collect(),
    }))
}
