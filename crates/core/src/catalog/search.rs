//! Catalog search

use super::{Catalog, Category, ProductLocation};

/// Maximum number of products returned by [`Catalog::search`].
pub const MAX_PRODUCT_RESULTS: usize = 5;

/// Maximum number of categories returned by [`Catalog::search`].
pub const MAX_CATEGORY_RESULTS: usize = 3;

/// Search results, in catalog order.
#[derive(Debug, Default)]
pub struct SearchResults<'a> {
    /// Matching products with their category and subcategory
    pub products: Vec<ProductLocation<'a>>,

    /// Matching top-level categories
    pub categories: Vec<&'a Category>,
}

impl SearchResults<'_> {
    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.categories.is_empty()
    }
}

impl Catalog {
    /// Case-insensitive substring search over category and product names and
    /// descriptions. A blank query matches nothing.
    pub fn search(&self, query: &str) -> SearchResults<'_> {
        let query = query.trim().to_lowercase();

        if query.is_empty() {
            return SearchResults::default();
        }

        let matches = |name: &str, description: &str| {
            name.to_lowercase().contains(&query) || description.to_lowercase().contains(&query)
        };

        let categories = self
            .categories
            .iter()
            .filter(|category| matches(&category.name, &category.description))
            .take(MAX_CATEGORY_RESULTS)
            .collect();

        let products = self
            .categories
            .iter()
            .flat_map(|category| {
                category.subcategories.iter().flat_map(move |subcategory| {
                    self.products_in(&subcategory.slug)
                        .iter()
                        .map(move |product| ProductLocation {
                            category,
                            subcategory,
                            product,
                        })
                })
            })
            .filter(|location| matches(&location.product.name, &location.product.description))
            .take(MAX_PRODUCT_RESULTS)
            .collect();

        SearchResults {
            products,
            categories,
        }
    }
}
