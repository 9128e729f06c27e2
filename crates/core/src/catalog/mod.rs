//! Catalog
//!
//! Read-only listing of categories, subcategories and the products sold under
//! each subcategory. The retailer's listing is embedded in the binary; other
//! listings can be parsed with [`Catalog::from_yaml`].

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing::{self, PriceError};

mod search;

pub use search::{MAX_CATEGORY_RESULTS, MAX_PRODUCT_RESULTS, SearchResults};

const FURNITURE_YAML: &str = include_str!("furniture.yaml");

/// Errors raised while loading a catalog listing.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// YAML parsing error
    #[error("failed to parse catalog: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Two products share the same identifier.
    #[error("duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Two subcategories share the same slug.
    #[error("duplicate subcategory slug: {0}")]
    DuplicateSubCategory(String),

    /// Products are listed under a subcategory slug no category declares.
    #[error("products listed under unknown subcategory: {0}")]
    UnknownSubCategory(String),

    /// A product is priced in a currency that is not a known ISO code.
    #[error("product {0} has an invalid currency")]
    Currency(String, #[source] PriceError),
}

/// Top-level category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description
    pub description: String,

    /// Image reference
    pub image: String,

    /// URL slug
    pub slug: String,

    /// Nested subcategories, possibly empty
    #[serde(default)]
    pub subcategories: Vec<SubCategory>,
}

/// Subcategory nested under a [`Category`]; products hang off subcategories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategory {
    /// Subcategory identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description
    pub description: String,

    /// Image reference
    pub image: String,

    /// URL slug
    pub slug: String,
}

/// Product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description
    pub description: String,

    /// Image reference
    pub image: String,

    /// Unit price in whole currency units
    pub price: u64,

    /// ISO currency code
    pub currency: String,
}

/// A product together with the category and subcategory it is listed under.
#[derive(Debug, Clone, Copy)]
pub struct ProductLocation<'a> {
    /// Owning category
    pub category: &'a Category,

    /// Owning subcategory
    pub subcategory: &'a SubCategory,

    /// The product itself
    pub product: &'a Product,
}

#[derive(Debug, Deserialize)]
struct CatalogListing {
    categories: Vec<Category>,

    #[serde(default)]
    products: FxHashMap<String, Vec<Product>>,
}

#[derive(Debug, Clone, Copy)]
struct SubCategoryPosition {
    category: usize,
    subcategory: usize,
}

#[derive(Debug, Clone)]
struct ProductPosition {
    subcategory: String,
    index: usize,
}

/// Catalog Store
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    products: FxHashMap<String, Vec<Product>>,
    subcategories: FxHashMap<String, SubCategoryPosition>,
    product_ids: FxHashMap<String, ProductPosition>,
}

impl Catalog {
    /// The retailer's furniture listing.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the embedded listing is malformed.
    pub fn furniture() -> Result<Self, CatalogError> {
        Self::from_yaml(FURNITURE_YAML)
    }

    /// Parse a catalog listing from YAML.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the YAML cannot be parsed, a product or
    /// subcategory identifier is duplicated, products reference an unknown
    /// subcategory, or a product currency is not a known ISO code.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let listing: CatalogListing = serde_norway::from_str(yaml)?;

        Self::from_listing(listing)
    }

    fn from_listing(listing: CatalogListing) -> Result<Self, CatalogError> {
        let mut subcategories = FxHashMap::default();

        for (category, parent) in listing.categories.iter().enumerate() {
            for (subcategory, child) in parent.subcategories.iter().enumerate() {
                let position = SubCategoryPosition {
                    category,
                    subcategory,
                };

                if subcategories.insert(child.slug.clone(), position).is_some() {
                    return Err(CatalogError::DuplicateSubCategory(child.slug.clone()));
                }
            }
        }

        let mut product_ids = FxHashMap::default();

        for (slug, products) in &listing.products {
            if !subcategories.contains_key(slug) {
                return Err(CatalogError::UnknownSubCategory(slug.clone()));
            }

            for (index, product) in products.iter().enumerate() {
                pricing::currency(&product.currency)
                    .map_err(|source| CatalogError::Currency(product.id.clone(), source))?;

                let position = ProductPosition {
                    subcategory: slug.clone(),
                    index,
                };

                if product_ids.insert(product.id.clone(), position).is_some() {
                    return Err(CatalogError::DuplicateProduct(product.id.clone()));
                }
            }
        }

        Ok(Self {
            categories: listing.categories,
            products: listing.products,
            subcategories,
            product_ids,
        })
    }

    /// All categories in listing order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Find a category by slug.
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.slug == slug)
    }

    /// Find a subcategory by its parent's slug and its own slug.
    pub fn subcategory(&self, category_slug: &str, slug: &str) -> Option<&SubCategory> {
        self.category(category_slug)?
            .subcategories
            .iter()
            .find(|subcategory| subcategory.slug == slug)
    }

    /// Products listed under a subcategory; empty for unknown slugs.
    pub fn products_in(&self, subcategory_slug: &str) -> &[Product] {
        self.products
            .get(subcategory_slug)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Find a product by identifier, along with where it is listed.
    pub fn product(&self, id: &str) -> Option<ProductLocation<'_>> {
        let position = self.product_ids.get(id)?;
        let product = self
            .products
            .get(&position.subcategory)?
            .get(position.index)?;

        let parents = self.subcategories.get(&position.subcategory)?;
        let category = self.categories.get(parents.category)?;
        let subcategory = category.subcategories.get(parents.subcategory)?;

        Some(ProductLocation {
            category,
            subcategory,
            product,
        })
    }

    /// Total number of products across all subcategories.
    pub fn product_count(&self) -> usize {
        self.product_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn furniture_listing_loads() -> TestResult {
        let catalog = Catalog::furniture()?;

        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(catalog.product_count(), 22);

        Ok(())
    }

    #[test]
    fn category_lookup_by_slug() -> TestResult {
        let catalog = Catalog::furniture()?;

        let interior = catalog.category("interior").ok_or("interior missing")?;

        assert_eq!(interior.name, "Interior");
        assert_eq!(interior.subcategories.len(), 4);
        assert!(catalog.category("garden-gnomes").is_none());

        Ok(())
    }

    #[test]
    fn subcategory_requires_matching_parent() -> TestResult {
        let catalog = Catalog::furniture()?;

        assert!(catalog.subcategory("interior", "wallpaper").is_some());
        assert!(catalog.subcategory("door", "wallpaper").is_none());

        Ok(())
    }

    #[test]
    fn product_lookup_returns_location() -> TestResult {
        let catalog = Catalog::furniture()?;

        let location = catalog.product("pd2").ok_or("pd2 missing")?;

        assert_eq!(location.product.name, "Premium Security PVC Door");
        assert_eq!(location.product.price, 45_000);
        assert_eq!(location.subcategory.slug, "pvc-door");
        assert_eq!(location.category.slug, "door");

        Ok(())
    }

    #[test]
    fn unknown_product_is_not_found() -> TestResult {
        let catalog = Catalog::furniture()?;

        assert!(catalog.product("nope").is_none());
        assert!(catalog.products_in("nope").is_empty());

        Ok(())
    }

    #[test]
    fn duplicate_product_ids_are_rejected() {
        let yaml = r"
categories:
  - { id: '1', name: A, description: a, image: a.jpg, slug: a,
      subcategories: [{ id: '1.1', name: B, description: b, image: b.jpg, slug: b }] }
products:
  b:
    - { id: x, name: X, description: x, image: x.jpg, price: 1, currency: PKR }
    - { id: x, name: Y, description: y, image: y.jpg, price: 2, currency: PKR }
";

        assert!(matches!(
            Catalog::from_yaml(yaml),
            Err(CatalogError::DuplicateProduct(id)) if id == "x"
        ));
    }

    #[test]
    fn products_under_unknown_subcategory_are_rejected() {
        let yaml = r"
categories:
  - { id: '1', name: A, description: a, image: a.jpg, slug: a }
products:
  ghost:
    - { id: x, name: X, description: x, image: x.jpg, price: 1, currency: PKR }
";

        assert!(matches!(
            Catalog::from_yaml(yaml),
            Err(CatalogError::UnknownSubCategory(slug)) if slug == "ghost"
        ));
    }

    #[test]
    fn unknown_currency_is_rejected() {
        let yaml = r"
categories:
  - { id: '1', name: A, description: a, image: a.jpg, slug: a,
      subcategories: [{ id: '1.1', name: B, description: b, image: b.jpg, slug: b }] }
products:
  b:
    - { id: x, name: X, description: x, image: x.jpg, price: 1, currency: DOUBLOONS }
";

        assert!(matches!(
            Catalog::from_yaml(yaml),
            Err(CatalogError::Currency(id, _)) if id == "x"
        ));
    }
}
