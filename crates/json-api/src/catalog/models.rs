//! Catalog response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use showroom::{
    catalog::{Category, Product, ProductLocation, SubCategory},
    pricing::{self, PriceError},
};

/// Category Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
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

    /// Nested subcategories
    pub subcategories: Vec<SubCategoryResponse>,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            description: category.description.clone(),
            image: category.image.clone(),
            slug: category.slug.clone(),
            subcategories: category
                .subcategories
                .iter()
                .map(SubCategoryResponse::from)
                .collect(),
        }
    }
}

/// Subcategory Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubCategoryResponse {
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

impl From<&SubCategory> for SubCategoryResponse {
    fn from(subcategory: &SubCategory) -> Self {
        Self {
            id: subcategory.id.clone(),
            name: subcategory.name.clone(),
            description: subcategory.description.clone(),
            image: subcategory.image.clone(),
            slug: subcategory.slug.clone(),
        }
    }
}

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
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

    /// Price formatted for display
    pub display_price: String,
}

impl TryFrom<&Product> for ProductResponse {
    type Error = PriceError;

    fn try_from(product: &Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            price: product.price,
            currency: product.currency.clone(),
            display_price: pricing::format_price(product.price)?,
        })
    }
}

/// A product with the slugs needed to build its breadcrumb.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ListedProductResponse {
    /// The product
    pub product: ProductResponse,

    /// Owning category slug
    pub category_slug: String,

    /// Owning category name
    pub category_name: String,

    /// Owning subcategory slug
    pub subcategory_slug: String,

    /// Owning subcategory name
    pub subcategory_name: String,
}

impl TryFrom<ProductLocation<'_>> for ListedProductResponse {
    type Error = PriceError;

    fn try_from(location: ProductLocation<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            product: location.product.try_into()?,
            category_slug: location.category.slug.clone(),
            category_name: location.category.name.clone(),
            subcategory_slug: location.subcategory.slug.clone(),
            subcategory_name: location.subcategory.name.clone(),
        })
    }
}
