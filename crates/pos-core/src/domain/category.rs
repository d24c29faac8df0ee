//! Category Entity

use serde::{Deserialize, Serialize};

use super::entity::opaque_id;

opaque_id!(
    /// Backend identifier of a menu category
    CategoryId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Body of `POST /categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInput {
    pub name: String,
}

/// `GET /categories` response in any of the shapes the backend uses
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryListResponse {
    Categories { categories: Vec<Category> },
    Data { data: Vec<Category> },
    Bare(Vec<Category>),
}

impl CategoryListResponse {
    pub fn into_categories(self) -> Vec<Category> {
        match self {
            CategoryListResponse::Categories { categories } => categories,
            CategoryListResponse::Data { data } => data,
            CategoryListResponse::Bare(categories) => categories,
        }
    }
}

/// `POST /categories` response: the record itself or wrapped in `category`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CreatedCategory {
    Wrapped { category: Category },
    Bare(Category),
}

impl CreatedCategory {
    pub fn into_category(self) -> Category {
        match self {
            CreatedCategory::Wrapped { category } => category,
            CreatedCategory::Bare(category) => category,
        }
    }
}
