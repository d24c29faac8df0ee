//! Category endpoints

use pos_core::domain::{Category, CategoryId, CategoryInput, CategoryListResponse, CreatedCategory};
use pos_core::DomainResult;

use super::{item_path, RestClient};

impl RestClient {
    pub async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        let response: CategoryListResponse = self.get("/categories").await?;
        Ok(response.into_categories())
    }

    pub async fn create_category(&self, input: &CategoryInput) -> DomainResult<Category> {
        let created: CreatedCategory = self.post("/categories", input).await?;
        Ok(created.into_category())
    }

    pub async fn delete_category(&self, id: &CategoryId) -> DomainResult<()> {
        self.delete(&item_path("/categories", id.as_str())).await
    }
}
