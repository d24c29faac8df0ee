//! Menu endpoints

use async_trait::async_trait;
use pos_core::domain::{MenuId, MenuInput, MenuItem, MenuListResponse, MenuSearchResponse};
use pos_core::gateway::MenuSearchGateway;
use pos_core::DomainResult;
use reqwest::Method;

use super::{item_path, read_json, send, RestClient};

impl RestClient {
    /// `GET /menus/search/items?q=<term>`
    pub async fn search_menus(&self, term: &str) -> DomainResult<Vec<MenuItem>> {
        let builder = self.request(Method::GET, "/menus/search/items").query(&[("q", term)]);
        let response: MenuSearchResponse = read_json(send(builder).await?).await?;
        Ok(response.data)
    }

    pub async fn list_menus(&self) -> DomainResult<Vec<MenuItem>> {
        let response: MenuListResponse = self.get("/menus").await?;
        Ok(response.into_menus())
    }

    pub async fn create_menu(&self, input: &MenuInput) -> DomainResult<()> {
        send(self.request(Method::POST, "/menus").json(input)).await.map(drop)
    }

    pub async fn update_menu(&self, id: &MenuId, input: &MenuInput) -> DomainResult<()> {
        self.put(&item_path("/menus", id.as_str()), input).await
    }

    pub async fn delete_menu(&self, id: &MenuId) -> DomainResult<()> {
        self.delete(&item_path("/menus", id.as_str())).await
    }
}

#[async_trait(?Send)]
impl MenuSearchGateway for RestClient {
    async fn search_menu_items(&self, term: &str) -> DomainResult<Vec<MenuItem>> {
        self.search_menus(term).await
    }
}
