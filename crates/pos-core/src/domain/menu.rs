//! Menu Entity
//!
//! A sellable product: name, price and an optional category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::CategoryId;
use super::entity::opaque_id;
use crate::money::Money;

opaque_id!(
    /// Backend identifier of a menu item
    MenuId
);

/// Filter option that shows every category
pub const ALL_CATEGORIES: &str = "Semua";
/// Display name for menus without a category
pub const UNCATEGORIZED: &str = "Lainnya";

/// A menu's category as the backend sends it: a bare name or a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Name(String),
    Record {
        #[serde(default)]
        id: Option<CategoryId>,
        name: String,
    },
}

impl CategoryRef {
    pub fn name(&self) -> &str {
        match self {
            CategoryRef::Name(name) => name,
            CategoryRef::Record { name, .. } => name,
        }
    }
}

/// A menu item (immutable as received from the backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuId,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

impl MenuItem {
    pub fn new(id: impl Into<MenuId>, name: impl Into<String>, price: impl Into<Money>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(CategoryRef::Name(category.into()));
        self
    }

    /// Category shown in lists, `"Lainnya"` when the menu has none
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(CategoryRef::name)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNCATEGORIZED)
    }
}

/// `GET /menus/search/items` response body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuSearchResponse {
    #[serde(default)]
    pub data: Vec<MenuItem>,
}

/// `GET /menus` response: wrapped in `data`/`menus` or a bare array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MenuListResponse {
    Data { data: Vec<MenuItem> },
    Menus { menus: Vec<MenuItem> },
    Bare(Vec<MenuItem>),
}

impl MenuListResponse {
    pub fn into_menus(self) -> Vec<MenuItem> {
        match self {
            MenuListResponse::Data { data } => data,
            MenuListResponse::Menus { menus } => menus,
            MenuListResponse::Bare(menus) => menus,
        }
    }
}

/// Body for creating or updating a menu
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuInput {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
}

/// Filter options: `"Semua"` followed by each category in first-seen order
pub fn category_options(menus: &[MenuItem]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for menu in menus {
        let name = menu.category_name();
        if !options.iter().any(|existing| existing == name) {
            options.push(name.to_string());
        }
    }
    options
}

/// Menus in the selected category (`"Semua"` keeps everything)
pub fn filter_by_category(menus: &[MenuItem], selected: &str) -> Vec<MenuItem> {
    if selected == ALL_CATEGORIES {
        return menus.to_vec();
    }
    menus
        .iter()
        .filter(|menu| menu.category_name() == selected)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menus() -> Vec<MenuItem> {
        vec![
            MenuItem::new("1", "Nasi Goreng", 20000).with_category("Makanan"),
            MenuItem::new("2", "Es Teh", 5000).with_category("Minuman"),
            MenuItem::new("3", "Kerupuk", 2000),
            MenuItem::new("4", "Mie Goreng", 18000).with_category("Makanan"),
        ]
    }

    #[test]
    fn test_menu_from_backend_json() {
        let json = r#"{"id": 7, "name": "Es Jeruk", "price": "7000.00", "category": {"id": "c1", "name": "Minuman"}}"#;
        let menu: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(menu.id.as_str(), "7");
        assert_eq!(menu.price, Money::from(7000));
        assert_eq!(menu.category_name(), "Minuman");
    }

    #[test]
    fn test_category_name_fallback() {
        let menu = MenuItem::new("1", "Kerupuk", 2000);
        assert_eq!(menu.category_name(), UNCATEGORIZED);
    }

    #[test]
    fn test_category_options_unique_in_order() {
        assert_eq!(category_options(&menus()), vec!["Semua", "Makanan", "Minuman", "Lainnya"]);
    }

    #[test]
    fn test_filter_by_category() {
        let all = menus();
        assert_eq!(filter_by_category(&all, ALL_CATEGORIES).len(), 4);

        let food = filter_by_category(&all, "Makanan");
        assert_eq!(food.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(), vec!["Nasi Goreng", "Mie Goreng"]);

        assert_eq!(filter_by_category(&all, "Lainnya").len(), 1);
    }

    #[test]
    fn test_list_response_shapes() {
        let wrapped: MenuListResponse = serde_json::from_str(r#"{"data":[{"id":"a","name":"X","price":1}]}"#).unwrap();
        let bare: MenuListResponse = serde_json::from_str(r#"[{"id":"a","name":"X","price":1}]"#).unwrap();
        assert_eq!(wrapped.into_menus().len(), 1);
        assert_eq!(bare.into_menus().len(), 1);
    }
}
