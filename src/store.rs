//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use pos_core::domain::{Category, CategoryId, MenuId, MenuItem, UserProfile};
use reactive_stores::Store;

/// Backend data shared across screens
#[derive(Clone, Debug, Default, Store)]
pub struct PosState {
    /// Full menu list for the Menu screen
    pub menus: Vec<MenuItem>,
    pub categories: Vec<Category>,
    /// Signed-in user, once `/auth/profile` answered
    pub profile: Option<UserProfile>,
}

/// Type alias for the store
pub type PosStore = Store<PosState>;

/// Get the store from context
pub fn use_pos_store() -> PosStore {
    expect_context::<PosStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_menus(store: &PosStore, menus: Vec<MenuItem>) {
    store.menus().set(menus);
}

pub fn store_remove_menu(store: &PosStore, id: &MenuId) {
    store.menus().write().retain(|menu| &menu.id != id);
}

pub fn store_set_categories(store: &PosStore, categories: Vec<Category>) {
    store.categories().set(categories);
}

pub fn store_add_category(store: &PosStore, category: Category) {
    store.categories().write().push(category);
}

pub fn store_remove_category(store: &PosStore, id: &CategoryId) {
    store.categories().write().retain(|category| &category.id != id);
}

pub fn store_set_profile(store: &PosStore, profile: Option<UserProfile>) {
    store.profile().set(profile);
}

/// Forget everything tied to the previous session
pub fn store_reset(store: &PosStore) {
    store.set(PosState::default());
}
