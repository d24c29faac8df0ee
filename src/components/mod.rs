//! UI Components
//!
//! Screens and the reusable pieces they are built from.

mod account_page;
mod add_category;
mod cart_panel;
mod delete_confirm_button;
mod login_page;
mod menu_page;
mod menu_search;
mod navbar;
mod order_entry;
mod report_page;
mod toast;
mod transactions_page;

pub use account_page::AccountPage;
pub use add_category::AddCategory;
pub use cart_panel::CartPanel;
pub use delete_confirm_button::DeleteConfirmButton;
pub use login_page::LoginPage;
pub use menu_page::MenuPage;
pub use menu_search::MenuSearch;
pub use navbar::Navbar;
pub use order_entry::OrderEntry;
pub use report_page::ReportPage;
pub use toast::Toast;
pub use transactions_page::TransactionsPage;
