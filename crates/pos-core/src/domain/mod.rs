//! Domain Layer
//!
//! Entities exchanged with the REST backend. Read-only on the client:
//! whatever the backend sends is what the screens show.

pub(crate) mod entity;
mod menu;
mod category;
mod transaction;
mod user;
mod report;

pub use menu::{
    category_options, filter_by_category, MenuId, MenuInput, MenuItem, MenuListResponse,
    MenuSearchResponse, CategoryRef, ALL_CATEGORIES, UNCATEGORIZED,
};
pub use category::{Category, CategoryId, CategoryInput, CategoryListResponse, CreatedCategory};
pub use transaction::{
    CreatedTransaction, TransactionId, TransactionListResponse, TransactionRecord,
    TransactionStatus,
};
pub use user::{ProfileResponse, ProfileUpdate, StoreInfo, UserId, UserProfile};
pub use report::{CategoryShare, DailySales, ReportPeriod, ReportTotals, SalesReport, SalesReportResponse};
