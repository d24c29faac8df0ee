//! Elaina POS Core
//!
//! Layered like the front-end that consumes it:
//! - domain: entities exchanged with the REST backend
//! - cart / search / order: the order-entry state machines
//! - forms / session: client-side validation and the login gate
//! - gateway: async seams the UI implements over HTTP

pub mod config;
pub mod error;
pub mod money;
pub mod domain;
pub mod cart;
pub mod latest;
pub mod search;
pub mod order;
pub mod forms;
pub mod session;
pub mod notice;
pub mod format;
pub mod gateway;

pub use cart::{Cart, CartLine};
pub use config::PosConfig;
pub use error::{ApiError, DomainResult, ValidationError};
pub use money::Money;
pub use notice::{Notice, NoticeKind};
pub use forms::{AuthForm, AuthMode, AuthRequest, CategoryForm, MenuForm, ProfileForm};
pub use order::{submit_order, OrderDraft, OrderError, PaymentMethod};
pub use latest::{RequestSequence, RequestToken};
pub use search::{NavKey, SearchEffect, SearchState};
pub use session::Screen;
