//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use log::warn;
use pos_core::session::{guard, has_auth_cookie, Screen};
use pos_core::{ApiError, Notice, PosConfig};
use wasm_bindgen::JsCast;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Runtime configuration
    pub config: StoredValue<PosConfig>,
    /// Screen currently shown
    pub screen: RwSignal<Screen>,
    /// Whether a session is believed to exist
    pub logged_in: RwSignal<bool>,
    /// Toast currently shown, with a sequence number so repeats re-arm the timer
    pub notice: RwSignal<Option<(u64, Notice)>>,
}

impl AppContext {
    pub fn new(config: PosConfig) -> Self {
        let logged_in = has_auth_cookie(&document_cookie(), &config.auth_cookie_key);
        Self {
            config: StoredValue::new(config),
            screen: RwSignal::new(guard(Screen::Order, logged_in)),
            logged_in: RwSignal::new(logged_in),
            notice: RwSignal::new(None),
        }
    }

    /// Go to `screen`, or to login when it needs a session we don't have
    pub fn navigate(&self, screen: Screen) {
        self.screen.set(guard(screen, self.logged_in.get_untracked()));
    }

    pub fn session_started(&self) {
        self.logged_in.set(true);
        self.screen.set(Screen::Order);
    }

    pub fn session_ended(&self) {
        self.logged_in.set(false);
        self.screen.set(Screen::Login);
    }

    pub fn notify(&self, notice: Notice) {
        let seq = self.notice.get_untracked().map(|(seq, _)| seq + 1).unwrap_or(0);
        self.notice.set(Some((seq, notice)));
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }

    /// Show a failed call to the user; a 401 also ends the session
    pub fn report_error(&self, err: &ApiError, fallback: &str) {
        warn!("{}: {}", fallback, err);
        if err.is_unauthorized() {
            self.session_ended();
        }
        self.notify(Notice::error(err.user_message(fallback)));
    }
}

/// Get the app context from the component tree
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

fn document_cookie() -> String {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|document| document.cookie().ok())
        .unwrap_or_default()
}
