//! Elaina POS Frontend App
//!
//! Navigation bar on top, one screen below, toast overlay.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info};
use pos_core::session::Screen;
use pos_core::PosConfig;

use crate::api;
use crate::components::{AccountPage, LoginPage, MenuPage, Navbar, OrderEntry, ReportPage, Toast, TransactionsPage};
use crate::context::AppContext;
use crate::store::{store_reset, store_set_profile, PosState, PosStore};

#[component]
pub fn App(config: PosConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    let store = PosStore::new(PosState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Profile doubles as the session probe: it also catches HttpOnly cookies
    Effect::new(move |_| {
        if !ctx.logged_in.get() {
            store_reset(&store);
            return;
        }
        spawn_local(async move {
            match api::client().fetch_profile().await {
                Ok(profile) => {
                    debug!("profile loaded: {:?}", profile.as_ref().map(|p| p.email.as_str()));
                    store_set_profile(&store, profile);
                }
                Err(e) if e.is_unauthorized() => {
                    info!("session rejected by backend");
                    ctx.session_ended();
                }
                Err(e) => debug!("profile unavailable: {}", e),
            }
        });
    });

    // Logged-out visitors may still have a valid session the cookie check can't see
    if !ctx.logged_in.get_untracked() {
        spawn_local(async move {
            if let Ok(Some(profile)) = api::client().fetch_profile().await {
                store_set_profile(&store, Some(profile));
                ctx.session_started();
            }
        });
    }

    view! {
        <div class="app-layout">
            <Show when=move || ctx.screen.get() != Screen::Login>
                <Navbar />
            </Show>

            <main class="main-content">
                {move || match ctx.screen.get() {
                    Screen::Order => view! { <OrderEntry /> }.into_any(),
                    Screen::Transactions => view! { <TransactionsPage /> }.into_any(),
                    Screen::Menu => view! { <MenuPage /> }.into_any(),
                    Screen::Report => view! { <ReportPage /> }.into_any(),
                    Screen::Account => view! { <AccountPage /> }.into_any(),
                    Screen::Login => view! { <LoginPage /> }.into_any(),
                }}
            </main>

            <Toast />
        </div>
    }
}
