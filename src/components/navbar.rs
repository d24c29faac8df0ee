//! Navigation Bar Component
//!
//! Store name, screen links and the logout button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pos_core::session::Screen;
use pos_core::Notice;

use crate::api;
use crate::context::use_app_context;
use crate::store::{use_pos_store, PosStateStoreFields};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_pos_store();

    let store_name = move || {
        store
            .profile()
            .get()
            .map(|profile| profile.store_name().to_string())
            .unwrap_or_else(|| "Elaina POS".to_string())
    };

    let logout = move |_| {
        spawn_local(async move {
            // The local session ends either way; a failed call only means
            // the backend cookie outlives it
            if let Err(e) = api::client().logout().await {
                log::warn!("logout failed: {}", e);
            }
            ctx.session_ended();
            ctx.notify(Notice::info("Berhasil logout."));
        });
    };

    view! {
        <nav class="navbar">
            <span class="navbar-brand">{store_name}</span>
            <div class="navbar-links">
                {Screen::NAV.into_iter().map(|screen| view! {
                    <button
                        class=move || if ctx.screen.get() == screen { "nav-btn active" } else { "nav-btn" }
                        on:click=move |_| ctx.navigate(screen)
                    >
                        {screen.label()}
                    </button>
                }).collect_view()}
            </div>
            <button class="logout-btn" on:click=logout>"Logout"</button>
        </nav>
    }
}
