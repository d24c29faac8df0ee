//! Toast Component
//!
//! Shows the current notice and hides it after the configured duration.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_app_context();
    // Dropping a Timeout cancels it, so replacing it re-arms the countdown
    let timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let shown = ctx.notice.get().is_some();
        let timeout = shown.then(|| {
            let millis = ctx.config.with_value(|config| config.toast_duration_ms);
            Timeout::new(millis, move || ctx.dismiss_notice())
        });
        timer.set_value(timeout);
    });

    view! {
        {move || ctx.notice.get().map(|(_, notice)| view! {
            <div class=notice.kind.css_class() role="status">
                <span class="toast-message">{notice.message.clone()}</span>
                <button class="toast-close" on:click=move |_| ctx.dismiss_notice()>"×"</button>
            </div>
        })}
    }
}
