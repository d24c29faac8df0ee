//! Login Screen
//!
//! Login, owner registration and staff registration share one form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;
use pos_core::forms::{AuthForm, AuthMode};
use pos_core::Notice;

use crate::api;
use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(AuthForm::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let mode = move || form.with(AuthForm::mode);

    let switch_mode = move |next: AuthMode| {
        form.update(|f| f.switch_mode(next));
        set_error.set(None);
        set_loading.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = match form.with(AuthForm::validate) {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);
        set_loading.set(true);
        spawn_local(async move {
            let result = api::client().authenticate(&request).await;
            set_loading.set(false);
            match result {
                Ok(()) if request.is_login() => {
                    info!("signed in");
                    ctx.session_started();
                }
                Ok(()) => {
                    ctx.notify(Notice::success("Registrasi berhasil! Silakan login."));
                    switch_mode(AuthMode::Login);
                }
                Err(e) => {
                    let fallback = if request.is_login() { "Invalid email or password" } else { "Registration failed" };
                    set_error.set(Some(e.user_message(fallback)));
                }
            }
        });
    };

    // Text field bound to one `AuthForm` field
    let field = move |label: &'static str, kind: &'static str, get: fn(&AuthForm) -> &String, set: fn(&mut AuthForm, String)| {
        view! {
            <label class="auth-field">
                {label}
                <input
                    type=kind
                    prop:value=move || form.with(|f| get(f).clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                        set_error.set(None);
                    }
                />
            </label>
        }
    };

    view! {
        <div class="login-page">
            <div class="auth-card">
                <h1>{move || mode().title()}</h1>
                <p class="auth-subtitle">{move || mode().subtitle()}</p>

                <div class="mode-tabs">
                    {AuthMode::ALL.into_iter().map(|option| view! {
                        <button
                            type="button"
                            class=move || if mode() == option { "mode-btn active" } else { "mode-btn" }
                            on:click=move |_| switch_mode(option)
                        >
                            {option.tab_label()}
                        </button>
                    }).collect_view()}
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode().is_register()>
                        {field("Name", "text", |f| &f.name, |f, v| f.name = v)}
                    </Show>
                    <Show when=move || mode() == AuthMode::RegisterOwner>
                        {field("Store Name", "text", |f| &f.store_name, |f, v| f.store_name = v)}
                    </Show>
                    {field("Email", "email", |f| &f.email, |f, v| f.email = v)}
                    {field("Password", "password", |f| &f.password, |f, v| f.password = v)}
                    <Show when=move || mode().is_register()>
                        {field("Confirm Password", "password", |f| &f.confirm_password, |f, v| f.confirm_password = v)}
                    </Show>
                    <Show when=move || mode() == AuthMode::RegisterStaff>
                        {field("Referral Code", "text", |f| &f.referral_code, |f, v| f.referral_code = v)}
                    </Show>

                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                    <button type="submit" class="submit-btn" disabled=move || loading.get()>
                        {move || if loading.get() { "Please wait..." } else { mode().submit_label() }}
                    </button>
                </form>
            </div>
        </div>
    }
}
