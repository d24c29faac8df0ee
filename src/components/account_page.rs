//! Account Screen
//!
//! Signed-in profile and its edit form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pos_core::forms::ProfileForm;
use pos_core::Notice;

use crate::api;
use crate::context::use_app_context;
use crate::store::{store_set_profile, use_pos_store, PosStateStoreFields};

#[component]
pub fn AccountPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_pos_store();
    let form = RwSignal::new(ProfileForm::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let (log_lines, set_log_lines) = signal(rolling_logger::recent_lines());

    Effect::new(move |_| {
        if let Some(profile) = store.profile().get() {
            form.set(ProfileForm::from_profile(&profile));
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let update = match form.with(ProfileForm::validate) {
            Ok(update) => update,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let client = api::client();
            match client.update_profile(&update).await {
                Ok(()) => {
                    ctx.notify(Notice::success("Profil berhasil diperbarui."));
                    match client.fetch_profile().await {
                        Ok(profile) => store_set_profile(&store, profile),
                        Err(e) => log::warn!("profile refresh failed: {}", e),
                    }
                }
                Err(e) => {
                    set_error.set(Some(e.user_message("Gagal memperbarui profil.")));
                    if e.is_unauthorized() {
                        ctx.session_ended();
                    }
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="account-page">
            <h1>"Akun"</h1>
            {move || store.profile().get().map(|profile| view! {
                <section class="profile-summary">
                    <p><strong>{profile.name.clone()}</strong></p>
                    <p>{profile.email.clone()}</p>
                    <p>"Toko: " {profile.store_name().to_string()}</p>
                    {profile.role.clone().map(|role| view! { <p>"Peran: " {role}</p> })}
                    {profile.store.as_ref().and_then(|store| store.referral_code.clone()).filter(|_| profile.is_owner()).map(|code| view! {
                        <p class="referral-code">"Kode referral staff: " <code>{code}</code></p>
                    })}
                </section>
            })}

            <form class="profile-form" on:submit=on_submit>
                <label>
                    "Nama"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.name = value);
                        }
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.email = value);
                        }
                    />
                </label>
                <button type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Menyimpan..." } else { "Simpan" }}
                </button>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            </form>

            <details class="activity-log">
                <summary>"Log aktivitas"</summary>
                <button type="button" on:click=move |_| set_log_lines.set(rolling_logger::recent_lines())>
                    "Muat ulang"
                </button>
                <pre>{move || log_lines.get().join("\n")}</pre>
            </details>
        </div>
    }
}
