//! Add Category Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use pos_core::forms::{category_created_message, CategoryForm, CATEGORY_CREATE_FAILED};
use pos_core::Notice;

use crate::api;
use crate::context::use_app_context;
use crate::store::{store_add_category, use_pos_store};

#[component]
pub fn AddCategory() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_pos_store();
    let (name, set_name) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = match (CategoryForm { name: name.get() }).validate() {
            Ok(input) => input,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match api::client().create_category(&input).await {
                Ok(category) => {
                    ctx.notify(Notice::success(category_created_message(&input.name)));
                    store_add_category(&store, category);
                    set_name.set(String::new());
                }
                Err(e) => {
                    set_error.set(Some(e.user_message(CATEGORY_CREATE_FAILED)));
                    if e.is_unauthorized() {
                        ctx.session_ended();
                    }
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="add-category-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Nama kategori baru"
                prop:value=move || name.get()
                on:input=move |ev| {
                    set_name.set(event_target_value(&ev));
                    set_error.set(None);
                }
            />
            <button type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Menyimpan..." } else { "Tambah Kategori" }}
            </button>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
        </form>
    }
}
