//! Menu Management Screen
//!
//! Menu list with category filter, create/edit form, and the category
//! list with its add form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;
use pos_core::domain::{category_options, filter_by_category, Category, MenuId, MenuItem, ALL_CATEGORIES};
use pos_core::forms::MenuForm;
use pos_core::Notice;

use crate::api;
use crate::components::{AddCategory, DeleteConfirmButton};
use crate::context::{use_app_context, AppContext};
use crate::store::{
    store_remove_category, store_remove_menu, store_set_categories, store_set_menus, use_pos_store,
    PosStateStoreFields, PosStore,
};

fn reload_menus(ctx: AppContext, store: PosStore) {
    spawn_local(async move {
        match api::client().list_menus().await {
            Ok(menus) => {
                debug!("loaded {} menus", menus.len());
                store_set_menus(&store, menus);
            }
            Err(e) => ctx.report_error(&e, "Gagal memuat menu."),
        }
    });
}

fn reload_categories(ctx: AppContext, store: PosStore) {
    spawn_local(async move {
        match api::client().list_categories().await {
            Ok(categories) => store_set_categories(&store, categories),
            Err(e) => ctx.report_error(&e, "Gagal memuat kategori."),
        }
    });
}

#[component]
pub fn MenuPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_pos_store();
    let (selected_category, set_selected_category) = signal(ALL_CATEGORIES.to_string());
    let (show_form, set_show_form) = signal(false);
    let editing = RwSignal::new(None::<MenuId>);

    reload_menus(ctx, store);
    reload_categories(ctx, store);

    let filter_options = move || store.menus().with(|menus| category_options(menus));
    let visible_menus = move || {
        let selected = selected_category.get();
        store.menus().with(|menus| filter_by_category(menus, &selected))
    };

    let start_edit = move |menu: MenuItem| {
        editing.set(Some(menu.id.clone()));
        set_show_form.set(true);
    };

    let delete_menu = move |id: MenuId| {
        spawn_local(async move {
            match api::client().delete_menu(&id).await {
                Ok(()) => {
                    store_remove_menu(&store, &id);
                    reload_menus(ctx, store);
                }
                Err(e) => ctx.report_error(&e, "Gagal menghapus menu."),
            }
        });
    };

    let delete_category = move |category: Category| {
        spawn_local(async move {
            match api::client().delete_category(&category.id).await {
                Ok(()) => {
                    store_remove_category(&store, &category.id);
                    ctx.notify(Notice::success(format!("Kategori \"{}\" dihapus.", category.name)));
                }
                Err(e) => ctx.report_error(&e, "Gagal menghapus kategori."),
            }
        });
    };

    view! {
        <div class="menu-page">
            <header class="page-header">
                <h1>"Daftar Menu"</h1>
                <button
                    class="toggle-form-btn"
                    on:click=move |_| {
                        editing.set(None);
                        set_show_form.update(|shown| *shown = !*shown);
                    }
                >
                    {move || if show_form.get() { "Tutup Form" } else { "Buat Menu Baru" }}
                </button>
            </header>

            <Show when=move || show_form.get()>
                <MenuFormPanel
                    editing=editing
                    on_saved=Callback::new(move |_| {
                        set_show_form.set(false);
                        editing.set(None);
                        reload_menus(ctx, store);
                    })
                />
            </Show>

            <select
                class="category-filter"
                prop:value=move || selected_category.get()
                on:change=move |ev| set_selected_category.set(event_target_value(&ev))
            >
                {move || filter_options().into_iter().map(|option| view! {
                    <option value=option.clone()>{option.clone()}</option>
                }).collect_view()}
            </select>

            <Show
                when=move || !visible_menus().is_empty()
                fallback=|| view! { <p class="empty-state">"Belum ada menu."</p> }
            >
                <div class="menu-grid">
                    {move || visible_menus().into_iter().map(|menu| {
                        let for_edit = menu.clone();
                        let id = menu.id.clone();
                        view! {
                            <div class="menu-card">
                                <h3>{menu.name.clone()}</h3>
                                <p class="menu-category">{menu.category_name().to_string()}</p>
                                <p class="menu-price">{menu.price.format_rupiah()}</p>
                                <div class="menu-actions">
                                    <button class="edit-btn" on:click=move |_| start_edit(for_edit.clone())>"Edit"</button>
                                    <DeleteConfirmButton on_confirm=move |_| delete_menu(id.clone()) />
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>

            <section class="category-section">
                <h2>"Kategori"</h2>
                <AddCategory />
                <ul class="category-list">
                    {move || store.categories().get().into_iter().map(|category| {
                        let name = category.name.clone();
                        view! {
                            <li class="category-item">
                                <span>{name}</span>
                                <DeleteConfirmButton label="×" on_confirm=move |_| delete_category(category.clone()) />
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </section>
        </div>
    }
}

/// Create form, or edit form when `editing` holds a menu id
#[component]
fn MenuFormPanel(editing: RwSignal<Option<MenuId>>, #[prop(into)] on_saved: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_pos_store();
    let form = RwSignal::new(MenuForm::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    // Prefill whenever the edited menu changes
    Effect::new(move |_| {
        let prefill = editing.get().and_then(|id| {
            store.menus().with_untracked(|menus| menus.iter().find(|menu| menu.id == id).map(MenuForm::from_menu))
        });
        form.set(prefill.unwrap_or_default());
        set_error.set(None);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = match form.with(MenuForm::validate) {
            Ok(input) => input,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_saving.set(true);
        let target = editing.get_untracked();
        spawn_local(async move {
            let client = api::client();
            let result = match &target {
                Some(id) => client.update_menu(id, &input).await,
                None => client.create_menu(&input).await,
            };
            set_saving.set(false);
            match result {
                Ok(()) => {
                    let message = if target.is_some() { "Menu berhasil diperbarui!" } else { "Menu berhasil dibuat!" };
                    ctx.notify(Notice::success(message));
                    form.update(MenuForm::reset);
                    on_saved.run(());
                }
                Err(e) => {
                    let fallback = if target.is_some() { "Gagal memperbarui menu. Coba lagi." } else { "Gagal membuat menu. Coba lagi." };
                    set_error.set(Some(e.user_message(fallback)));
                    if e.is_unauthorized() {
                        ctx.session_ended();
                    }
                }
            }
        });
    };

    let category_names = move || {
        store
            .categories()
            .with(|categories| categories.iter().map(|category| category.name.clone()).collect::<Vec<_>>())
    };

    view! {
        <form class="menu-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Nama menu"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.name = value);
                    set_error.set(None);
                }
            />
            <input
                type="text"
                inputmode="decimal"
                placeholder="Harga"
                prop:value=move || form.with(|f| f.price.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.price = value);
                    set_error.set(None);
                }
            />
            <input
                type="text"
                list="category-names"
                placeholder="Kategori"
                prop:value=move || form.with(|f| f.category.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.category = value);
                    set_error.set(None);
                }
            />
            <datalist id="category-names">
                {move || category_names().into_iter().map(|name| view! { <option value=name /> }).collect_view()}
            </datalist>
            <button type="submit" disabled=move || saving.get()>
                {move || match (saving.get(), editing.get().is_some()) {
                    (true, _) => "Menyimpan...",
                    (false, true) => "Simpan Perubahan",
                    (false, false) => "Buat Menu",
                }}
            </button>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
        </form>
    }
}
