//! Menu Search Component
//!
//! Search-as-you-type input for the order screen. Lookups are debounced,
//! results are navigable with ArrowUp/ArrowDown/Enter and the list closes
//! on a click anywhere outside it.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pos_core::domain::MenuItem;
use pos_core::{NavKey, SearchEffect, SearchState};
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::use_app_context;

#[component]
pub fn MenuSearch(#[prop(into)] on_select: Callback<MenuItem>) -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(SearchState::new());
    // Only the latest keystroke's timer is kept; dropping one cancels it
    let timer = StoredValue::new_local(None::<Timeout>);
    let container = NodeRef::<leptos::html::Div>::new();

    let run_effect = move |effect: SearchEffect| {
        let SearchEffect::Fetch(request) = effect else {
            return;
        };
        spawn_local(async move {
            let response = request.execute(&api::client()).await;
            if matches!(&response.result, Err(e) if e.is_unauthorized()) {
                ctx.session_ended();
            }
            state.try_update(|s| s.resolve(response));
        });
    };

    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        let Some(ticket) = state.try_update(|s| s.set_query(text)) else {
            return;
        };
        let delay = ctx.config.with_value(|config| config.search_debounce_ms);
        let timeout = Timeout::new(delay, move || {
            if let Some(effect) = state.try_update(|s| s.debounce_elapsed(ticket)) {
                run_effect(effect);
            }
        });
        timer.set_value(Some(timeout));
    };

    let pick = move |item: Option<MenuItem>| {
        if let Some(item) = item {
            timer.set_value(None);
            on_select.run(item);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let Some(key) = NavKey::from_key(&ev.key()) else {
            return;
        };
        if !state.with_untracked(|s| s.is_open() && !s.results().is_empty()) {
            return;
        }
        ev.prevent_default();
        pick(state.try_update(|s| s.navigate(key)).flatten());
    };

    let outside_click = window_event_listener(leptos::ev::mousedown, move |ev| {
        let Some(container) = container.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !container.contains(target.as_ref()) {
            state.try_update(|s| s.dismiss());
        }
    });
    on_cleanup(move || outside_click.remove());

    let results_list = move || {
        let (open, results, highlighted) =
            state.with(|s| (s.is_open(), s.results().to_vec(), s.highlight_index()));
        if !open {
            return None;
        }
        if results.is_empty() {
            return Some(view! { <div class="autocomplete-empty">"Menu tidak ditemukan."</div> }.into_any());
        }
        Some(view! {
            <ul class="autocomplete-list" role="listbox">
                {results.into_iter().enumerate().map(|(i, item)| {
                    let price = item.price.format_rupiah();
                    view! {
                        <li
                            class=if i == highlighted { "autocomplete-item selected" } else { "autocomplete-item" }
                            role="option"
                            on:mousedown=move |ev| {
                                ev.prevent_default();
                                pick(state.try_update(|s| s.choose(i)).flatten());
                            }
                        >
                            <span class="item-name">{item.name.clone()}</span>
                            <span class="item-category">{item.category_name().to_string()}</span>
                            <span class="item-price">{price}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        }.into_any())
    };

    view! {
        <div class="menu-search" node_ref=container>
            <input
                type="text"
                class="search-input"
                placeholder="Cari menu..."
                autocomplete="off"
                prop:value=move || state.with(|s| s.query().to_string())
                on:input=on_input
                on:keydown=on_keydown
                on:focus=move |_| { state.try_update(|s| s.reopen()); }
            />
            <Show when=move || state.with(|s| s.is_loading())>
                <span class="search-loading">"Mencari..."</span>
            </Show>
            {move || state.with(|s| s.error().map(str::to_string)).map(|error| view! {
                <p class="search-error">{error}</p>
            })}
            {results_list}
        </div>
    }
}
