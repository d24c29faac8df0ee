//! Cart Panel Component
//!
//! Lines of the current order with quantity controls and the total.

use leptos::prelude::*;
use pos_core::OrderDraft;

#[component]
pub fn CartPanel(draft: RwSignal<OrderDraft>) -> impl IntoView {
    let lines = move || draft.with(|d| d.cart.lines().to_vec());
    let total = move || draft.with(|d| d.cart.total().format_rupiah());

    view! {
        <section class="cart-panel">
            <h2>"Keranjang"</h2>
            <Show
                when=move || draft.with(|d| !d.cart.is_empty())
                fallback=|| view! { <p class="empty-state">"Belum ada menu dipilih."</p> }
            >
                <ul class="cart-lines">
                    {move || lines().into_iter().map(|line| {
                        let id = line.menu_item.id.clone();
                        let id_minus = id.clone();
                        let id_remove = id.clone();
                        view! {
                            <li class="cart-line">
                                <span class="line-name">{line.menu_item.name.clone()}</span>
                                <span class="line-price">{line.menu_item.price.format_rupiah()}</span>
                                <div class="qty-controls">
                                    <button on:click=move |_| draft.update(|d| d.cart.change_quantity(&id_minus, -1))>"-"</button>
                                    <span class="qty">{line.quantity}</span>
                                    <button on:click=move |_| draft.update(|d| d.cart.change_quantity(&id, 1))>"+"</button>
                                </div>
                                <span class="line-subtotal">{line.subtotal().format_rupiah()}</span>
                                <button class="delete-btn" on:click=move |_| draft.update(|d| d.cart.remove(&id_remove))>"×"</button>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
            <div class="cart-total">
                <span>"Total"</span>
                <strong>{total}</strong>
            </div>
        </section>
    }
}
