//! Order Entry Screen
//!
//! Customer details, menu search, cart and payment method for one
//! transaction, and its submission.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;
use pos_core::domain::MenuItem;
use pos_core::{Notice, OrderDraft, PaymentMethod};

use crate::api;
use crate::components::{CartPanel, MenuSearch};
use crate::context::use_app_context;

#[component]
pub fn OrderEntry() -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(OrderDraft::new());

    let add_to_cart = Callback::new(move |item: MenuItem| {
        info!("adding {} to cart", item.name);
        draft.update(|d| d.cart.add_item(item));
    });

    let submit = move |_| {
        let Some(started) = draft.try_update(|d| d.begin_submit()) else {
            return;
        };
        let payload = match started {
            Ok(payload) => payload,
            Err(e) => {
                ctx.notify(Notice::error(e.to_string()));
                return;
            }
        };
        spawn_local(async move {
            let result = api::client().post_transaction(&payload).await;
            if matches!(&result, Err(e) if e.is_unauthorized()) {
                ctx.session_ended();
            }
            if let Some(notice) = draft.try_update(|d| d.finish_submit(result)) {
                ctx.notify(notice);
            }
        });
    };

    view! {
        <div class="order-entry">
            <section class="customer-info">
                <h2>"Pesanan Baru"</h2>
                <input
                    type="text"
                    placeholder="Nama pelanggan"
                    prop:value=move || draft.with(|d| d.customer_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.customer_name = value);
                    }
                />
                <textarea
                    placeholder="Catatan"
                    prop:value=move || draft.with(|d| d.customer_note.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.customer_note = value);
                    }
                ></textarea>
            </section>

            <MenuSearch on_select=add_to_cart />

            <CartPanel draft=draft />

            <section class="payment">
                <label for="payment-method">"Metode Pembayaran"</label>
                <select
                    id="payment-method"
                    prop:value=move || draft.with(|d| d.payment_method.map(|m| m.as_str()).unwrap_or(""))
                    on:change=move |ev| {
                        let method = PaymentMethod::parse(&event_target_value(&ev));
                        draft.update(|d| d.payment_method = method);
                    }
                >
                    <option value="">"Belum Dipilih"</option>
                    {PaymentMethod::ALL.into_iter().map(|method| view! {
                        <option value=method.as_str()>{method.label()}</option>
                    }).collect_view()}
                </select>
            </section>

            <button
                type="button"
                class="submit-btn"
                disabled=move || draft.with(|d| d.is_submitting())
                on:click=submit
            >
                {move || if draft.with(|d| d.is_submitting()) { "Memproses..." } else { "Buat Transaksi" }}
            </button>
        </div>
    }
}
