//! Transaction List Screen

use leptos::prelude::*;
use leptos::task::spawn_local;
use pos_core::domain::TransactionRecord;
use pos_core::format::format_date;

use crate::api;
use crate::context::use_app_context;

const LOAD_FAILED: &str = "Gagal memuat data transaksi.";

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let ctx = use_app_context();
    let (records, set_records) = signal(Vec::<TransactionRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::client().list_transactions().await {
                Ok(loaded) => {
                    set_error.set(None);
                    set_records.set(loaded);
                }
                Err(e) => {
                    set_error.set(Some(e.user_message(LOAD_FAILED)));
                    if e.is_unauthorized() {
                        ctx.session_ended();
                    }
                }
            }
            set_loading.set(false);
        });
    };
    load();

    view! {
        <div class="transactions-page">
            <header class="page-header">
                <h1>"Riwayat Transaksi"</h1>
                <button class="refresh-btn" on:click=move |_| load()>"Muat Ulang"</button>
            </header>
            {move || {
                if loading.get() {
                    return view! { <p class="loading">"Memuat transaksi..."</p> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! { <p class="form-error">{message}</p> }.into_any();
                }
                let list = records.get();
                if list.is_empty() {
                    return view! { <p class="empty-state">"Belum ada transaksi."</p> }.into_any();
                }
                view! {
                    <div class="transaction-grid">
                        {list.into_iter().map(|record| view! { <TransactionCard record=record /> }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}

#[component]
fn TransactionCard(record: TransactionRecord) -> impl IntoView {
    view! {
        <article class="transaction-card">
            <header>
                <h3>{record.customer_label().to_string()}</h3>
                <span class=record.status.badge_class()>{record.status.to_string()}</span>
            </header>
            <p class="transaction-id" title=record.id.to_string()>"ID: " {record.id.short()}</p>
            <dl>
                <dt>"Total"</dt>
                <dd>{record.total_amount.format_rupiah()}</dd>
                <dt>"Pembayaran"</dt>
                <dd>{record.payment_label().to_string()}</dd>
                <dt>"Tanggal"</dt>
                <dd>{format_date(record.created_at.as_ref())}</dd>
                <dt>"Catatan"</dt>
                <dd>{record.note_label().to_string()}</dd>
            </dl>
        </article>
    }
}
