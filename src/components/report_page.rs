//! Sales Report Screen
//!
//! Period selector, summary cards, revenue trend bars, category shares and
//! the daily detail table.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pos_core::domain::{ReportPeriod, SalesReport};
use pos_core::RequestSequence;

use crate::api;
use crate::context::use_app_context;

const DETAIL_DAYS: usize = 7;

#[component]
pub fn ReportPage() -> impl IntoView {
    let ctx = use_app_context();
    let (period, set_period) = signal(ReportPeriod::default());
    let (report, set_report) = signal(SalesReport::default());
    let (loading, set_loading) = signal(false);
    // A period switch makes the reply for the previous period stale
    let requests = StoredValue::new(RequestSequence::new());

    Effect::new(move |_| {
        let selected = period.get();
        let Some(token) = requests.try_update_value(|seq| seq.issue()) else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let result = api::client().sales_report(selected).await;
            if !requests.with_value(|seq| seq.is_current(token)) {
                log::debug!("dropping stale {:?} report {}", selected, token);
                return;
            }
            match result {
                Ok(loaded) => set_report.set(loaded),
                Err(e) => ctx.report_error(&e, "Gagal memuat laporan."),
            }
            set_loading.set(false);
        });
    });

    let totals = move || report.with(SalesReport::totals);

    view! {
        <div class="report-page">
            <header class="page-header">
                <h1>"Laporan Penjualan"</h1>
                <div class="period-tabs">
                    {ReportPeriod::ALL.into_iter().map(|option| view! {
                        <button
                            class=move || if period.get() == option { "period-btn active" } else { "period-btn" }
                            on:click=move |_| set_period.set(option)
                        >
                            {option.label()}
                        </button>
                    }).collect_view()}
                </div>
            </header>

            <Show when=move || loading.get()>
                <p class="loading">"Memuat laporan..."</p>
            </Show>

            <section class="summary-cards">
                <div class="summary-card">
                    <span>"Total Pendapatan"</span>
                    <strong>{move || totals().revenue.format_rupiah()}</strong>
                </div>
                <div class="summary-card">
                    <span>"Total Pelanggan"</span>
                    <strong>{move || totals().customers}</strong>
                </div>
                <div class="summary-card">
                    <span>"Total Transaksi"</span>
                    <strong>{move || totals().transactions}</strong>
                </div>
                <div class="summary-card">
                    <span>"Rata-rata per Transaksi"</span>
                    <strong>{move || totals().average_per_transaction.format_rupiah()}</strong>
                </div>
            </section>

            <section class="trend">
                <h2>"Tren Pendapatan"</h2>
                <div class="trend-bars">
                    {move || report.with(|r| {
                        let peak = r.peak_revenue();
                        r.daily.iter().map(|day| {
                            let height = format!("height: {:.1}%", day.revenue.ratio_of(peak) * 100.0);
                            view! {
                                <div class="trend-bar" style=height title=day.revenue.format_rupiah()>
                                    <span class="trend-label">{day.day_label()}</span>
                                </div>
                            }
                        }).collect_view()
                    })}
                </div>
            </section>

            <section class="category-shares">
                <h2>"Penjualan per Kategori"</h2>
                <ul>
                    {move || report.with(|r| r.categories.iter().map(|share| view! {
                        <li>
                            <span>{share.name.clone()}</span>
                            <span>{format!("{}%", share.value.normalize())}</span>
                        </li>
                    }).collect_view())}
                </ul>
            </section>

            <section class="daily-detail">
                <h2>"Detail Harian"</h2>
                <table>
                    <thead>
                        <tr>
                            <th>"Tanggal"</th>
                            <th>"Pendapatan"</th>
                            <th>"Pelanggan"</th>
                            <th>"Transaksi"</th>
                            <th>"Rata-rata"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || report.with(|r| r.recent_days(DETAIL_DAYS)).into_iter().map(|day| view! {
                            <tr>
                                <td>{day.day_label()}</td>
                                <td>{day.revenue.format_rupiah()}</td>
                                <td>{day.customers}</td>
                                <td>{day.transactions}</td>
                                <td>{day.average_per_transaction().format_rupiah()}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
