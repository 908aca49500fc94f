//! Finance Report View
//!
//! Daily profit calculator, report saving, and the manager-only history.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::FINANCE_SHEET;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::format::{format_rupiah, today_stamp};
use crate::models::FinanceRecord;
use crate::store::{use_app_store, AppStateStoreFields};

/// Note stamped on every report saved from this client
const REPORT_NOTE: &str = "Laporan harian via aplikasi";

#[component]
pub fn FinanceView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (omzet, set_omzet) = signal(0i64);
    let (ops, set_ops) = signal(0i64);
    let (gaji, set_gaji) = signal(0i64);
    let (history, set_history) = signal(Vec::<FinanceRecord>::new());
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (reload, set_reload) = signal(0u32);

    let profit = Memo::new(move |_| omzet.get() - (ops.get() + gaji.get()));

    let is_manager = move || {
        store
            .session()
            .get()
            .map(|s| s.role.is_manager())
            .unwrap_or(false)
    };

    // History is manager-only; the call is skipped entirely otherwise
    Effect::new(move |_| {
        let _ = reload.get();
        let source = ctx.source.get();
        if !is_manager() {
            return;
        }
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match source.get_finance().await {
                Ok(records) => set_history.set(records),
                Err(err) => set_error.set(Some(format!("Gagal memuat riwayat keuangan: {err}"))),
            }
            set_loading.set(false);
        });
    });

    let numeric_input = move |set: WriteSignal<i64>| {
        move |ev: web_sys::Event| {
            let Some(target) = ev.target() else { return };
            let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else { return };
            set.set(input.value().parse().unwrap_or(0));
        }
    };

    let save = move |_| {
        let Some(user) = store.session().get_untracked() else {
            ctx.notify_error("Harap login!");
            return;
        };
        if omzet.get() == 0 {
            ctx.notify_error("Omzet masih 0?");
            return;
        }
        let record = FinanceRecord {
            id: None,
            date: today_stamp(),
            omzet: omzet.get(),
            ops: ops.get(),
            gaji: gaji.get(),
            profit: profit.get(),
            saved_by: user.name,
            note: REPORT_NOTE.to_string(),
        };
        let source = ctx.data_source();
        set_saving.set(true);
        spawn_local(async move {
            match source.add_finance(&record).await {
                Ok(ack) if ack.success => {
                    ctx.notify("Laporan tersimpan ke sheet!");
                    set_omzet.set(0);
                    set_ops.set(0);
                    set_gaji.set(0);
                    set_reload.update(|v| *v += 1);
                }
                Ok(_) => ctx.notify_error("Server menolak laporan"),
                Err(err) => {
                    web_sys::console::error_1(&format!("addFinance: {err}").into());
                    ctx.notify_error("Gagal menyimpan laporan. Cek koneksi.");
                }
            }
            set_saving.set(false);
        });
    };

    let delete_record = move |id: String| {
        if !is_manager() {
            ctx.notify_error("Hanya Manager yang bisa menghapus!");
            return;
        }
        let source = ctx.data_source();
        spawn_local(async move {
            match source.delete_data(FINANCE_SHEET, &id).await {
                Ok(ack) if ack.success => {
                    set_reload.update(|v| *v += 1);
                    ctx.notify("Laporan dihapus");
                }
                _ => ctx.notify_error("Gagal menghapus"),
            }
        });
    };

    let amount_value = move |amount: ReadSignal<i64>| {
        move || {
            let value = amount.get();
            if value == 0 { String::new() } else { value.to_string() }
        }
    };

    view! {
        <div class="view">
            <div class="view-header">
                <div>
                    <h2>"Laporan Keuangan"</h2>
                    <p class="muted">"Hitung dan simpan laporan ke Google Sheets."</p>
                </div>
            </div>

            <div class="card-grid">
                <div class="card">
                    <h3>"🧮 Simulator Laba Bersih"</h3>

                    <label>"Total omzet hari ini"</label>
                    <input
                        type="number"
                        class="amount-input large"
                        prop:value=amount_value(omzet)
                        on:input=numeric_input(set_omzet)
                    />

                    <div class="amount-row">
                        <div>
                            <label>"Biaya ops"</label>
                            <input
                                type="number"
                                class="amount-input"
                                prop:value=amount_value(ops)
                                on:input=numeric_input(set_ops)
                            />
                        </div>
                        <div>
                            <label>"Gaji/komisi"</label>
                            <input
                                type="number"
                                class="amount-input"
                                prop:value=amount_value(gaji)
                                on:input=numeric_input(set_gaji)
                            />
                        </div>
                    </div>

                    <div class="profit-panel">
                        <label>"PROFIT BERSIH"</label>
                        <div class="profit-amount">{move || format_rupiah(profit.get())}</div>
                    </div>

                    <button class="primary-btn" disabled=move || saving.get() on:click=save>
                        {move || if saving.get() { "Menyimpan..." } else { "💾 Simpan Laporan" }}
                    </button>
                </div>

                {move || {
                    if is_manager() {
                        view! {
                            <div class="card">
                                <div class="card-head">
                                    <h3>"Riwayat Laporan"</h3>
                                    <button
                                        class="link-btn"
                                        on:click=move |_| set_reload.update(|v| *v += 1)
                                    >
                                        "Refresh"
                                    </button>
                                </div>

                                {move || {
                                    error
                                        .get()
                                        .map(|message| {
                                            view! { <div class="error-banner">{message}</div> }
                                        })
                                }}

                                <div class="history-list">
                                    <Show when=move || loading.get()>
                                        <div class="empty-state">"Memuat data..."</div>
                                    </Show>
                                    <Show when=move || !loading.get() && history.get().is_empty()>
                                        <div class="empty-state">"Belum ada laporan."</div>
                                    </Show>
                                    <For
                                        each=move || history.get()
                                        key=|record| (record.id.clone(), record.date.clone())
                                        children=move |record| {
                                            let profit_display = format_rupiah(record.profit);
                                            let delete_button = record
                                                .id
                                                .map(|record_id| {
                                                    view! {
                                                        <DeleteConfirmButton on_confirm={
                                                            move || delete_record(record_id.clone())
                                                        } />
                                                    }
                                                });
                                            view! {
                                                <div class="history-row">
                                                    <div>
                                                        <div class="history-date">{record.date}</div>
                                                        <div class="history-by">
                                                            {format!("Oleh: {}", record.saved_by)}
                                                        </div>
                                                    </div>
                                                    <div class="history-right">
                                                        <span class="history-profit">{profit_display}</span>
                                                        {delete_button}
                                                    </div>
                                                </div>
                                            }
                                        }
                                    />
                                </div>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="card placeholder-card">
                                "Riwayat hanya untuk Manager"
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
