//! Operational Checklist View
//!
//! Daily outlet checklist: master items plus today's per-item state, with
//! an optimistic toggle and manager-only item curation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use wasm_bindgen::JsCast;

use crate::api::MASTER_DATA_SHEET;
use crate::checklist::{apply_toggle, revert_toggle};
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::format::{clock_stamp, display_date, today_stamp};
use crate::models::{ChecklistEntry, ChecklistUpdate, MasterDataItem};
use crate::store::{use_app_store, AppStateStoreFields};

/// Master-data category holding the checklist items
const CHECKLIST_CATEGORY: &str = "checklist";

#[component]
pub fn ChecklistView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (items, set_items) = signal(Vec::<MasterDataItem>::new());
    let (entries, set_entries) = signal(HashMap::<String, ChecklistEntry>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (reload, set_reload) = signal(0u32);
    let (new_item, set_new_item) = signal(String::new());
    let (adding, set_adding) = signal(false);

    let today = today_stamp();

    let is_manager = move || {
        store
            .session()
            .get()
            .map(|s| s.role.is_manager())
            .unwrap_or(false)
    };

    // Full refetch on mount, on refresh, and when the endpoint changes
    Effect::new({
        let today = today.clone();
        move |_| {
            let _ = reload.get();
            let source = ctx.source.get();
            let date = today.clone();
            set_loading.set(true);
            set_error.set(None);
            spawn_local(async move {
                match source.get_master_data(CHECKLIST_CATEGORY).await {
                    Ok(list) => set_items.set(list),
                    Err(err) => set_error.set(Some(format!("Gagal memuat item checklist: {err}"))),
                }
                match source.get_checklist(&date).await {
                    Ok(day) => set_entries.set(day.items),
                    Err(err) => {
                        set_error.set(Some(format!(
                            "Gagal memuat checklist. Cek koneksi atau URL script. ({err})"
                        )));
                        ctx.notify_error("Gagal memuat data");
                    }
                }
                set_loading.set(false);
            });
        }
    });

    let toggle = {
        let today = today.clone();
        move |item_id: String, checked: bool| {
            let Some(user) = store.session().get_untracked() else {
                ctx.notify_error("Silakan login terlebih dahulu!");
                return;
            };
            let time = clock_stamp();
            set_entries.update(|map| apply_toggle(map, &item_id, checked, &user.name, &time));

            let update = ChecklistUpdate {
                date: today.clone(),
                item_id,
                checked,
                by: user.name,
                time,
            };
            let source = ctx.data_source();
            spawn_local(async move {
                let confirmed = match source.update_checklist(&update).await {
                    Ok(ack) => ack.success,
                    Err(err) => {
                        web_sys::console::error_1(&format!("updateChecklist: {err}").into());
                        false
                    }
                };
                if !confirmed {
                    ctx.notify_error("Gagal menyimpan data ke sheet");
                    set_entries.update(|map| revert_toggle(map, &update.item_id));
                }
            });
        }
    };

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = new_item.get().trim().to_string();
        if content.is_empty() {
            return;
        }
        let source = ctx.data_source();
        set_adding.set(true);
        spawn_local(async move {
            match source.add_master_data(CHECKLIST_CATEGORY, &content).await {
                Ok(ack) if ack.success => {
                    set_new_item.set(String::new());
                    set_reload.update(|v| *v += 1);
                    ctx.notify("Item checklist ditambahkan");
                }
                Ok(_) => ctx.notify_error("Server menolak item baru"),
                Err(err) => {
                    web_sys::console::error_1(&format!("addData: {err}").into());
                    ctx.notify_error("Gagal menambah item");
                }
            }
            set_adding.set(false);
        });
    };

    let remove_item = move |id: String| {
        if !is_manager() {
            ctx.notify_error("Hanya Manager yang bisa menghapus!");
            return;
        }
        let source = ctx.data_source();
        spawn_local(async move {
            // Historical day entries keep referencing the removed id
            match source.delete_data(MASTER_DATA_SHEET, &id).await {
                Ok(ack) if ack.success => {
                    set_reload.update(|v| *v += 1);
                    ctx.notify("Item dihapus");
                }
                _ => ctx.notify_error("Gagal menghapus item"),
            }
        });
    };

    view! {
        <div class="view">
            <div class="view-header">
                <div>
                    <h2>"Operasional Outlet"</h2>
                    <p class="muted">"Checklist harian tersimpan di Google Sheet."</p>
                </div>
                <div class="view-header-right">
                    <div class="date-id">{format!("ID: {today}")}</div>
                    <div class="date-display">{display_date()}</div>
                </div>
            </div>

            <div class="card checklist-card">
                <Show when=move || loading.get()>
                    <div class="loading-overlay">
                        <div class="spinner"></div>
                    </div>
                </Show>

                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="error-banner">
                                    <strong>"Error: "</strong>
                                    {message}
                                </div>
                            }
                        })
                }}

                <div class="card-head">
                    <h3>"1.1 Persiapan Outlet (08:00 WIB)"</h3>
                    <button class="link-btn" on:click=move |_| set_reload.update(|v| *v += 1)>
                        "Refresh Data"
                    </button>
                </div>

                <Show when=move || !loading.get() && items.get().is_empty()>
                    <div class="empty-state">"Belum ada item checklist."</div>
                </Show>

                <For
                    each=move || items.get()
                    key=|item| item.id.clone()
                    children=move |item| {
                        let toggle = toggle.clone();
                        let toggle_id = item.id.clone();
                        let row_id = item.id.clone();
                        let box_id = item.id.clone();
                        let meta_id = item.id.clone();
                        let delete_id = item.id.clone();
                        let row_checked = move || {
                            entries.get().get(&row_id).map(|e| e.checked).unwrap_or(false)
                        };
                        let box_checked = move || {
                            entries.get().get(&box_id).map(|e| e.checked).unwrap_or(false)
                        };

                        view! {
                            <label class=move || {
                                if row_checked() { "check-row checked" } else { "check-row" }
                            }>
                                <input
                                    type="checkbox"
                                    prop:checked=box_checked
                                    on:change=move |ev| {
                                        let Some(target) = ev.target() else { return };
                                        let Some(input) = target
                                            .dyn_ref::<web_sys::HtmlInputElement>() else { return };
                                        toggle(toggle_id.clone(), input.checked());
                                    }
                                />
                                <div class="check-body">
                                    <span class="check-label">{item.content.clone()}</span>
                                    {move || {
                                        entries
                                            .get()
                                            .get(&meta_id)
                                            .filter(|entry| entry.checked)
                                            .map(|entry| {
                                                view! {
                                                    <div class="entry-meta">
                                                        {format!("✓ {} ({})", entry.by, entry.time)}
                                                    </div>
                                                }
                                            })
                                    }}
                                </div>
                                <Show when=is_manager>
                                    <DeleteConfirmButton on_confirm={
                                        let delete_id = delete_id.clone();
                                        move || remove_item(delete_id.clone())
                                    } />
                                </Show>
                            </label>
                        }
                    }
                />

                <Show when=is_manager>
                    <form class="add-form" on:submit=add_item>
                        <input
                            type="text"
                            placeholder="Tambah item checklist baru..."
                            prop:value=move || new_item.get()
                            on:input=move |ev| {
                                let Some(target) = ev.target() else { return };
                                let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else {
                                    return;
                                };
                                set_new_item.set(input.value());
                            }
                        />
                        <button type="submit" disabled=move || adding.get()>
                            {move || if adding.get() { "..." } else { "Tambah" }}
                        </button>
                    </form>
                </Show>
            </div>

            <div class="card guide-card">
                <h3>"Panduan Cepat Terapi"</h3>
                <ul>
                    <li>"Diagnosa awal (tensi wajib > 90/60)"</li>
                    <li>"Sterilisasi tangan & alat (wajib gloves)"</li>
                    <li>"Limbah jarum masuk safety box kuning"</li>
                </ul>
            </div>
        </div>
    }
}
