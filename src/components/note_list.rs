//! Note List View
//!
//! Generic category-scoped list shared by the CS scripts, marketing
//! targets, and SDM guideline tabs: list, add, manager-only delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::MASTER_DATA_SHEET;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::MasterDataItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NoteList(
    #[prop(into)] title: String,
    category: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (entries, set_entries) = signal(Vec::<MasterDataItem>::new());
    let (loading, set_loading) = signal(false);
    let (adding, set_adding) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        let source = ctx.source.get();
        set_loading.set(true);
        spawn_local(async move {
            match source.get_master_data(category).await {
                Ok(list) => set_entries.set(list),
                Err(err) => {
                    web_sys::console::error_1(&format!("getMasterData({category}): {err}").into());
                    ctx.notify_error("Gagal memuat data");
                }
            }
            set_loading.set(false);
        });
    });

    let add_entry = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = draft.get().trim().to_string();
        if content.is_empty() {
            return;
        }
        if store.session().get_untracked().is_none() {
            ctx.notify_error("Harap login!");
            return;
        }
        let source = ctx.data_source();
        set_adding.set(true);
        spawn_local(async move {
            match source.add_master_data(category, &content).await {
                Ok(ack) if ack.success => {
                    set_draft.set(String::new());
                    set_reload.update(|v| *v += 1);
                    ctx.notify("Item berhasil ditambahkan");
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

    // Presentation-level gate only; the service is the real authority
    let delete_entry = move |id: String| {
        let manager = store
            .session()
            .get_untracked()
            .map(|s| s.role.is_manager())
            .unwrap_or(false);
        if !manager {
            ctx.notify_error("Hanya Manager yang bisa menghapus!");
            return;
        }
        let source = ctx.data_source();
        spawn_local(async move {
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
            <div class="card">
                <div class="card-head">
                    <h2>{title}</h2>
                    <button class="link-btn" on:click=move |_| set_reload.update(|v| *v += 1)>
                        "Refresh"
                    </button>
                </div>

                <form class="add-form" on:submit=add_entry>
                    <input
                        type="text"
                        placeholder=placeholder
                        prop:value=move || draft.get()
                        on:input=move |ev| {
                            let Some(target) = ev.target() else { return };
                            let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else {
                                return;
                            };
                            set_draft.set(input.value());
                        }
                    />
                    <button type="submit" disabled=move || adding.get() || draft.get().is_empty()>
                        {move || if adding.get() { "..." } else { "+ Tambah" }}
                    </button>
                </form>

                <Show when=move || loading.get()>
                    <div class="empty-state">"Memuat data..."</div>
                </Show>
                <Show when=move || !loading.get() && entries.get().is_empty()>
                    <div class="empty-state dashed">"Belum ada data. Silakan tambah baru."</div>
                </Show>

                <ul class="note-list">
                    <For
                        each=move || entries.get()
                        key=|entry| entry.id.clone()
                        children=move |entry| {
                            let entry_id = entry.id.clone();
                            view! {
                                <li class="note-row">
                                    <span class="note-content">{entry.content}</span>
                                    <DeleteConfirmButton on_confirm={
                                        move || delete_entry(entry_id.clone())
                                    } />
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </div>
    }
}
