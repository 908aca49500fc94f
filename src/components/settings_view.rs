//! Settings View
//!
//! Endpoint configuration: save the Apps Script URL and probe it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::store::{store_set_service_url, use_app_store, AppStateStoreFields};

#[component]
pub fn SettingsView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (url, set_url) = signal(store.service_url().get_untracked());
    let (testing, set_testing) = signal(false);
    let (status, set_status) = signal::<Option<bool>>(None);

    let save = move |_| {
        store_set_service_url(&store, url.get().trim().to_string());
        ctx.notify("URL Google Script berhasil disimpan!");
    };

    let test_connection = move |_| {
        let candidate = url.get().trim().to_string();
        // Probe through a source selected from the entered URL, so an
        // unsaved edit is tested as typed
        let probe = api::select_source(&candidate);
        set_testing.set(true);
        set_status.set(None);
        spawn_local(async move {
            match probe.get_users().await {
                Ok(_) => {
                    set_status.set(Some(true));
                    ctx.notify("Koneksi berhasil!");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("test koneksi: {err}").into());
                    set_status.set(Some(false));
                    ctx.notify_error("Koneksi gagal. Cek URL.");
                }
            }
            set_testing.set(false);
        });
    };

    view! {
        <div class="view">
            <div class="view-header">
                <div>
                    <h2>"⚙ Pengaturan Aplikasi"</h2>
                    <p class="muted">"Konfigurasi koneksi ke Google Sheets."</p>
                </div>
            </div>

            <div class="card settings-card">
                <label>"Google Apps Script Web App URL"</label>
                <input
                    type="text"
                    class="url-input"
                    placeholder="https://script.google.com/macros/s/..."
                    prop:value=move || url.get()
                    on:input=move |ev| {
                        let Some(target) = ev.target() else { return };
                        let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else {
                            return;
                        };
                        set_url.set(input.value());
                    }
                />
                <p class="hint">
                    "Copy URL dari deployment Google Apps Script anda. Pastikan access: \"Anyone\"."
                </p>

                <div class="settings-actions">
                    <button class="primary-btn" on:click=save>"Simpan"</button>
                    <button disabled=move || testing.get() on:click=test_connection>
                        {move || if testing.get() { "Menguji..." } else { "Test Koneksi" }}
                    </button>
                    {move || {
                        status
                            .get()
                            .map(|ok| {
                                if ok {
                                    view! {
                                        <span class="status-ok">"✔ Terhubung"</span>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <span class="status-fail">"⚠ Gagal terhubung"</span>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </div>
            </div>

            <div class="card guide-card">
                <h3>"Cara mendapatkan URL:"</h3>
                <ol>
                    <li>"Buka Google Sheet > Extensions > Apps Script."</li>
                    <li>"Deploy > New Deployment."</li>
                    <li>"Pilih \"Web App\"."</li>
                    <li>"Execute as: \"Me\" & Who has access: \"Anyone\"."</li>
                    <li>"Copy URL yang diberikan."</li>
                </ol>
            </div>
        </div>
    }
}
