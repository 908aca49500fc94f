//! Dashboard Component
//!
//! Landing cards linking into the operational views.

use leptos::prelude::*;

use crate::components::Tab;

#[component]
pub fn Dashboard(set_active_tab: WriteSignal<Tab>) -> impl IntoView {
    view! {
        <div class="view">
            <div class="hero">
                <h2>"Dashboard Operasional"</h2>
                <p>"Sistem terhubung ke Google Sheets Database."</p>
            </div>

            <div class="card-grid">
                <div class="card nav-card" on:click=move |_| set_active_tab.set(Tab::Operasional)>
                    <div class="card-head">
                        <h3>"📋 Checklist Harian"</h3>
                        <span class="badge">"Sync"</span>
                    </div>
                    <p class="muted">"Pantau kebersihan dan persiapan outlet secara harian."</p>
                </div>

                <div class="card nav-card" on:click=move |_| set_active_tab.set(Tab::Keuangan)>
                    <div class="card-head">
                        <h3>"📊 Laporan Keuangan"</h3>
                        <span class="badge save">"Save"</span>
                    </div>
                    <p class="muted">"Hitung laba harian dan simpan ke database sheet."</p>
                </div>
            </div>
        </div>
    }
}
