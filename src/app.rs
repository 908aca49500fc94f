//! Application Shell
//!
//! Sidebar plus the tab-switched main view, login modal, and toast.

use leptos::prelude::*;
use reactive_stores::Store;
use std::rc::Rc;

use crate::api::{self, DataSource};
use crate::components::{
    ChecklistView, Dashboard, FinanceView, LoginModal, NoteList, SettingsView, Sidebar, Tab, Toast,
};
use crate::context::{AppContext, ToastState};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::load());
    provide_context(store);

    let source: RwSignal<Rc<dyn DataSource>, LocalStorage> =
        RwSignal::new_local(api::select_source(&store.service_url().get_untracked()));
    let (toast, set_toast) = signal(ToastState::default());
    provide_context(AppContext::new(source, (toast, set_toast)));

    // Saving a new endpoint swaps the source every mounted view works against
    Effect::new(move |_| {
        let url = store.service_url().get();
        source.set(api::select_source(&url));
    });

    let (active_tab, set_active_tab) = signal(Tab::Dashboard);
    let (login_open, set_login_open) = signal(false);

    view! {
        <div class="app-layout">
            <Sidebar
                active_tab=active_tab
                set_active_tab=set_active_tab
                on_open_login=move || set_login_open.set(true)
            />

            <main class="main-content">
                {move || match active_tab.get() {
                    Tab::Dashboard => view! { <Dashboard set_active_tab=set_active_tab /> }.into_any(),
                    Tab::Operasional => view! { <ChecklistView /> }.into_any(),
                    Tab::Keuangan => view! { <FinanceView /> }.into_any(),
                    Tab::CustomerService => {
                        view! {
                            <NoteList
                                title="Customer Service Scripts"
                                category="cs"
                                placeholder="Tambah script/panduan CS baru..."
                            />
                        }
                            .into_any()
                    }
                    Tab::Marketing => {
                        view! {
                            <NoteList
                                title="Marketing Targets & Ideas"
                                category="marketing"
                                placeholder="Tambah target/campaign baru..."
                            />
                        }
                            .into_any()
                    }
                    Tab::Sdm => {
                        view! {
                            <NoteList
                                title="SDM & HR Guidelines"
                                category="sdm"
                                placeholder="Tambah aturan/pengumuman baru..."
                            />
                        }
                            .into_any()
                    }
                    Tab::Pengaturan => view! { <SettingsView /> }.into_any(),
                }}
            </main>

            <LoginModal open=login_open set_open=set_login_open />
            <Toast />
        </div>
    }
}
