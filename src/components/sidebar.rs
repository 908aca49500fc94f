//! Sidebar Component
//!
//! Brand header, session badge, and the main menu.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_logout, use_app_store, AppStateStoreFields};

/// Views reachable from the sidebar menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Operasional,
    Keuangan,
    CustomerService,
    Marketing,
    Sdm,
    Pengaturan,
}

/// Menu entries in display order
const MENU: &[(Tab, &str, &str)] = &[
    (Tab::Dashboard, "Dashboard", "🏠"),
    (Tab::Operasional, "Operasional", "📋"),
    (Tab::Keuangan, "Keuangan", "💰"),
    (Tab::CustomerService, "Customer Service", "🎧"),
    (Tab::Marketing, "Marketing", "📣"),
    (Tab::Sdm, "SDM", "👥"),
    (Tab::Pengaturan, "Pengaturan", "⚙"),
];

#[component]
pub fn Sidebar(
    active_tab: ReadSignal<Tab>,
    set_active_tab: WriteSignal<Tab>,
    #[prop(into)] on_open_login: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let logout = move |_| {
        store_logout(&store);
        ctx.notify("Anda telah keluar.");
        on_open_login.run(());
    };

    let dot_class = move || {
        if store.session().get().is_some() {
            "status-dot online"
        } else {
            "status-dot"
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <div class="brand">
                    "RUMAH SEHAT"
                    <br/>
                    <span class="brand-sub">"Bekam NBC"</span>
                </div>
                <div class="session-badge">
                    <span class=dot_class></span>
                    <div class="session-info">
                        <div class="session-name">
                            {move || {
                                store.session().get().map(|s| s.name).unwrap_or_else(|| "Tamu".to_string())
                            }}
                        </div>
                        <div class="session-role">
                            {move || {
                                store
                                    .session()
                                    .get()
                                    .map(|s| s.role.label().to_string())
                                    .unwrap_or_else(|| "Silakan login".to_string())
                            }}
                        </div>
                    </div>
                    {move || {
                        if store.session().get().is_some() {
                            view! {
                                <button class="session-btn" title="Keluar" on:click=logout>"⎋"</button>
                            }
                                .into_any()
                        } else {
                            view! {
                                <button
                                    class="session-btn"
                                    title="Login"
                                    on:click=move |_| on_open_login.run(())
                                >
                                    "👤"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>

            <nav class="sidebar-menu">
                {MENU
                    .iter()
                    .map(|(tab, label, icon)| {
                        let tab = *tab;
                        view! {
                            <button
                                class=move || {
                                    if active_tab.get() == tab { "menu-btn active" } else { "menu-btn" }
                                }
                                on:click=move |_| set_active_tab.set(tab)
                            >
                                <span class="menu-icon">{*icon}</span>
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar-footer">"v2.0 · Google Sheets DB"</div>
        </aside>
    }
}
