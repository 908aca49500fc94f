//! Login Modal Component
//!
//! Identity selection: pick a stored user or register a new name. No
//! credential check exists anywhere in the system.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::models::{find_user_by_name, Role, Session, User};
use crate::store::{store_login, use_app_store};

#[component]
pub fn LoginModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (users, set_users) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(false);
    let (name, set_name) = signal(String::new());
    let (role, set_role) = signal(Role::Terapis);
    let (submitting, set_submitting) = signal(false);

    // Refresh the stored-user list every time the modal opens
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let source = ctx.data_source();
        set_loading.set(true);
        spawn_local(async move {
            match source.get_users().await {
                Ok(list) => set_users.set(list),
                Err(err) => {
                    web_sys::console::error_1(&format!("getUsers: {err}").into());
                    ctx.notify_error("Gagal memuat daftar user");
                }
            }
            set_loading.set(false);
        });
    });

    let on_select = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() else { return };
        let uid = select.value();
        if uid.is_empty() {
            return;
        }
        if let Some(user) = users.get_untracked().iter().find(|u| u.uid == uid) {
            set_name.set(user.name.clone());
            set_role.set(user.role);
        }
    };

    let on_role_change = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() else { return };
        let picked = if select.value() == "manager" {
            Role::Manager
        } else {
            Role::Terapis
        };
        set_role.set(picked);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let typed = name.get().trim().to_string();
        if typed.is_empty() {
            return;
        }
        let chosen_role = role.get();
        let known = users.get_untracked();
        let source = ctx.data_source();
        set_submitting.set(true);
        spawn_local(async move {
            let session = match find_user_by_name(&known, &typed) {
                // Known name: log in as the stored record, no registration
                Some(existing) => Some(Session {
                    name: existing.name.clone(),
                    role: existing.role,
                }),
                None => match source.add_user(&typed, chosen_role).await {
                    Ok(ack) if ack.success => Some(Session {
                        name: typed,
                        role: chosen_role,
                    }),
                    Ok(_) => {
                        ctx.notify_error("Registrasi ditolak server");
                        None
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("addUser: {err}").into());
                        ctx.notify_error("Gagal mendaftarkan user baru");
                        None
                    }
                },
            };
            if let Some(session) = session {
                let greeting = format!("Selamat datang, {}!", session.name);
                store_login(&store, session);
                ctx.notify(greeting);
                set_name.set(String::new());
                set_open.set(false);
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-title">
                        <div class="modal-icon">"🔐"</div>
                        <h2>"Login Sistem SOP"</h2>
                        <p class="muted">"Masuk untuk menyimpan progress kerja."</p>
                    </div>

                    <form on:submit=on_submit>
                        <label>"Pilih user tersimpan"</label>
                        <select on:change=on_select disabled=move || loading.get()>
                            <option value="">
                                {move || {
                                    if loading.get() { "Memuat data..." } else { "-- Pilih User --" }
                                }}
                            </option>
                            <For
                                each=move || users.get()
                                key=|user| user.uid.clone()
                                children=move |user| {
                                    let label = format!("{} ({})", user.name, user.role.label());
                                    view! { <option value=user.uid.clone()>{label}</option> }
                                }
                            />
                        </select>

                        <div class="divider">"ATAU INPUT BARU"</div>

                        <label>"Nama anda"</label>
                        <input
                            type="text"
                            placeholder="Contoh: Ahmad"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                let Some(target) = ev.target() else { return };
                                let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else {
                                    return;
                                };
                                set_name.set(input.value());
                            }
                        />

                        <label>"Peran / jabatan"</label>
                        <select
                            prop:value=move || {
                                match role.get() {
                                    Role::Terapis => "terapis",
                                    Role::Manager => "manager",
                                }
                            }
                            on:change=on_role_change
                        >
                            <option value="terapis">"Terapis / Staff"</option>
                            <option value="manager">"Manager / Owner"</option>
                        </select>

                        <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Memproses..." } else { "Masuk Sistem" }}
                        </button>
                    </form>

                    <button class="link-btn" on:click=move |_| set_open.set(false)>
                        "Batal / Tutup"
                    </button>
                </div>
            </div>
        </Show>
    }
}
