//! Toast Component
//!
//! Transient notification rendered above the layout.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let toast_class = move || {
        let state = ctx.toast.get();
        match (state.visible, state.is_error) {
            (true, true) => "toast error visible",
            (true, false) => "toast visible",
            (false, _) => "toast",
        }
    };

    view! {
        <div class=toast_class>{move || ctx.toast.get().message}</div>
    }
}
