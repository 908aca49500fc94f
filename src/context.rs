//! Application Context
//!
//! Handles shared by every component: the active data source and the
//! transient notification.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::api::DataSource;

/// How long a notification stays visible
const TOAST_MILLIS: u32 = 3_000;

/// Transient notification state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub message: String,
    pub is_error: bool,
    pub visible: bool,
    seq: u32,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active data source, reselected when the endpoint changes
    pub source: RwSignal<Rc<dyn DataSource>, LocalStorage>,
    /// Notification state - read
    pub toast: ReadSignal<ToastState>,
    /// Notification state - write
    set_toast: WriteSignal<ToastState>,
}

impl AppContext {
    pub fn new(
        source: RwSignal<Rc<dyn DataSource>, LocalStorage>,
        toast: (ReadSignal<ToastState>, WriteSignal<ToastState>),
    ) -> Self {
        Self {
            source,
            toast: toast.0,
            set_toast: toast.1,
        }
    }

    /// Snapshot of the active source for one async operation
    pub fn data_source(&self) -> Rc<dyn DataSource> {
        self.source.get_untracked()
    }

    /// Show a success notification for a few seconds
    pub fn notify(&self, message: impl Into<String>) {
        self.show(message.into(), false);
    }

    /// Show an error notification for a few seconds
    pub fn notify_error(&self, message: impl Into<String>) {
        self.show(message.into(), true);
    }

    fn show(&self, message: String, is_error: bool) {
        let seq = self.toast.get_untracked().seq.wrapping_add(1);
        self.set_toast.set(ToastState {
            message,
            is_error,
            visible: true,
            seq,
        });
        let toast = self.toast;
        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MILLIS).await;
            // A newer toast owns the slot; leave it alone
            if toast.get_untracked().seq == seq {
                set_toast.update(|state| state.visible = false);
            }
        });
    }
}
