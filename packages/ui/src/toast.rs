//! Transient notifications shown in the bottom-right corner.

use std::time::Duration;

use dioxus::prelude::*;

use crate::platform;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Queue a toast and schedule its removal. The timer is not tied to the
/// calling view, so a toast raised right before navigating still expires.
pub fn show_toast(toasts: &mut Signal<Toasts>, kind: ToastKind, message: impl Into<String>) {
    let id = {
        let mut queue = toasts.write();
        queue.next_id += 1;
        let id = queue.next_id;
        queue.entries.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    };

    let mut toasts = *toasts;
    spawn_forever(async move {
        platform::sleep(TOAST_LIFETIME).await;
        toasts.write().entries.retain(|t| t.id != id);
    });
}

pub fn toast_success(toasts: &mut Signal<Toasts>, message: impl Into<String>) {
    show_toast(toasts, ToastKind::Success, message);
}

pub fn toast_error(toasts: &mut Signal<Toasts>, message: impl Into<String>) {
    let message = message.into();
    tracing::error!("{}", message);
    show_toast(toasts, ToastKind::Error, message);
}

pub fn toast_info(toasts: &mut Signal<Toasts>, message: impl Into<String>) {
    show_toast(toasts, ToastKind::Info, message);
}

#[component]
pub fn Toaster() -> Element {
    let mut toasts = use_toasts();
    let entries = toasts().entries.clone();

    rsx! {
        div {
            class: "toaster",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Error => "toast toast-error",
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Info => "toast toast-info",
                    },
                    span { "{toast.message}" }
                    button {
                        class: "toast-dismiss",
                        onclick: move |_| toasts.write().entries.retain(|t| t.id != toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
