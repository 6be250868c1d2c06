//! Transient non-blocking notifications.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::core::platform;

const DISMISS_AFTER_MS: u64 = 4000;

static TOAST_SEQ: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    seq: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Show a toast and schedule its dismissal. A newer toast supersedes the
/// timer of an older one (the sequence check keeps the timer from clearing
/// a message it didn't create).
pub fn show_toast(mut slot: Signal<Option<Toast>>, kind: ToastKind, message: impl Into<String>) {
    let seq = TOAST_SEQ.fetch_add(1, Ordering::Relaxed);
    slot.set(Some(Toast {
        seq,
        kind,
        message: message.into(),
    }));

    spawn(async move {
        platform::sleep_ms(DISMISS_AFTER_MS).await;
        if slot.peek().as_ref().map(|toast| toast.seq) == Some(seq) {
            slot.set(None);
        }
    });
}

#[component]
pub fn ToastHost(mut toast: Signal<Option<Toast>>) -> Element {
    let Some(current) = toast() else {
        return rsx! {};
    };

    let modifier = match current.kind {
        ToastKind::Success => "toast--success",
        ToastKind::Error => "toast--error",
    };

    rsx! {
        div { class: "toast {modifier}", role: "status",
            span { class: "toast__message", "{current.message}" }
            button {
                r#type: "button",
                class: "toast__dismiss",
                aria_label: "Dismiss notification",
                onclick: move |_| toast.set(None),
                "×"
            }
        }
    }
}
