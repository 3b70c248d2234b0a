//! Non-blocking toast notifications.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const TOAST_VISIBLE_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Notifications {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Notifications {
    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut toasts = self.toasts;
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id.set(id + 1);
        toasts.write().push(Toast { id, kind, message });

        // outlives the component that raised it
        let this = *self;
        spawn_forever(async move {
            TimeoutFuture::new(TOAST_VISIBLE_MS).await;
            this.dismiss(id);
        });
    }
}

/// Installs the notification context; call once from the root component.
pub fn use_notifications_provider() -> Notifications {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0_u64);
    use_context_provider(|| Notifications { toasts, next_id })
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>()
}
