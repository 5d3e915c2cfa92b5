use std::time::Duration;

use leptos::prelude::*;

const SUCCESS_DISMISS: Duration = Duration::from_secs(3);
const ERROR_DISMISS: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    id: u64,
}

/// One message slot per page. A newer message cancels the older one's dismissal.
#[derive(Clone, Copy)]
pub struct Toasts {
    current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into(), SUCCESS_DISMISS);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into(), ERROR_DISMISS);
    }

    pub fn clear(&self) {
        self.current.set(None);
    }

    fn show(&self, kind: ToastKind, message: String, after: Duration) {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        self.current.set(Some(Toast { kind, message, id }));

        let current = self.current;
        set_timeout(
            move || {
                if current.with_untracked(|t| t.as_ref().map(|t| t.id)) == Some(id) {
                    current.set(None);
                }
            },
            after,
        );
    }
}

#[component]
pub fn ToastView(toasts: Toasts) -> impl IntoView {
    move || {
        toasts.current.get().map(|t| {
            let class = match t.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            };
            view! { <div class=class role="status">{t.message}</div> }
        })
    }
}
