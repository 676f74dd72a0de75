//! Toast notifications: data model and queue.
//!
//! Rendering lives in `components::toast`; this module only knows what is
//! currently showing.

use std::future::Future;

use uuid::Uuid;

use super::timing;

/// How long a toast stays up unless dismissed first.
pub const TOAST_LIFETIME_MS: u32 = 5_000;

/// At most this many toasts are shown; the oldest is dropped first.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Default => "toast--default",
            Self::Destructive => "toast--destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

pub type ToastId = Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct QueuedToast {
    pub id: ToastId,
    pub toast: Toast,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<QueuedToast>,
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) -> ToastId {
        let id = Uuid::new_v4();
        self.items.push(QueuedToast { id, toast });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast; unknown ids (already expired) are ignored.
    pub fn dismiss(&mut self, id: ToastId) {
        self.items.retain(|item| item.id != id);
    }

    pub fn items(&self) -> &[QueuedToast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Fire-and-forget notification sink.
pub trait Notify {
    fn notify(&mut self, toast: Toast);
}

/// Wherever the renderer keeps the page's queue.
pub trait ToastSlot {
    fn with_queue<R>(&mut self, f: impl FnOnce(&mut ToastQueue) -> R) -> R;
}

/// Put `toast` on the queue. The returned future takes it down again after
/// [`TOAST_LIFETIME_MS`]; a toast dismissed earlier is simply not found.
pub fn show<S>(mut slot: S, toast: Toast) -> (ToastId, impl Future<Output = ()>)
where
    S: ToastSlot + 'static,
{
    let id = slot.with_queue(|queue| queue.push(toast));
    let expiry = async move {
        timing::sleep_ms(TOAST_LIFETIME_MS).await;
        slot.with_queue(|queue| queue.dismiss(id));
    };
    (id, expiry)
}
