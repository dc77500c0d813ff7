//! Notification queue capability.
//!
//! [`ToastQueue`] is plain data so eviction and dismissal can be tested
//! without a browser; [`Notifications`] wraps it in a signal and schedules
//! auto-dismissal.

pub mod toast;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Toasts visible at once; older ones are evicted first.
pub const MAX_VISIBLE: usize = 3;

pub const DEFAULT_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast--info",
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }

    /// Errors stay twice as long.
    pub fn timeout_ms(&self) -> u32 {
        match self {
            ToastKind::Error => DEFAULT_TIMEOUT_MS * 2,
            _ => DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
    max_visible: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(MAX_VISIBLE)
    }
}

impl ToastQueue {
    pub fn with_limit(max_visible: usize) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            max_visible: max_visible.max(1),
        }
    }

    /// Add a toast, evicting the oldest ones over the limit. Returns its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.items.len() > self.max_visible {
            let overflow = self.items.len() - self.max_visible;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast; `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Notification capability handed to the chrome components.
#[derive(Clone, Copy)]
pub struct Notifications {
    queue: RwSignal<ToastQueue>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        let queue = self.queue;
        let timeout = kind.timeout_ms();
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            queue.update(|q| {
                q.dismiss(id);
            });
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(ToastKind::Info, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    pub fn visible(&self) -> Vec<Toast> {
        self.queue.with(|q| q.items().to_vec())
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}
