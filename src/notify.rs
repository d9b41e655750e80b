//! Notifications
//!
//! Transient toasts reporting the outcome of an operation.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Oldest toasts are dropped beyond this
pub const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message: message.into() });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Toast queue shared through context
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<ToastQueue>,
    ttl_ms: u32,
}

impl Notifier {
    pub fn new(ttl_ms: u32) -> Self {
        Self { queue: RwSignal::new(ToastQueue::default()), ttl_ms }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.show(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|q| q.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    fn show(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));
        let queue = self.queue;
        Timeout::new(self.ttl_ms, move || {
            queue.try_update(|q| q.dismiss(id));
        })
        .forget();
    }
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "Welcome back!");
        let b = queue.push(ToastKind::Error, "Failed to load bookings");
        assert!(b > a);
        assert_eq!(queue.toasts().len(), 2);
        assert_eq!(queue.toasts()[1].kind, ToastKind::Error);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "one");
        queue.push(ToastKind::Success, "two");
        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message, "two");
        queue.dismiss(999);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn test_overflow_drops_oldest() {
        let mut queue = ToastQueue::default();
        for i in 0..(MAX_VISIBLE + 2) {
            queue.push(ToastKind::Success, format!("toast {}", i));
        }
        assert_eq!(queue.toasts().len(), MAX_VISIBLE);
        assert_eq!(queue.toasts()[0].message, "toast 2");
    }
}
