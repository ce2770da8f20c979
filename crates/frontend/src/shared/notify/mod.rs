//! User-facing notifications.
//!
//! List operations report their outcome through [`NotificationService`]; the
//! [`NotificationHost`] shows the oldest unread notification as a dialog.

use std::collections::VecDeque;

use leptos::prelude::*;
use thaw::*;

use crate::shared::modal::{defer, ModalFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Info => "notification notification--info",
            NotificationKind::Success => "notification notification--success",
            NotificationKind::Error => "notification notification--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// FIFO of notifications waiting to be acknowledged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
}

impl NotificationQueue {
    /// Largest number of unread notifications kept; the oldest are dropped first.
    pub const CAPACITY: usize = 20;

    pub fn push(&mut self, notification: Notification) {
        if self.items.len() == Self::CAPACITY {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    pub fn head(&self) -> Option<&Notification> {
        self.items.front()
    }

    pub fn dismiss(&mut self) -> Option<Notification> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    pub fn notify(&self, kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) {
        let notification = Notification {
            kind,
            title: title.into(),
            message: message.into(),
        };
        match kind {
            NotificationKind::Error => {
                log::warn!("notify: {}: {}", notification.title, notification.message)
            }
            _ => log::info!("notify: {}: {}", notification.title, notification.message),
        }
        self.queue.update(|queue| queue.push(notification));
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationKind::Info, title, message);
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationKind::Success, title, message);
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationKind::Error, title, message);
    }

    pub fn current(&self) -> Option<Notification> {
        self.queue.with(|queue| queue.head().cloned())
    }

    pub fn dismiss(&self) {
        let queue = self.queue;
        defer(move || {
            queue.update(|queue| {
                queue.dismiss();
            })
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = expect_context::<NotificationService>();

    move || {
        svc.current().map(|notification| {
            view! {
                <ModalFrame on_close=Callback::new(move |_| svc.dismiss()) modal_class=notification.kind.css_class()>
                    <div class="modal-header">
                        <h2 class="modal-title">{notification.title.clone()}</h2>
                    </div>
                    <div class="modal-body">
                        <p>{notification.message.clone()}</p>
                    </div>
                    <div class="modal-footer">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| svc.dismiss()>
                            "OK"
                        </Button>
                    </div>
                </ModalFrame>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str) -> Notification {
        Notification {
            kind: NotificationKind::Info,
            title: title.to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = NotificationQueue::default();
        queue.push(note("first"));
        queue.push(note("second"));
        assert_eq!(queue.head().map(|n| n.title.as_str()), Some("first"));
        assert_eq!(queue.dismiss().map(|n| n.title), Some("first".to_string()));
        assert_eq!(queue.head().map(|n| n.title.as_str()), Some("second"));
        queue.dismiss();
        assert!(queue.is_empty());
        assert!(queue.dismiss().is_none());
    }

    #[test]
    fn test_queue_drops_oldest_when_full() {
        let mut queue = NotificationQueue::default();
        for i in 0..NotificationQueue::CAPACITY + 2 {
            queue.push(note(&i.to_string()));
        }
        assert_eq!(queue.len(), NotificationQueue::CAPACITY);
        assert_eq!(queue.head().map(|n| n.title.as_str()), Some("2"));
    }
}
