//! Transient toast notifications.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::config::{NOTIFICATION_DEFAULT_MS, NOTIFICATION_ERROR_MS, NOTIFICATION_VALIDATION_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Service provided through context; shows a message and removes it after
/// its duration.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn items(&self) -> RwSignal<Vec<Notification>> {
        self.items
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message.into(), NOTIFICATION_DEFAULT_MS);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message.into(), NOTIFICATION_ERROR_MS);
    }

    /// Input validation messages stay longer
    pub fn validation(&self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message.into(), NOTIFICATION_VALIDATION_MS);
    }

    pub fn show(&self, kind: NotificationKind, message: String, duration_ms: u32) {
        let mut id = 0;
        self.next_id.update_value(|next| {
            *next += 1;
            id = *next;
        });
        self.items.update(|items| {
            items.push(Notification { id, kind, message })
        });

        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            items.update(|items| items.retain(|n| n.id != id));
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in context")
}

/// Renders the active notifications
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notifications">
            {move || {
                service
                    .items()
                    .get()
                    .into_iter()
                    .map(|n| {
                        let class = match n.kind {
                            NotificationKind::Success => "notification",
                            NotificationKind::Error => "notification notification--error",
                        };
                        view! { <div class=class>{n.message}</div> }
                    })
                    .collect_view()
            }}
        </div>
    }
}
