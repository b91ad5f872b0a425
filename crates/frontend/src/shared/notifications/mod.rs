//! Toast notifications
//!
//! [`NotificationService`] holds the list and drives each toast's lifecycle;
//! the [`ToastContainer`] component starts one lifecycle task per rendered toast
//! with `gloo_timers` as the clock.

use crate::layout::global_context::AdminContext;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "check",
            Severity::Error => "alert",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// Set once the exit transition has started
    pub hiding: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    pub display_ms: u32,
    pub exit_ms: u32,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
    timing: StoredValue<NotificationTiming>,
}

impl NotificationService {
    pub fn new(timing: NotificationTiming) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
            timing: StoredValue::new(timing),
        }
    }

    /// Show a message; concurrent notifications stack in call order
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let notification = Notification {
            id,
            message: message.into(),
            severity,
            hiding: false,
        };
        self.items.update(|items| items.push(notification));
        id
    }

    pub fn begin_hiding(&self, id: u64) {
        self.items.update(|items| {
            if let Some(n) = items.iter_mut().find(|n| n.id == id) {
                n.hiding = true;
            }
        });
    }

    pub fn remove(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }

    /// Untracked copy of the list, for non-view callers
    pub fn snapshot(&self) -> Vec<Notification> {
        self.items.get_untracked()
    }

    pub fn is_hiding(&self, id: u64) -> bool {
        self.items
            .with(|items| items.iter().any(|n| n.id == id && n.hiding))
    }

    pub fn timing(&self) -> NotificationTiming {
        self.timing.get_value()
    }

    /// Visible for `display_ms`, then `hiding` for `exit_ms`, then removed.
    ///
    /// `sleep` waits the given number of milliseconds.
    pub async fn run_lifecycle<S, F>(self, id: u64, sleep: S)
    where
        S: Fn(u32) -> F,
        F: Future<Output = ()>,
    {
        let timing = self.timing();
        sleep(timing.display_ms).await;
        self.begin_hiding(id);
        sleep(timing.exit_ms).await;
        self.remove(id);
    }
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext not found in context");
    let notifications = ctx.notifications;

    view! {
        <div id="toast-container" class="toast-container">
            <For
                each=move || notifications.items()
                key=|n| n.id
                children=move |n| view! { <Toast notification=n /> }
            />
        </div>
    }
}

#[component]
fn Toast(notification: Notification) -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext not found in context");
    let service = ctx.notifications;
    let id = notification.id;
    let severity = notification.severity;

    spawn_local(service.run_lifecycle(id, TimeoutFuture::new));

    let class = move || {
        if service.is_hiding(id) {
            format!("toast {} hiding", severity.css_class())
        } else {
            format!("toast {}", severity.css_class())
        }
    };

    view! {
        <div class=class on:click=move |_| service.remove(id)>
            {icon(severity.icon_name())}
            <div>{notification.message}</div>
        </div>
    }
}
