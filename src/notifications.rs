//! Transient toast notifications.
//!
//! At most `MAX_VISIBLE` toasts show at once; extras wait in a queue.
//! Success and info toasts expire on their own, errors stay until dismissed.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use iced::Color;

const MAX_VISIBLE: usize = 3;
const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

impl Severity {
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => Color::from_rgb(0.16, 0.55, 0.32),
            Severity::Info => Color::from_rgb(0.20, 0.42, 0.75),
            Severity::Error => Color::from_rgb(0.75, 0.22, 0.22),
        }
    }

    fn auto_dismiss(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(AUTO_DISMISS_AFTER),
            Severity::Error => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title: String,
    body: String,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            title: title.into(),
            body: body.into(),
            created_at: Instant::now(),
        }
    }

    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, body)
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, body)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, body)
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    fn expired(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss()
            .is_some_and(|after| now.duration_since(self.created_at) >= after)
    }
}

#[derive(Debug, Default)]
pub struct Notifications {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Notifications {
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_back(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    pub fn tick(&mut self) {
        self.expire(Instant::now());
    }

    fn expire(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.expired(now));
        if self.visible.len() != before {
            self.promote();
        }
    }

    fn promote(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut next) = self.queue.pop_front() else {
                break;
            };
            // Queued time does not count towards the display time.
            next.created_at = Instant::now();
            self.visible.push_back(next);
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.queue.is_empty()
    }
}
