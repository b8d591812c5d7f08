//! Toast notifications
//!
//! Short-lived, non-blocking messages layered over whatever view is
//! showing. Callers fire and forget; the queue caps how many are held
//! and each toast expires on its own.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Most toasts kept at once; older ones are dropped first
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created: Instant,
}

/// Bounded queue of active toasts
pub struct Toasts {
    queue: VecDeque<Toast>,
    max_toasts: usize,
    ttl: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::with_limits(MAX_TOASTS, TOAST_TTL)
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(max_toasts: usize, ttl: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            max_toasts,
            ttl,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        self.queue.push_back(Toast {
            kind,
            message,
            created: Instant::now(),
        });
        while self.queue.len() > self.max_toasts {
            self.queue.pop_front();
        }
    }

    /// Drop toasts that have outlived their time on screen.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.queue
            .retain(|toast| now.duration_since(toast.created) < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_error_kinds() {
        let mut toasts = Toasts::new();
        toasts.success("Logged in successfully!");
        toasts.error("Network error");

        let kinds: Vec<ToastKind> = toasts.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Success, ToastKind::Error]);
    }

    #[test]
    fn test_queue_is_bounded_oldest_first() {
        let mut toasts = Toasts::with_limits(3, TOAST_TTL);
        for i in 0..5 {
            toasts.success(format!("toast {}", i));
        }

        assert_eq!(toasts.len(), 3);
        let messages: Vec<&str> = toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["toast 2", "toast 3", "toast 4"]);
    }

    #[test]
    fn test_prune_drops_expired() {
        let mut toasts = Toasts::with_limits(4, Duration::from_secs(1));
        toasts.success("fresh");
        assert_eq!(toasts.len(), 1);

        // Still visible right away.
        toasts.prune(Instant::now());
        assert_eq!(toasts.len(), 1);

        // Gone once the TTL has passed.
        toasts.prune(Instant::now() + Duration::from_secs(2));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut toasts = Toasts::new();
        toasts.success("one");
        toasts.error("two");
        toasts.clear();
        assert!(toasts.is_empty());
    }
}
