//! Transient notification line
//!
//! Non-blocking messages shown at the bottom of the page for a few seconds.

use std::time::{Duration, Instant};

const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// At most one visible notification at a time; a new one replaces it
pub struct NotificationState {
    message: Option<(String, Instant)>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn show(&mut self, text: &str, now: Instant) {
        self.message = Some((text.to_string(), now + NOTIFICATION_TTL));
    }

    /// Drop the message once its time is up
    pub fn expire(&mut self, now: Instant) {
        if let Some((_, deadline)) = &self.message {
            if now >= *deadline {
                self.message = None;
            }
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.message.as_ref().map(|(text, _)| text.as_str())
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_expire() {
        let mut state = NotificationState::new();
        let now = Instant::now();

        state.show("无法加载设置模块", now);
        assert_eq!(state.current(), Some("无法加载设置模块"));

        state.expire(now + Duration::from_secs(1));
        assert!(state.current().is_some());

        state.expire(now + Duration::from_secs(4));
        assert!(state.current().is_none());
    }

    #[test]
    fn test_new_message_replaces_old() {
        let mut state = NotificationState::new();
        let now = Instant::now();

        state.show("first", now);
        state.show("second", now + Duration::from_secs(1));

        assert_eq!(state.current(), Some("second"));
        // The replacement got a fresh deadline
        state.expire(now + Duration::from_secs(4));
        assert_eq!(state.current(), Some("second"));
    }
}
