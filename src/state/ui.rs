// UI state - presentation settings and transient status messages
use crate::style::Theme;
use std::time::{Duration, Instant};

pub struct UIState {
    pub theme: Theme,
    pub info_message: Option<(String, Instant)>,
}

impl UIState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            info_message: None,
        }
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self, now: Instant, timeout: Duration) {
        if let Some((_, time)) = &self.info_message {
            if now.saturating_duration_since(*time) >= timeout {
                self.info_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_message_expires() {
        let mut ui = UIState::new(Theme::Dark);
        ui.set_info("dropped".to_string());
        let (_, shown_at) = ui.info_message.clone().unwrap();

        ui.clear_expired_messages(shown_at + Duration::from_secs(1), Duration::from_secs(2));
        assert!(ui.info_message.is_some());

        ui.clear_expired_messages(shown_at + Duration::from_secs(2), Duration::from_secs(2));
        assert!(ui.info_message.is_none());
    }
}
