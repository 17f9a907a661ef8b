//! Single-line status channel.

/// Most recent lifecycle or drawing event, shown as `Status: <message>`.
///
/// Every update is mirrored to the log at info level.
#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
    updates: u64,
}

impl StatusLine {
    /// Creates a status line showing `initial`. The initial message is not
    /// counted as an update.
    pub fn new(initial: impl Into<String>) -> Self {
        let message = initial.into();
        log::info!("{}", message);
        Self {
            message,
            updates: 0,
        }
    }

    /// Replaces the current message.
    pub fn update(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.updates += 1;
        log::info!("{}", self.message);
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The rendered status line.
    pub fn text(&self) -> String {
        format!("Status: {}", self.message)
    }

    /// Number of updates since creation.
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_replaces_message_and_counts() {
        let mut status = StatusLine::new("Ready");
        assert_eq!(status.text(), "Status: Ready");
        assert_eq!(status.updates(), 0);

        status.update("Canvas cleared");
        assert_eq!(status.message(), "Canvas cleared");
        assert_eq!(status.updates(), 1);
    }
}
