//! Channel context passed to the response generator.

use chrono::{DateTime, SecondsFormat, Utc};

/// Metadata about where a conversation happens, folded into the model's
/// system prompt: channel, server, sender, time, timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelContext {
    pub channel_name: String,
    pub server_name: String,
    /// Free-form notes from the server registration, if any.
    pub server_context: Option<String>,
    pub sender_name: String,
    pub timestamp: DateTime<Utc>,
    /// IANA timezone name the server operates in (e.g. "Europe/Berlin").
    pub timezone: String,
}

impl ChannelContext {
    /// Renders the context block appended to the system prompt.
    pub fn format_for_model(&self) -> String {
        let mut lines = vec![
            format!("Server: {}", self.server_name),
            format!("Channel: #{}", self.channel_name),
            format!("Talking to: {}", self.sender_name),
            format!(
                "Current time: {} ({})",
                self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
                self.timezone
            ),
        ];
        if let Some(notes) = &self.server_context {
            if !notes.trim().is_empty() {
                lines.push(format!("Server notes: {}", notes));
            }
        }
        lines.join("\n")
    }
}
