//! Summary of all message buckets.

use crate::message::Message;
use std::fmt;

const RULE_WIDTH: usize = 50;

/// Snapshot of every bucket taken at one point in time.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub sent: Vec<Message>,
    pub stored: Vec<Message>,
    pub disregarded: Vec<Message>,
    pub longest: Option<String>,
}

impl Report {
    pub fn total(&self) -> usize {
        self.sent.len() + self.stored.len() + self.disregarded.len()
    }
}

fn write_messages(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    label: &str,
    messages: &[Message],
    with_id: bool,
) -> fmt::Result {
    if messages.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n{}:", title)?;
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
    for (i, message) in messages.iter().enumerate() {
        writeln!(f, "{} {}:", label, i + 1)?;
        writeln!(f, "   Hash: {}", message.hash())?;
        writeln!(f, "   Recipient: {}", message.recipient())?;
        writeln!(f, "   Message: {}", message.text())?;
        if with_id {
            writeln!(f, "   Message ID: {}", message.id())?;
        }
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "         QUICKCHAT COMPREHENSIVE REPORT")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;

        writeln!(f, "\nSUMMARY STATISTICS:")?;
        writeln!(f, "   Total Sent Messages: {}", self.sent.len())?;
        writeln!(f, "   Total Stored Messages: {}", self.stored.len())?;
        writeln!(f, "   Total Disregarded Messages: {}", self.disregarded.len())?;
        writeln!(f, "   Total Messages: {}", self.total())?;

        write_messages(f, "SENT MESSAGES", "Message", &self.sent, true)?;
        write_messages(f, "STORED MESSAGES", "Stored Message", &self.stored, false)?;
        write_messages(
            f,
            "DISREGARDED MESSAGES",
            "Disregarded Message",
            &self.disregarded,
            false,
        )?;

        if let Some(longest) = &self.longest {
            writeln!(f, "\nLONGEST MESSAGE:")?;
            writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
            writeln!(f, "   \"{}\"", longest)?;
            writeln!(f, "   Length: {} characters", longest.chars().count())?;
        }

        write!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = Report::default();
        let text = report.to_string();

        assert!(text.contains("Total Messages: 0"));
        assert!(!text.contains("SENT MESSAGES"));
        assert!(!text.contains("LONGEST MESSAGE"));
    }

    #[test]
    fn test_report_lists_each_bucket() {
        let report = Report {
            sent: vec![Message::with_id("1234567890", "+27838968976", "Hi Mike", 0)],
            stored: vec![Message::with_id("2234567890", "+27838884567", "Later", 1)],
            disregarded: vec![],
            longest: Some("Hi Mike".into()),
        };
        let text = report.to_string();

        assert_eq!(report.total(), 2);
        assert!(text.contains("Total Sent Messages: 1"));
        assert!(text.contains("Total Stored Messages: 1"));
        assert!(text.contains("Message ID: 1234567890"));
        // Only sent messages show their ID
        assert!(!text.contains("Message ID: 2234567890"));
        assert!(text.contains("Stored Message 1:"));
        assert!(!text.contains("DISREGARDED MESSAGES"));
        assert!(text.contains("Length: 7 characters"));
    }
}
