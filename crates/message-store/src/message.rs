//! Message records and the checks applied before they are created.

use crate::error::MessageError;
use account_registry::check_cell_phone_number;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a message ID.
pub const MESSAGE_ID_LENGTH: usize = 10;

/// Longest message text that is ready to send.
pub const MAX_MESSAGE_LENGTH: usize = 250;

/// A message addressed to a recipient.
///
/// Immutable once built, so the hash always matches the ID, sequence
/// number and text it was derived from. IDs are random and may collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: String,
    recipient: String,
    text: String,
    sequence: u32,
    hash: String,
}

impl Message {
    /// Create a message with a fresh random ID.
    pub fn new(recipient: impl Into<String>, text: impl Into<String>, sequence: u32) -> Self {
        Self::with_id(generate_message_id(), recipient, text, sequence)
    }

    /// Create a message with a caller-chosen ID.
    pub fn with_id(
        id: impl Into<String>,
        recipient: impl Into<String>,
        text: impl Into<String>,
        sequence: u32,
    ) -> Self {
        let id = id.into();
        let text = text.into();
        let hash = create_message_hash(&id, sequence, &text);
        Self {
            id,
            recipient: recipient.into(),
            text,
            sequence,
            hash,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caller-supplied position of the message in its batch.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Length of the text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Message ID: {}\nHash: {}\nRecipient: {}\nMessage: {}",
            self.id, self.hash, self.recipient, self.text
        )
    }
}

/// Random string of ten decimal digits.
pub fn generate_message_id() -> String {
    let mut rng = rand::thread_rng();
    (0..MESSAGE_ID_LENGTH)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Check that `id` is exactly ten ASCII digits.
pub fn check_message_id(id: &str) -> bool {
    id.len() == MESSAGE_ID_LENGTH && id.bytes().all(|b| b.is_ascii_digit())
}

/// Build `<first two ID digits>:<sequence>:<FIRSTWORD><LASTWORD>`.
///
/// A single-word text repeats the word; an empty text contributes nothing.
pub fn create_message_hash(id: &str, sequence: u32, text: &str) -> String {
    let prefix: String = id.chars().take(2).collect();

    let mut words = text.split_whitespace();
    let first = words.next().unwrap_or_default();
    let last = words.last().unwrap_or(first);

    format!(
        "{}:{}:{}{}",
        prefix,
        sequence,
        first.to_uppercase(),
        last.to_uppercase()
    )
}

/// Validate a recipient number with the registration rules.
pub fn check_recipient_cell(cell: &str) -> Result<&'static str, MessageError> {
    if check_cell_phone_number(cell) {
        Ok("Cell phone number successfully validated.")
    } else {
        Err(MessageError::InvalidRecipient(cell.to_string()))
    }
}

/// Outcome of the length check on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthCheck {
    /// No text was given
    Missing,
    /// Within the limit
    Ready,
    /// Over the limit by this many characters
    Exceeds(usize),
}

impl LengthCheck {
    pub fn is_ready(&self) -> bool {
        matches!(self, LengthCheck::Ready)
    }
}

impl fmt::Display for LengthCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthCheck::Missing => write!(f, "Message text is missing"),
            LengthCheck::Ready => write!(f, "Message ready to send"),
            LengthCheck::Exceeds(excess) => write!(f, "Message exceeds {} characters", excess),
        }
    }
}

/// Check message text against [`MAX_MESSAGE_LENGTH`].
pub fn check_message_length(text: Option<&str>) -> LengthCheck {
    match text {
        None => LengthCheck::Missing,
        Some(text) => {
            let length = text.chars().count();
            if length <= MAX_MESSAGE_LENGTH {
                LengthCheck::Ready
            } else {
                LengthCheck::Exceeds(length - MAX_MESSAGE_LENGTH)
            }
        }
    }
}

/// Collection a classified message ends up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Sent,
    Stored,
    Disregarded,
}

impl Bucket {
    /// Search and deletion order.
    pub const PRIORITY: [Bucket; 3] = [Bucket::Sent, Bucket::Stored, Bucket::Disregarded];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Sent => "sent",
            Bucket::Stored => "stored",
            Bucket::Disregarded => "disregarded",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user chose to do with a new message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageAction {
    Send,
    Store,
    Disregard,
}

impl MessageAction {
    /// Bucket the action moves a message into.
    pub fn bucket(&self) -> Bucket {
        match self {
            MessageAction::Send => Bucket::Sent,
            MessageAction::Store => Bucket::Stored,
            MessageAction::Disregard => Bucket::Disregarded,
        }
    }

    /// Text reported once the action is applied.
    pub fn status(&self) -> &'static str {
        match self {
            MessageAction::Send => "Message successfully sent",
            MessageAction::Store => "Message successfully stored",
            MessageAction::Disregard => "Press 0 to delete message",
        }
    }
}

impl FromStr for MessageAction {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "send" => Ok(MessageAction::Send),
            "store" => Ok(MessageAction::Store),
            "disregard" => Ok(MessageAction::Disregard),
            _ => Err(MessageError::InvalidAction(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_message_id_generation() {
        for _ in 0..50 {
            let message = Message::new("+27838968976", "Hello", 0);
            assert_eq!(message.id().len(), 10);
            assert!(check_message_id(message.id()));
        }
    }

    #[test]
    fn test_message_id_validation() {
        assert!(check_message_id("1234567890"));
        assert!(check_message_id("0000000000"));
        assert!(!check_message_id("123456789"));
        assert!(!check_message_id("12345678901"));
        assert!(!check_message_id("123456789a"));
        assert!(!check_message_id(""));
    }

    #[test]
    fn test_message_hash_generation() {
        let message = Message::new(
            "+27838968976",
            "Hi Mike, can you join us for dinner tonight",
            0,
        );
        let pattern = Regex::new(r"^\d{2}:0:HITONIGHT$").unwrap();
        assert!(pattern.is_match(message.hash()), "{}", message.hash());
    }

    #[test]
    fn test_message_hash_single_word() {
        let message = Message::new("+27838968976", "Hello", 1);
        assert!(message.hash().ends_with(":1:HELLOHELLO"));
    }

    #[test]
    fn test_message_hash_uses_id_prefix() {
        let message = Message::with_id("4812345678", "+27838968976", "It is dinner time!", 4);
        assert_eq!(message.hash(), "48:4:ITTIME!");
    }

    #[test]
    fn test_message_hash_trims_and_collapses_whitespace() {
        assert_eq!(
            create_message_hash("1200000000", 3, "  where   are you\t "),
            "12:3:WHEREYOU"
        );
    }

    #[test]
    fn test_message_hash_empty_text() {
        assert_eq!(create_message_hash("1200000000", 2, ""), "12:2:");
        assert_eq!(create_message_hash("1200000000", 2, "   "), "12:2:");
    }

    #[test]
    fn test_message_display() {
        let message = Message::with_id("1234567890", "+27838968976", "Hi there", 0);
        let shown = message.to_string();
        assert!(shown.contains("Message ID: 1234567890"));
        assert!(shown.contains("Hash: 12:0:HITHERE"));
        assert!(shown.contains("Recipient: +27838968976"));
        assert!(shown.contains("Message: Hi there"));
    }

    #[test]
    fn test_message_length_validation() {
        assert_eq!(
            check_message_length(Some("This is a valid message under 250 characters")),
            LengthCheck::Ready
        );
        assert_eq!(check_message_length(Some(&"a".repeat(250))), LengthCheck::Ready);

        let result = check_message_length(Some(&"a".repeat(260)));
        assert_eq!(result, LengthCheck::Exceeds(10));
        assert_eq!(result.to_string(), "Message exceeds 10 characters");

        assert_eq!(check_message_length(None), LengthCheck::Missing);
        assert!(!check_message_length(None).is_ready());
        assert_eq!(
            check_message_length(Some("ok")).to_string(),
            "Message ready to send"
        );
    }

    #[test]
    fn test_recipient_cell_validation() {
        assert!(check_recipient_cell("+27838968976")
            .unwrap()
            .contains("successfully"));

        let err = check_recipient_cell("08966553").unwrap_err();
        assert!(!err.to_string().contains("successfully"));
    }

    #[test]
    fn test_action_parsing_is_case_insensitive() {
        assert_eq!("send".parse::<MessageAction>().unwrap(), MessageAction::Send);
        assert_eq!("STORE".parse::<MessageAction>().unwrap(), MessageAction::Store);
        assert_eq!(
            "Disregard".parse::<MessageAction>().unwrap(),
            MessageAction::Disregard
        );
        assert!(matches!(
            "delete".parse::<MessageAction>(),
            Err(MessageError::InvalidAction(_))
        ));
    }

    #[test]
    fn test_message_serialization() {
        let message = Message::with_id("1234567890", "+27838968976", "Hello", 1);
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["id"], "1234567890");
        assert_eq!(json["recipient"], "+27838968976");
        assert_eq!(json["sequence"], 1);
        assert_eq!(json["hash"], "12:1:HELLOHELLO");
    }

    #[test]
    fn test_bucket_serialization() {
        let json = serde_json::to_string(&Bucket::Disregarded).unwrap();
        assert_eq!(json, "\"disregarded\"");
    }
}
