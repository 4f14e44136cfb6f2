//! Sent, stored and disregarded messages.

use crate::error::MessageError;
use crate::message::{Bucket, Message, MessageAction};
use crate::report::Report;
use snapshot_store::Store;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

/// The three disjoint collections.
#[derive(Debug, Default)]
struct Buckets {
    sent: Vec<Message>,
    stored: Vec<Message>,
    disregarded: Vec<Message>,
}

impl Buckets {
    fn get(&self, bucket: Bucket) -> &Vec<Message> {
        match bucket {
            Bucket::Sent => &self.sent,
            Bucket::Stored => &self.stored,
            Bucket::Disregarded => &self.disregarded,
        }
    }

    fn get_mut(&mut self, bucket: Bucket) -> &mut Vec<Message> {
        match bucket {
            Bucket::Sent => &mut self.sent,
            Bucket::Stored => &mut self.stored,
            Bucket::Disregarded => &mut self.disregarded,
        }
    }

    /// All messages, sent first, then stored, then disregarded.
    fn iter(&self) -> impl Iterator<Item = (Bucket, &Message)> {
        Bucket::PRIORITY
            .into_iter()
            .flat_map(move |bucket| self.get(bucket).iter().map(move |m| (bucket, m)))
    }

    fn len(&self) -> usize {
        self.sent.len() + self.stored.len() + self.disregarded.len()
    }
}

/// Message collections for one application run.
///
/// Storing a message rewrites the stored-messages snapshot; nothing else
/// touches the file. Clones share the same collections.
#[derive(Clone)]
pub struct MessageStore {
    buckets: Arc<RwLock<Buckets>>,
    store: Arc<Store>,
}

impl MessageStore {
    /// Create an empty message store persisting stored messages to `store`.
    pub fn new(store: Store) -> Self {
        Self {
            buckets: Arc::new(RwLock::new(Buckets::default())),
            store: Arc::new(store),
        }
    }

    /// Parse `action` and apply it to `message`.
    ///
    /// Unknown actions leave every bucket untouched and drop the message.
    pub async fn classify(
        &self,
        message: Message,
        action: &str,
    ) -> Result<MessageAction, MessageError> {
        let action: MessageAction = action.parse()?;
        self.apply(message, action).await;
        Ok(action)
    }

    /// Move `message` into the bucket for `action`.
    ///
    /// Storing rewrites the stored-messages snapshot. A failed write is
    /// logged and the message stays stored.
    #[instrument(skip(self, message), fields(id = message.id()))]
    pub async fn apply(&self, message: Message, action: MessageAction) {
        let bucket = action.bucket();

        let mut buckets = self.buckets.write().await;
        buckets.get_mut(bucket).push(message);
        debug!("Message {} (total: {})", bucket, buckets.len());

        if action == MessageAction::Store {
            self.persist_stored(&buckets.stored).await;
        }
    }

    /// Text of the first message with this ID.
    pub async fn search_by_id(&self, id: &str) -> Option<String> {
        let buckets = self.buckets.read().await;
        let text = buckets
            .iter()
            .find(|(_, m)| m.id() == id)
            .map(|(_, m)| m.text().to_string());
        text
    }

    /// Every message addressed to `recipient`, in bucket priority order.
    pub async fn search_by_recipient(&self, recipient: &str) -> Vec<Message> {
        let buckets = self.buckets.read().await;
        buckets
            .iter()
            .filter(|(_, m)| m.recipient() == recipient)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Text of the longest message; the earliest wins a tie.
    ///
    /// Empty when there are no messages.
    pub async fn longest_message(&self) -> String {
        let buckets = self.buckets.read().await;
        longest_in(&buckets).unwrap_or_default()
    }

    /// Remove the first message with this hash.
    ///
    /// Returns the bucket it was removed from. The snapshot file is not
    /// rewritten.
    #[instrument(skip(self))]
    pub async fn delete_by_hash(&self, hash: &str) -> Option<Bucket> {
        let mut buckets = self.buckets.write().await;
        for bucket in Bucket::PRIORITY {
            let messages = buckets.get_mut(bucket);
            if let Some(index) = messages.iter().position(|m| m.hash() == hash) {
                messages.remove(index);
                info!("Deleted {} message", bucket);
                return Some(bucket);
            }
        }
        None
    }

    /// Hashes of all messages in bucket priority order.
    pub async fn message_hashes(&self) -> Vec<String> {
        let buckets = self.buckets.read().await;
        buckets.iter().map(|(_, m)| m.hash().to_string()).collect()
    }

    /// IDs of all messages in bucket priority order.
    pub async fn message_ids(&self) -> Vec<String> {
        let buckets = self.buckets.read().await;
        buckets.iter().map(|(_, m)| m.id().to_string()).collect()
    }

    /// Number of sent messages.
    pub async fn total_sent(&self) -> usize {
        self.count(Bucket::Sent).await
    }

    /// Number of messages in one bucket.
    pub async fn count(&self, bucket: Bucket) -> usize {
        self.buckets.read().await.get(bucket).len()
    }

    /// Copy of one bucket in insertion order.
    pub async fn messages(&self, bucket: Bucket) -> Vec<Message> {
        self.buckets.read().await.get(bucket).clone()
    }

    /// Replace the stored bucket with the persisted snapshot.
    pub async fn load_stored(&self) -> Result<usize, MessageError> {
        let loaded: Vec<Message> = self.store.load().await?;
        let count = loaded.len();

        let mut buckets = self.buckets.write().await;
        buckets.stored = loaded;
        info!("Loaded {} stored messages", count);

        Ok(count)
    }

    /// Summary of every bucket.
    pub async fn report(&self) -> Report {
        let buckets = self.buckets.read().await;
        Report {
            sent: buckets.sent.clone(),
            stored: buckets.stored.clone(),
            disregarded: buckets.disregarded.clone(),
            longest: longest_in(&buckets),
        }
    }

    /// Empty every bucket. The snapshot file is left alone.
    pub async fn clear(&self) {
        let mut buckets = self.buckets.write().await;
        *buckets = Buckets::default();
        debug!("Cleared all messages");
    }

    async fn persist_stored(&self, stored: &[Message]) {
        if let Err(e) = self.store.save(stored).await {
            warn!("Failed to save stored messages: {}", e);
        }
    }
}

fn longest_in(buckets: &Buckets) -> Option<String> {
    let mut longest: Option<&Message> = None;
    for (_, message) in buckets.iter() {
        if message.len() > longest.map_or(0, Message::len) {
            longest = Some(message);
        }
    }
    longest.map(|m| m.text().to_string())
}
