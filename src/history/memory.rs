use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::history::{ TranscriptError, TranscriptStore };
use crate::models::chat::{ ChatMessage, Conversation, Sender };

/// Process-local transcript store. Conversations live for the life of the
/// process and are dropped on exit.
pub struct MemoryTranscriptStore {
    conversations: Mutex<HashMap<String, Vec<ChatMessage>>>,
}

impl MemoryTranscriptStore {
    pub fn new() -> Self {
        Self {
            conversations: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl TranscriptStore for MemoryTranscriptStore {
    async fn add_message(
        &self,
        conversation_id: &str,
        sender: Sender,
        content: &str
    ) -> Result<(), TranscriptError> {
        let mut conversations = self.conversations.lock().await;
        let messages = conversations.entry(conversation_id.to_string()).or_default();
        messages.push(ChatMessage {
            sender,
            content: content.to_string(),
            timestamp: Utc::now().timestamp(),
        });
        Ok(())
    }

    async fn get_conversation(
        &self,
        conversation_id: &str,
        limit: usize
    ) -> Result<Conversation, TranscriptError> {
        let conversations = self.conversations.lock().await;
        let messages = conversations
            .get(conversation_id)
            .map(|messages| {
                let start = messages.len().saturating_sub(limit);
                messages[start..].to_vec()
            })
            .unwrap_or_default();

        Ok(Conversation {
            id: conversation_id.to_string(),
            messages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn messages_come_back_in_append_order() {
        let store = MemoryTranscriptStore::new();
        store.add_message("c1", Sender::User, "hello").await.unwrap();
        store.add_message("c1", Sender::Bot, "hi there").await.unwrap();
        store.add_message("c1", Sender::User, "great").await.unwrap();

        let conversation = store.get_conversation("c1", 50).await.unwrap();
        assert_eq!(conversation.id, "c1");
        let contents: Vec<&str> = conversation.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["hello", "hi there", "great"]);
        assert_eq!(conversation.messages[0].sender, Sender::User);
        assert_eq!(conversation.messages[1].sender, Sender::Bot);
    }

    #[tokio::test]
    async fn limit_keeps_the_most_recent_messages() {
        let store = MemoryTranscriptStore::new();
        for i in 0..6 {
            store.add_message("c1", Sender::User, &format!("m{}", i)).await.unwrap();
        }

        let conversation = store.get_conversation("c1", 2).await.unwrap();
        let contents: Vec<&str> = conversation.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["m4", "m5"]);
    }

    #[tokio::test]
    async fn unknown_conversation_is_empty() {
        let store = MemoryTranscriptStore::new();
        let conversation = store.get_conversation("missing", 50).await.unwrap();
        assert!(conversation.messages.is_empty());
    }

    #[tokio::test]
    async fn conversations_are_isolated_by_id() {
        let store = MemoryTranscriptStore::new();
        store.add_message("c1", Sender::User, "first").await.unwrap();
        store.add_message("c2", Sender::User, "second").await.unwrap();

        let c1 = store.get_conversation("c1", 50).await.unwrap();
        let c2 = store.get_conversation("c2", 50).await.unwrap();
        assert_eq!(c1.messages.len(), 1);
        assert_eq!(c2.messages.len(), 1);
        assert_eq!(c1.messages[0].content, "first");
        assert_eq!(c2.messages[0].content, "second");
    }
}
